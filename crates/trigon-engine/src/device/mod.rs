//! GPU device + surface management.
//!
//! This module is responsible for:
//! - the [`GpuPlatform`] seam the renderer is written against
//! - creating the wgpu Instance/Adapter/Device/Queue ([`Gpu`])
//! - choosing and configuring the surface format and alpha mode
//! - acquiring frames and submitting their command buffers

mod gpu;
mod init;
mod platform;
mod surface;

pub use gpu::{Gpu, GpuDevice, GpuFrame, GpuSurface};
pub use init::GpuInit;
pub use platform::GpuPlatform;
pub use surface::{AlphaMode, SurfaceErrorAction};
