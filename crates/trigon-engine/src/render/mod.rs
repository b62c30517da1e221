//! Triangle renderer and its per-frame recipe.
//!
//! [`TriangleRenderer`] is generic over [`GpuPlatform`](crate::device::GpuPlatform); the
//! runtime instantiates it with the wgpu-backed [`Gpu`](crate::device::Gpu).

mod plan;
mod triangle;

#[cfg(test)]
mod fake;

pub use plan::{DrawCall, FrameOutcome, FramePlan};
pub use triangle::TriangleRenderer;
