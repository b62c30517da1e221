use std::future::Future;

use crate::error::{FrameError, InitError};
use crate::pipeline::PipelineDesc;
use crate::render::FramePlan;

use super::{AlphaMode, SurfaceErrorAction};

/// GPU operations the triangle renderer is built from.
///
/// [`Gpu`](super::Gpu) implements this on top of wgpu. The renderer only talks to this
/// trait, which keeps the startup and frame sequencing independent of a live device.
pub trait GpuPlatform {
    type Adapter;
    /// Logical device together with its queue.
    type Device;
    /// Configured presentation surface.
    type Surface;
    type Pipeline;
    type Buffer;
    /// One in-flight frame: back buffer view plus command encoder.
    type Frame;

    /// Requests a physical adapter. `None` means the platform has no usable GPU.
    fn request_adapter(&self) -> impl Future<Output = Option<Self::Adapter>>;

    /// Requests a logical device and queue from `adapter`.
    fn request_device(
        &self,
        adapter: &Self::Adapter,
    ) -> impl Future<Output = Result<Self::Device, String>>;

    /// Configures the presentation surface with the preferred format and `alpha_mode`.
    fn configure_surface(
        &self,
        adapter: &Self::Adapter,
        device: &Self::Device,
        alpha_mode: AlphaMode,
    ) -> Result<Self::Surface, InitError>;

    /// Returns the configured pixel format of `surface`.
    fn surface_format(&self, surface: &Self::Surface) -> wgpu::TextureFormat;

    /// Reconfigures `surface` for a new drawable size. Zero sizes are deferred.
    fn resize_surface(
        &self,
        device: &Self::Device,
        surface: &mut Self::Surface,
        width: u32,
        height: u32,
    );

    /// Reacts to a failed texture acquisition, reconfiguring the surface when that helps.
    fn recover_surface(
        &self,
        device: &Self::Device,
        surface: &Self::Surface,
        err: &wgpu::SurfaceError,
    ) -> SurfaceErrorAction;

    /// Compiles both shader stages and builds the render pipeline described by `desc`.
    fn create_pipeline(&self, device: &Self::Device, desc: &PipelineDesc) -> Self::Pipeline;

    /// Creates a vertex buffer and writes `contents` into it.
    fn create_vertex_buffer(
        &self,
        device: &Self::Device,
        label: &str,
        contents: &[u8],
    ) -> Self::Buffer;

    /// Acquires the current surface texture and opens a command encoder for it.
    fn begin_frame(
        &self,
        device: &Self::Device,
        surface: &Self::Surface,
    ) -> Result<Self::Frame, FrameError>;

    /// Records the clear pass and the draw described by `plan`.
    ///
    /// `vertex_buffer`, when present, is bound at slot [`FramePlan::VERTEX_BUFFER_SLOT`].
    fn record_frame(
        &self,
        frame: &mut Self::Frame,
        pipeline: &Self::Pipeline,
        vertex_buffer: Option<&Self::Buffer>,
        plan: &FramePlan,
    );

    /// Finishes the encoder, submits it to the queue and presents the frame.
    fn submit_frame(&self, device: &Self::Device, frame: Self::Frame);
}
