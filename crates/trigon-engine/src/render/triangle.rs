use crate::device::{GpuPlatform, SurfaceErrorAction};
use crate::error::{FrameError, InitError};
use crate::pipeline::TriangleVariant;

use super::plan::{FrameOutcome, FramePlan};

/// Fully initialized triangle renderer.
///
/// Holding one of these means startup succeeded: the device, configured surface, pipeline
/// and (for the vertex-buffer variant) the uploaded vertex buffer all exist. Nothing here
/// changes after [`start`](Self::start) except the surface size and the frame counter.
pub struct TriangleRenderer<P: GpuPlatform> {
    platform: P,
    device: P::Device,
    surface: P::Surface,
    pipeline: P::Pipeline,
    vertex_buffer: Option<P::Buffer>,
    plan: FramePlan,
    frames_submitted: u64,
}

impl<P: GpuPlatform> TriangleRenderer<P> {
    /// Runs the startup sequence: adapter, device, surface, pipeline, vertex buffer.
    ///
    /// Stops at the first failing phase; later phases are never attempted.
    pub async fn start(platform: P, variant: &TriangleVariant) -> Result<Self, InitError> {
        log::info!("initializing {} triangle", variant.name);

        let Some(adapter) = platform.request_adapter().await else {
            let err = InitError::UnsupportedPlatform;
            log::error!("{err}");
            return Err(err);
        };

        let device = platform.request_device(&adapter).await.map_err(|reason| {
            let err = InitError::DeviceCreationFailed(reason);
            log::error!("{err}");
            err
        })?;

        let surface = platform
            .configure_surface(&adapter, &device, variant.alpha_mode)
            .inspect_err(|err| log::error!("{err}"))?;
        let format = platform.surface_format(&surface);

        let pipeline = platform.create_pipeline(&device, &variant.pipeline_desc(format));
        log::info!("pipeline created (target {format:?})");

        let vertex_buffer = variant.vertex_data().map(|vertices| {
            platform.create_vertex_buffer(
                &device,
                "trigon triangle vbo",
                bytemuck::cast_slice(vertices),
            )
        });

        Ok(Self {
            platform,
            device,
            surface,
            pipeline,
            vertex_buffer,
            plan: variant.frame_plan(),
            frames_submitted: 0,
        })
    }

    /// Records and submits one frame.
    ///
    /// Failures are logged and the frame is dropped; they never escape this call.
    pub fn render_frame(&mut self) -> FrameOutcome {
        let mut frame = match self.platform.begin_frame(&self.device, &self.surface) {
            Ok(frame) => frame,
            Err(FrameError::Surface(err)) => {
                let action = self.platform.recover_surface(&self.device, &self.surface, &err);
                return match action {
                    SurfaceErrorAction::Fatal => {
                        log::error!("{}", FrameError::Surface(err));
                        FrameOutcome::Fatal
                    }
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        log::warn!("{}; frame dropped ({action:?})", FrameError::Surface(err));
                        FrameOutcome::Dropped
                    }
                };
            }
            Err(err @ FrameError::CommandEncodingFailed(_)) => {
                log::error!("{err}");
                return FrameOutcome::Dropped;
            }
        };

        self.platform.record_frame(
            &mut frame,
            &self.pipeline,
            self.vertex_buffer.as_ref(),
            &self.plan,
        );
        self.platform.submit_frame(&self.device, frame);

        self.frames_submitted = self.frames_submitted.wrapping_add(1);
        log::trace!("frame {} submitted", self.frames_submitted);

        FrameOutcome::Submitted
    }

    /// Follows a change of the drawable size in physical pixels.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.platform
            .resize_surface(&self.device, &mut self.surface, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.platform.surface_format(&self.surface)
    }

    pub fn frames_submitted(&self) -> u64 {
        self.frames_submitted
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn pipeline(&self) -> &P::Pipeline {
        &self.pipeline
    }

    pub fn vertex_buffer(&self) -> Option<&P::Buffer> {
        self.vertex_buffer.as_ref()
    }
}
