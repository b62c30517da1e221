//! Recording `GpuPlatform` used by the renderer tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::device::{AlphaMode, GpuPlatform, SurfaceErrorAction};
use crate::error::{FrameError, InitError};
use crate::pipeline::PipelineDesc;

use super::plan::{DrawCall, FramePlan};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    RequestAdapter,
    RequestDevice,
    ConfigureSurface(AlphaMode),
    CreatePipeline,
    CreateVertexBuffer(Vec<u8>),
    BeginFrame,
    Record {
        draw: DrawCall,
        clear_color: wgpu::Color,
        vertex_buffer_bound: bool,
    },
    Submit,
    Resize(u32, u32),
    RecoverSurface,
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

pub(crate) struct FakePlatform {
    adapter_available: bool,
    device_error: Option<String>,
    surface_error: Option<String>,
    format: wgpu::TextureFormat,
    recover_action: SurfaceErrorAction,
    frame_failures: RefCell<VecDeque<FrameError>>,
    log: CallLog,
}

pub(crate) struct FakeFrame {
    recorded: bool,
}

impl FakePlatform {
    pub(crate) const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Bgra8Unorm;

    pub(crate) fn new() -> Self {
        Self {
            adapter_available: true,
            device_error: None,
            surface_error: None,
            format: Self::FORMAT,
            recover_action: SurfaceErrorAction::SkipFrame,
            frame_failures: RefCell::new(VecDeque::new()),
            log: CallLog::default(),
        }
    }

    pub(crate) fn without_adapter() -> Self {
        Self {
            adapter_available: false,
            ..Self::new()
        }
    }

    pub(crate) fn failing_device(reason: &str) -> Self {
        Self {
            device_error: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub(crate) fn without_surface(reason: &str) -> Self {
        Self {
            surface_error: Some(reason.to_string()),
            ..Self::new()
        }
    }

    pub(crate) fn with_recover_action(mut self, action: SurfaceErrorAction) -> Self {
        self.recover_action = action;
        self
    }

    /// Shared handle to the call log; stays readable after the platform is moved.
    pub(crate) fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    /// Makes the next `begin_frame` fail with `err`.
    pub(crate) fn fail_next_frame(&self, err: FrameError) {
        self.frame_failures.borrow_mut().push_back(err);
    }

    fn push(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl GpuPlatform for FakePlatform {
    type Adapter = ();
    type Device = ();
    type Surface = wgpu::TextureFormat;
    type Pipeline = PipelineDesc;
    type Buffer = Vec<u8>;
    type Frame = FakeFrame;

    async fn request_adapter(&self) -> Option<()> {
        self.push(Call::RequestAdapter);
        self.adapter_available.then_some(())
    }

    async fn request_device(&self, _adapter: &()) -> Result<(), String> {
        self.push(Call::RequestDevice);
        match &self.device_error {
            Some(reason) => Err(reason.clone()),
            None => Ok(()),
        }
    }

    fn configure_surface(
        &self,
        _adapter: &(),
        _device: &(),
        alpha_mode: AlphaMode,
    ) -> Result<wgpu::TextureFormat, InitError> {
        self.push(Call::ConfigureSurface(alpha_mode));
        match &self.surface_error {
            Some(reason) => Err(InitError::SurfaceUnavailable(reason.clone())),
            None => Ok(self.format),
        }
    }

    fn surface_format(&self, surface: &wgpu::TextureFormat) -> wgpu::TextureFormat {
        *surface
    }

    fn resize_surface(
        &self,
        _device: &(),
        _surface: &mut wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        self.push(Call::Resize(width, height));
    }

    fn recover_surface(
        &self,
        _device: &(),
        _surface: &wgpu::TextureFormat,
        _err: &wgpu::SurfaceError,
    ) -> SurfaceErrorAction {
        self.push(Call::RecoverSurface);
        self.recover_action
    }

    fn create_pipeline(&self, _device: &(), desc: &PipelineDesc) -> PipelineDesc {
        self.push(Call::CreatePipeline);
        desc.clone()
    }

    fn create_vertex_buffer(&self, _device: &(), _label: &str, contents: &[u8]) -> Vec<u8> {
        self.push(Call::CreateVertexBuffer(contents.to_vec()));
        contents.to_vec()
    }

    fn begin_frame(
        &self,
        _device: &(),
        _surface: &wgpu::TextureFormat,
    ) -> Result<FakeFrame, FrameError> {
        self.push(Call::BeginFrame);
        match self.frame_failures.borrow_mut().pop_front() {
            Some(err) => Err(err),
            None => Ok(FakeFrame { recorded: false }),
        }
    }

    fn record_frame(
        &self,
        frame: &mut FakeFrame,
        _pipeline: &PipelineDesc,
        vertex_buffer: Option<&Vec<u8>>,
        plan: &FramePlan,
    ) {
        frame.recorded = true;
        self.push(Call::Record {
            draw: plan.draw,
            clear_color: plan.clear_color,
            vertex_buffer_bound: vertex_buffer.is_some(),
        });
    }

    fn submit_frame(&self, _device: &(), frame: FakeFrame) {
        assert!(frame.recorded, "submitted a frame that was never recorded");
        self.push(Call::Submit);
    }
}
