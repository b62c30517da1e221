use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuInit};
use crate::pipeline::TriangleVariant;
use crate::render::{FrameOutcome, TriangleRenderer};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, starts the renderer once the event loop resumes, and draws a frame
    /// on every redraw until the window is closed.
    ///
    /// Returns the startup error if the window or renderer could not be created.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit, variant: TriangleVariant) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, variant);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.startup_error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[not_covariant]
    renderer: TriangleRenderer<Gpu<'this>>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    variant: TriangleVariant,

    entry: Option<WindowEntry>,
    startup_error: Option<anyhow::Error>,
    exit_requested: bool,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, variant: TriangleVariant) -> Self {
        Self {
            config,
            gpu_init,
            variant,
            entry: None,
            startup_error: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .inspect_err(|err| log::error!("failed to create window: {err}"))
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let variant = &self.variant;

        let entry = WindowEntryTryBuilder {
            window,
            renderer_builder: |w| {
                Gpu::new(w, gpu_init)
                    .and_then(|gpu| pollster::block_on(TriangleRenderer::start(gpu, variant)))
            },
        }
        .try_build()
        .context("GPU initialization failed")?;

        Ok(entry)
    }

    fn resize(&mut self, new_size: Option<PhysicalSize<u32>>) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let size = new_size.unwrap_or_else(|| entry.with_window(|w| w.inner_size()));
        entry.with_renderer_mut(|r| r.resize(size.width, size.height));
        entry.with_window(|w| w.request_redraw());
    }

    fn redraw(&mut self) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let outcome = entry.with_mut(|fields| {
            fields.window.pre_present_notify();
            fields.renderer.render_frame()
        });

        if outcome == FrameOutcome::Fatal {
            self.exit_requested = true;
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.entry = Some(entry);
            }
            Err(e) => {
                // Already logged where it occurred.
                self.startup_error = Some(e);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: one frame per loop iteration.
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.exit_requested = true;
            }
            WindowEvent::Resized(new_size) => self.resize(Some(new_size)),
            WindowEvent::ScaleFactorChanged { .. } => self.resize(None),
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
