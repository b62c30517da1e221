use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use winit::dpi::PhysicalSize;
use winit::window::Window;

use crate::error::{FrameError, InitError};
use crate::pipeline::PipelineDesc;
use crate::render::FramePlan;

use super::surface;
use super::{AlphaMode, GpuInit, GpuPlatform, SurfaceErrorAction};

/// wgpu-backed GPU platform bound to a window.
///
/// Owns the instance and the window surface. Adapter, device and the surface configuration
/// are produced by the [`GpuPlatform`] methods and owned by the renderer.
pub struct Gpu<'w> {
    /// wgpu instance used to create the adapter and surface.
    instance: wgpu::Instance,

    /// Surface bound to the window.
    ///
    /// Surface lifetime is tied to the window; the window must outlive the `Gpu` instance.
    surface: wgpu::Surface<'w>,

    init: GpuInit,

    /// Drawable size at creation, in physical pixels.
    initial_size: PhysicalSize<u32>,
}

/// Logical device and its queue.
pub struct GpuDevice {
    device: wgpu::Device,
    queue: wgpu::Queue,

    /// Set by the device-lost callback.
    lost: Arc<AtomicBool>,
}

impl GpuDevice {
    pub fn is_lost(&self) -> bool {
        self.lost.load(Ordering::Acquire)
    }
}

/// Active surface configuration.
pub struct GpuSurface {
    config: wgpu::SurfaceConfiguration,

    /// Last requested drawable size; may be zero while the window is minimized.
    size: PhysicalSize<u32>,
}

/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture prevents acquisition of subsequent frames.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl<'w> Gpu<'w> {
    /// Creates the instance and the surface for `window`.
    pub fn new(window: &'w Window, init: GpuInit) -> Result<Self, InitError> {
        let initial_size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: init.backends,
            ..Default::default()
        });

        let surface = instance.create_surface(window).map_err(|err| {
            let err = InitError::SurfaceUnavailable(err.to_string());
            log::error!("{err}");
            err
        })?;

        log::info!("start initializing GPU...");

        Ok(Self {
            instance,
            surface,
            init,
            initial_size,
        })
    }
}

impl<'w> GpuPlatform for Gpu<'w> {
    type Adapter = wgpu::Adapter;
    type Device = GpuDevice;
    type Surface = GpuSurface;
    type Pipeline = wgpu::RenderPipeline;
    type Buffer = wgpu::Buffer;
    type Frame = GpuFrame;

    async fn request_adapter(&self) -> Option<wgpu::Adapter> {
        let result = self
            .instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: self.init.power_preference,
                compatible_surface: Some(&self.surface),
                force_fallback_adapter: false,
            })
            .await;

        match result {
            Ok(adapter) => {
                let info = adapter.get_info();
                log::info!("adapter: {} ({:?})", info.name, info.backend);
                Some(adapter)
            }
            Err(err) => {
                log::debug!("adapter request failed: {err}");
                None
            }
        }
    }

    async fn request_device(&self, adapter: &wgpu::Adapter) -> Result<GpuDevice, String> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("trigon device"),
                required_features: self.init.required_features,
                required_limits: self.init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|err| err.to_string())?;

        let lost = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&lost);
        device.set_device_lost_callback(move |reason, message| {
            log::error!("GPU device lost ({reason:?}): {message}");
            flag.store(true, Ordering::Release);
        });

        Ok(GpuDevice {
            device,
            queue,
            lost,
        })
    }

    fn configure_surface(
        &self,
        adapter: &wgpu::Adapter,
        device: &GpuDevice,
        alpha_mode: AlphaMode,
    ) -> Result<GpuSurface, InitError> {
        let caps = self.surface.get_capabilities(adapter);
        let format = surface::choose_surface_format(&caps.formats, self.init.prefer_srgb)
            .ok_or_else(|| {
                InitError::SurfaceUnavailable(
                    "surface reports no formats for the selected adapter".to_string(),
                )
            })?;
        let alpha_mode = surface::choose_alpha_mode(&caps.alpha_modes, alpha_mode);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: self.initial_size.width.max(1),
            height: self.initial_size.height.max(1),
            present_mode: self.init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: self.init.desired_maximum_frame_latency,
        };

        self.surface.configure(&device.device, &config);
        log::info!(
            "surface configured: {format:?}, alpha {alpha_mode:?}, {}x{}",
            config.width,
            config.height
        );

        Ok(GpuSurface {
            config,
            size: self.initial_size,
        })
    }

    fn surface_format(&self, surface: &GpuSurface) -> wgpu::TextureFormat {
        surface.config.format
    }

    fn resize_surface(
        &self,
        device: &GpuDevice,
        surface: &mut GpuSurface,
        width: u32,
        height: u32,
    ) {
        surface.size = PhysicalSize::new(width, height);

        // Keep the old configuration until a real size arrives.
        if !surface::is_drawable(surface.size) {
            return;
        }

        surface.config.width = width;
        surface.config.height = height;
        self.surface.configure(&device.device, &surface.config);
    }

    fn recover_surface(
        &self,
        device: &GpuDevice,
        surface: &GpuSurface,
        err: &wgpu::SurfaceError,
    ) -> SurfaceErrorAction {
        let action = surface::classify_surface_error(err);
        if action == SurfaceErrorAction::Reconfigured && surface::is_drawable(surface.size) {
            self.surface.configure(&device.device, &surface.config);
        }
        action
    }

    fn create_pipeline(&self, device: &GpuDevice, desc: &PipelineDesc) -> wgpu::RenderPipeline {
        let vertex_module = device.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.vertex.label),
            source: wgpu::ShaderSource::Wgsl(desc.vertex.source.into()),
        });
        let fragment_module = device.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(desc.fragment.label),
            source: wgpu::ShaderSource::Wgsl(desc.fragment.source.into()),
        });

        let targets: Vec<Option<wgpu::ColorTargetState>> =
            desc.color_targets.iter().cloned().map(Some).collect();

        device.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            // Derived from the shaders; there are no resource bindings.
            layout: None,

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(desc.vertex.entry_point),
                compilation_options: Default::default(),
                buffers: &desc.vertex_buffers,
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(desc.fragment.entry_point),
                compilation_options: Default::default(),
                targets: &targets,
            }),

            primitive: desc.primitive,
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        })
    }

    fn create_vertex_buffer(
        &self,
        device: &GpuDevice,
        label: &str,
        contents: &[u8],
    ) -> wgpu::Buffer {
        let buffer = device.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: contents.len() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        device.queue.write_buffer(&buffer, 0, contents);
        buffer
    }

    fn begin_frame(
        &self,
        device: &GpuDevice,
        _surface: &GpuSurface,
    ) -> Result<GpuFrame, FrameError> {
        if device.is_lost() {
            return Err(FrameError::CommandEncodingFailed("device lost".to_string()));
        }

        let surface_texture = self
            .surface
            .get_current_texture()
            .map_err(FrameError::Surface)?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = device
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("trigon frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    fn record_frame(
        &self,
        frame: &mut GpuFrame,
        pipeline: &wgpu::RenderPipeline,
        vertex_buffer: Option<&wgpu::Buffer>,
        plan: &FramePlan,
    ) {
        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(plan.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        if let Some(buffer) = vertex_buffer {
            rpass.set_vertex_buffer(FramePlan::VERTEX_BUFFER_SLOT, buffer.slice(..));
        }
        rpass.draw(plan.draw.vertices(), plan.draw.instances());
    }

    fn submit_frame(&self, device: &GpuDevice, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;

        device.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }
}
