use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{self, PresentStatus};
use super::ContextConfig;

/// Device, queue and configured surface for one window.
///
/// The surface borrows the window for `'w`; the window must outlive the
/// context, and the context must be dropped before the window is.
pub struct GraphicsContext<'w> {
    /// Presentation surface bound to the window.
    surface: wgpu::Surface<'w>,

    /// Logical GPU device.
    device: wgpu::Device,

    /// Command submission queue.
    queue: wgpu::Queue,

    /// Current surface configuration (format, size, present mode).
    config: wgpu::SurfaceConfiguration,

    /// Last size reported by the window. May be zero while minimized.
    size: PhysicalSize<u32>,

    /// Colour the frame is cleared to before presenting.
    clear_color: wgpu::Color,
}

impl<'w> GraphicsContext<'w> {
    /// Creates a context bound to `window`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new(window: &'w Window, config: ContextConfig) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(surface::is_drawable(size), "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let info = adapter.get_info();
        log::info!("graphics adapter: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("pain-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: config.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        install_diagnostics(&device, config.fatal_diagnostics);

        let caps = surface.get_capabilities(&adapter);
        let format = surface::choose_surface_format(&caps.formats, config.prefer_srgb)
            .context("no supported surface formats")?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: config.present_mode,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: config.desired_maximum_frame_latency,
        };
        surface.configure(&device, &surface_config);

        log::debug!("surface configured: {format:?} {}x{}", size.width, size.height);

        Ok(Self {
            surface,
            device,
            queue,
            config: surface_config,
            size,
            clear_color: config.clear_color,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Reconfigures the surface for a new window size.
    ///
    /// A zero-area size is remembered but not applied until the window has
    /// area again.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if !surface::is_drawable(new_size) {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Clears the next surface texture and presents it.
    pub fn present(&mut self) -> PresentStatus {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(err) => {
                let status = surface::status_for_error(&err, self.size);
                if status == PresentStatus::Reconfigured {
                    self.surface.configure(&self.device, &self.config);
                }
                log::debug!("surface error: {err} -> {status:?}");
                return status;
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("pain frame encoder"),
            });

        // The pass only clears; it is dropped before the encoder is finished.
        {
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("pain clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        PresentStatus::Presented
    }
}

/// Routes device errors that no error scope captured into the log.
///
/// Validation and internal errors mean an engine invariant was broken; with
/// `fatal` set they abort instead of being logged and ignored.
fn install_diagnostics(device: &wgpu::Device, fatal: bool) {
    device.on_uncaptured_error(Arc::new(move |err: wgpu::Error| match err {
        wgpu::Error::OutOfMemory { .. } => {
            log::error!("graphics device out of memory: {err}");
        }
        other => {
            log::error!("graphics diagnostic: {other}");
            if fatal {
                panic!("graphics assertion violated: {other}");
            }
        }
    }));
}
