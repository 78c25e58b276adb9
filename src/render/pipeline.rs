//! WebGPU surface setup and frame presentation.
//!
//! Owns the wgpu device and surface for the main window. Every frame is a
//! single egui pass drawn by the HUD overlay.

use std::sync::Arc;

use anyhow::Result;
use winit::{dpi::PhysicalSize, event::WindowEvent, window::Window};

use super::hud::HudOverlay;
use crate::config::ChartParameters;
use crate::simulator::Simulator;

/// Main render state managing all GPU resources
pub struct RenderState {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
    pub hud: HudOverlay,
}

impl RenderState {
    /// Create the GPU surface and HUD for `window`
    pub async fn new(window: Arc<Window>, chart: ChartParameters) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // The Arc<Window> is stored in RenderState, so the window outlives the surface
        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("Failed to find suitable GPU adapter"))?;

        log::info!("Using adapter: {:?}", adapter.get_info());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Simulator Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no supported formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hud = HudOverlay::new(&window, &device, surface_format, chart);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            size,
            hud,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Forward a window event to egui; returns true if egui consumed it
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        let response = self.hud.handle_event(&self.window, event);
        if response.repaint {
            self.window.request_redraw();
        }
        response.consumed
    }

    /// Resize the render surface
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Run the UI against `sim` and present a frame
    pub fn render(&mut self, sim: &mut Simulator) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let (paint_jobs, textures_delta) = self.hud.render(&self.window, sim);
        let screen_descriptor = self.hud.screen_descriptor(&self.window);
        let callback_buffers = self.hud.paint(
            &self.device,
            &self.queue,
            &mut encoder,
            &view,
            screen_descriptor,
            paint_jobs,
            textures_delta,
        );

        self.queue
            .submit(callback_buffers.into_iter().chain(std::iter::once(encoder.finish())));
        output.present();

        Ok(())
    }
}
