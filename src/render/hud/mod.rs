//! HUD overlay system using egui.
//!
//! The whole window is drawn with egui: the control panel on the left, the
//! status cube, readout and chart on the right. Button clicks are collected
//! as a pending [`ControlAction`] for the event loop to dispatch.

mod panels;
mod state;
mod theme;
mod widgets;

pub use state::HudState;
pub use theme::{HudColors, HudTheme};
pub use widgets::{GlucoseChart, StatusCube};

use egui::{Context, ViewportId};
use egui_wgpu::ScreenDescriptor;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::config::ChartParameters;
use crate::simulator::{ControlAction, Simulator};

/// HUD overlay manager integrating egui with wgpu
pub struct HudOverlay {
    /// Overlay visibility state
    pub state: HudState,
    /// Theme configuration
    pub theme: HudTheme,
    chart: ChartParameters,
    ctx: Context,
    egui_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pending_action: Option<ControlAction>,
    repaint_requested: bool,
}

impl HudOverlay {
    pub fn new(
        window: &Window,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        chart: ChartParameters,
    ) -> Self {
        let ctx = Context::default();
        let theme = HudTheme::default();
        theme.apply(&ctx);

        let viewport_id = ctx.viewport_id();
        let egui_state = egui_winit::State::new(
            ctx.clone(),
            viewport_id,
            window,
            Some(window.scale_factor() as f32),
            None,
        );

        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);

        Self {
            state: HudState::new(chart.show_legend),
            theme,
            chart,
            ctx,
            egui_state,
            renderer,
            pending_action: None,
            repaint_requested: true,
        }
    }

    /// Handle window events, returns the egui response (consumed / repaint)
    pub fn handle_event(&mut self, window: &Window, event: &WindowEvent) -> egui_winit::EventResponse {
        let response = self.egui_state.on_window_event(window, event);
        if response.repaint {
            self.repaint_requested = true;
        }
        response
    }

    /// Take the action the user triggered during the last frame, if any
    pub fn take_action(&mut self) -> Option<ControlAction> {
        self.pending_action.take()
    }

    /// Whether egui wants another frame right away (animations, tooltips)
    pub fn needs_repaint(&self) -> bool {
        self.repaint_requested
    }

    /// Run the UI for one frame
    ///
    /// Returns paint jobs and texture delta for the renderer
    pub fn render(
        &mut self,
        window: &Window,
        sim: &mut Simulator,
    ) -> (Vec<egui::ClippedPrimitive>, egui::TexturesDelta) {
        let raw_input = self.egui_state.take_egui_input(window);

        let state = &self.state;
        let chart = &self.chart;
        let mut action = None;
        let output = self.ctx.run(raw_input, |ctx| {
            if let Some(a) = panels::render_panels(ctx, state, sim, chart) {
                action = Some(a);
            }
        });
        if action.is_some() {
            self.pending_action = action;
        }

        self.repaint_requested = output
            .viewport_output
            .get(&ViewportId::ROOT)
            .map_or(false, |viewport| viewport.repaint_delay.is_zero());

        self.egui_state
            .handle_platform_output(window, output.platform_output);

        let pixels_per_point = self.ctx.pixels_per_point();
        let primitives = self.ctx.tessellate(output.shapes, pixels_per_point);

        (primitives, output.textures_delta)
    }

    /// Paint the HUD into `view`, clearing it first
    pub fn paint(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        screen_descriptor: ScreenDescriptor,
        paint_jobs: Vec<egui::ClippedPrimitive>,
        textures_delta: egui::TexturesDelta,
    ) -> Vec<wgpu::CommandBuffer> {
        for (id, image_delta) in &textures_delta.set {
            self.renderer
                .update_texture(device, queue, *id, image_delta);
        }

        let callback_buffers = self.renderer.update_buffers(
            device,
            queue,
            encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.04,
                            g: 0.04,
                            b: 0.06,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.renderer.free_texture(id);
        }

        callback_buffers
    }

    /// Get screen descriptor from window size
    pub fn screen_descriptor(&self, window: &Window) -> ScreenDescriptor {
        let size = window.inner_size();
        ScreenDescriptor {
            size_in_pixels: [size.width, size.height],
            pixels_per_point: window.scale_factor() as f32,
        }
    }

    pub fn toggle_help(&mut self) {
        self.state.toggle_help();
        self.repaint_requested = true;
    }

    pub fn toggle_legend(&mut self) {
        self.state.toggle_legend();
        self.repaint_requested = true;
    }

    /// Check if HUD wants to capture keyboard input (a text field has focus)
    pub fn wants_keyboard_input(&self) -> bool {
        self.ctx.wants_keyboard_input()
    }
}
