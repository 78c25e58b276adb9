//! Glucose Simulator - Entry point
//!
//! CLI Usage:
//!   cargo run                          # Open the simulator window
//!   cargo run -- --diagnose            # Run the model headless (no GUI)
//!   cargo run -- --diagnose -n 8 --insulin 4 --carbs 45  # Custom inputs

use std::sync::Arc;

use anyhow::Result;
use glucose_simulator::{
    cli::{self, CliOptions},
    config::Parameters,
    render::RenderState,
    simulator::Simulator,
};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

fn main() -> Result<()> {
    env_logger::init();

    let options = CliOptions::from_env();
    if options.help {
        cli::print_usage();
        return Ok(());
    }
    if options.diagnose {
        let stdout = std::io::stdout();
        cli::run_diagnostics(options.steps, options.form, &mut stdout.lock())?;
        return Ok(());
    }

    log::info!("Glucose Simulator starting...");

    let params = Parameters::load_or_default();
    let mut sim = Simulator::new();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(params.window.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(params.window.width, params.window.height))
            .with_min_inner_size(winit::dpi::LogicalSize::new(720, 480))
            .build(&event_loop)?,
    );

    let mut render_state = pollster::block_on(RenderState::new(window, params.chart))?;

    log::info!("Controls:");
    log::info!("  H: Toggle help");
    log::info!("  L: Toggle chart legend");
    log::info!("  Escape: Exit");

    event_loop.run(move |event, elwt| {
        if let Event::WindowEvent { event, .. } = event {
            let consumed = render_state.handle_event(&event);

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(key_code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } if !consumed && !render_state.hud.wants_keyboard_input() => match key_code {
                    KeyCode::Escape => elwt.exit(),
                    KeyCode::KeyH => {
                        render_state.hud.toggle_help();
                        render_state.window().request_redraw();
                    }
                    KeyCode::KeyL => {
                        render_state.hud.toggle_legend();
                        render_state.window().request_redraw();
                    }
                    _ => {}
                },
                WindowEvent::Resized(new_size) => {
                    render_state.resize(new_size);
                    render_state.window().request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    match render_state.render(&mut sim) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => render_state.resize(render_state.size),
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::error!("Render error: {:?}", e),
                    }

                    if let Some(action) = render_state.hud.take_action() {
                        sim.dispatch(action);
                        render_state.window().request_redraw();
                    } else if render_state.hud.needs_repaint() {
                        render_state.window().request_redraw();
                    }
                }
                _ => {}
            }
        }
    })?;

    Ok(())
}
