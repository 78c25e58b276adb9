//! Rendering module using wgpu and egui.
//!
//! Provides the window surface and the egui HUD that draws the controls,
//! status cube and glucose chart.

pub mod hud;
mod pipeline;

pub use hud::{GlucoseChart, HudColors, HudOverlay, HudState, HudTheme, StatusCube};
pub use pipeline::RenderState;
