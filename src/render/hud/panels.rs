//! HUD panel definitions and rendering.

use egui::{Align2, CentralPanel, Context, RichText, SidePanel, Slider, TextEdit, Window};

use super::state::HudState;
use super::theme::{HudColors, HudTheme, HudTypography};
use super::widgets::{key_value, section_header, GlucoseChart, StatusCube};
use crate::config::ChartParameters;
use crate::model::ACTIVITY_MAX_MINUTES;
use crate::simulator::{ControlAction, Simulator};

/// Render all panels, returning the action the user triggered this frame
pub fn render_panels(
    ctx: &Context,
    state: &HudState,
    sim: &mut Simulator,
    chart: &ChartParameters,
) -> Option<ControlAction> {
    let action = render_control_panel(ctx, sim);
    render_visualization_panel(ctx, state, sim, chart);

    if state.show_help {
        render_help_overlay(ctx);
    }

    action
}

/// Input fields and action buttons (left)
fn render_control_panel(ctx: &Context, sim: &mut Simulator) -> Option<ControlAction> {
    let mut action = None;

    SidePanel::left("controls")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            section_header(ui, "PARAMETERS");

            numeric_field(ui, "Insulin dose (U):", &mut sim.form.insulin);
            numeric_field(ui, "Carbohydrates (g):", &mut sim.form.carbs);
            numeric_field(ui, "Glycemic load (GL):", &mut sim.form.glycemic_load);

            ui.label(field_label("Physical activity (min):"));
            let mut minutes = sim.form.activity_minutes;
            ui.add(Slider::new(&mut minutes, 0..=ACTIVITY_MAX_MINUTES).integer());
            sim.form.set_activity_minutes(minutes);

            ui.add_space(12.0);
            ui.vertical_centered_justified(|ui| {
                if ui.button("Apply changes").clicked() {
                    action = Some(ControlAction::Apply);
                }
                if ui.button("Reset").clicked() {
                    action = Some(ControlAction::Reset);
                }
            });

            ui.add_space(12.0);
            section_header(ui, "SESSION");
            key_value(ui, "Time", &format!("{} h", sim.state.time));
            key_value(ui, "Steps", &format!("{}", sim.state.len() - 1));
        });

    action
}

fn field_label(text: &str) -> RichText {
    RichText::new(text)
        .size(HudTypography::LABEL_SIZE)
        .color(HudColors::TEXT_SECONDARY)
}

fn numeric_field(ui: &mut egui::Ui, label: &str, text: &mut String) {
    ui.label(field_label(label));
    ui.add(TextEdit::singleline(text).desired_width(f32::INFINITY));
}

/// Status cube, readout and chart (right)
fn render_visualization_panel(
    ctx: &Context,
    state: &HudState,
    sim: &Simulator,
    chart: &ChartParameters,
) {
    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.add(StatusCube::new(sim.status()).size(96.0));
            ui.add_space(12.0);
            ui.vertical(|ui| {
                ui.add_space(28.0);
                let readout = sim.readout();
                ui.label(
                    RichText::new(readout.text())
                        .size(HudTypography::READOUT_SIZE)
                        .color(HudTheme::readout_color(readout, sim.status())),
                );
            });
        });

        ui.add_space(8.0);
        ui.add(GlucoseChart::new(sim.view(), chart).show_legend(state.show_legend));
    });
}

/// Help overlay (center)
fn render_help_overlay(ctx: &Context) {
    Window::new("HELP")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(300.0);

            section_header(ui, "MODEL");
            ui.label(
                RichText::new("delta = carbs/10 * GL/20 - insulin * 0.5 + activity/60")
                    .size(HudTypography::LABEL_SIZE)
                    .family(egui::FontFamily::Monospace),
            );
            key_value(ui, "Target", "5.5 mmol/L");
            key_value(ui, "Normal range", "4.0 - 7.0 mmol/L");
            key_value(ui, "Time step", "1 h per Apply");

            section_header(ui, "KEYS");
            key_value(ui, "H", "Toggle help");
            key_value(ui, "L", "Toggle legend");
            key_value(ui, "Escape", "Quit");

            ui.add_space(8.0);
            ui.label(
                RichText::new("Press H to close")
                    .size(HudTypography::SMALL_SIZE)
                    .color(HudColors::TEXT_SECONDARY),
            );
        });
}
