//! HUD theme system - dark "clinic monitor" theme.
//!
//! Dark panels, cool text, and status accents shared by the cube, the readout
//! and the chart.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::state::{GlucoseStatus, Readout};

/// HUD color palette
pub struct HudColors;

impl HudColors {
    // === Background Colors ===
    /// Near-black with blue tint - main background
    pub const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 15);
    /// Dark slate panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(20, 22, 30);
    /// Slightly lighter for hover states and text fields
    pub const PANEL_BG_HOVER: Color32 = Color32::from_rgb(30, 33, 42);
    /// Plot area background
    pub const PLOT_BG: Color32 = Color32::from_rgb(14, 16, 22);

    // === Text Colors ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 235, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 180);
    pub const TEXT_LABEL: Color32 = Color32::from_rgb(110, 120, 128);

    // === Status Colors ===
    /// Scientific blue - accent and glucose series
    pub const ACCENT: Color32 = Color32::from_rgb(100, 180, 255);
    /// Green - in range, "solved" cube
    pub const SUCCESS: Color32 = Color32::from_rgb(0, 200, 90);
    /// Amber - input errors
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 50);
    /// Red - out of range, "broken" cube
    pub const CRITICAL: Color32 = Color32::from_rgb(235, 50, 50);

    // === Chart Colors ===
    /// Target level dashed line
    pub const TARGET_LINE: Color32 = Color32::from_rgb(60, 170, 60);
    /// Normal range band (light green, 30% opacity, premultiplied)
    pub const RANGE_BAND: Color32 = Color32::from_rgba_premultiplied(43, 71, 43, 77);
    /// Grid lines
    pub const GRID: Color32 = Color32::from_rgb(35, 40, 50);

    // === UI Element Colors ===
    pub const BORDER: Color32 = Color32::from_rgb(50, 55, 65);
}

/// Font sizes
pub struct HudTypography;

impl HudTypography {
    pub const TITLE_SIZE: f32 = 14.0;
    pub const VALUE_SIZE: f32 = 16.0;
    pub const LABEL_SIZE: f32 = 12.0;
    pub const SMALL_SIZE: f32 = 10.0;
    /// Glucose readout under the cube
    pub const READOUT_SIZE: f32 = 20.0;
}

/// HUD theme configuration
pub struct HudTheme {
    /// Panel corner rounding
    pub panel_rounding: f32,
    /// Button and text field rounding
    pub button_rounding: f32,
    /// Panel padding
    pub panel_padding: f32,
    /// Spacing between elements
    pub item_spacing: f32,
}

impl Default for HudTheme {
    fn default() -> Self {
        Self {
            panel_rounding: 6.0,
            button_rounding: 4.0,
            panel_padding: 12.0,
            item_spacing: 6.0,
        }
    }
}

impl HudTheme {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = HudColors::PANEL_BG;
        visuals.window_fill = HudColors::PANEL_BG;
        visuals.extreme_bg_color = HudColors::PANEL_BG_HOVER;
        visuals.faint_bg_color = HudColors::PANEL_BG_HOVER;
        visuals.override_text_color = Some(HudColors::TEXT_PRIMARY);

        visuals.widgets.noninteractive.bg_fill = HudColors::PANEL_BG;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, HudColors::BORDER);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.panel_rounding);

        for widget in [
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.rounding = Rounding::same(self.button_rounding);
        }
        visuals.widgets.inactive.bg_fill = HudColors::PANEL_BG_HOVER;
        visuals.widgets.inactive.weak_bg_fill = HudColors::PANEL_BG_HOVER;
        visuals.widgets.hovered.bg_fill = HudColors::BORDER;
        visuals.widgets.hovered.weak_bg_fill = HudColors::BORDER;
        visuals.widgets.active.bg_fill = HudColors::ACCENT;
        visuals.widgets.active.weak_bg_fill = HudColors::ACCENT;

        visuals.selection.bg_fill = HudColors::ACCENT.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, HudColors::ACCENT);

        visuals.window_stroke = Stroke::new(1.0, HudColors::BORDER);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.window_margin = egui::Margin::same(self.panel_padding);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(HudTypography::TITLE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(HudTypography::LABEL_SIZE + 1.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(HudTypography::LABEL_SIZE + 1.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(HudTypography::SMALL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }

    /// Cube color for a status
    pub fn status_color(status: GlucoseStatus) -> Color32 {
        match status {
            GlucoseStatus::InRange => HudColors::SUCCESS,
            GlucoseStatus::OutOfRange => HudColors::CRITICAL,
        }
    }

    /// Readout color: status color for a level, amber for an input error
    pub fn readout_color(readout: Readout, status: GlucoseStatus) -> Color32 {
        match readout {
            Readout::Level(_) => Self::status_color(status),
            Readout::InputError => HudColors::WARNING,
        }
    }
}
