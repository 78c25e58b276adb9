//! Custom HUD widgets: the status cube and the glucose chart.

use egui::{Align2, Color32, FontFamily, FontId, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2, Widget};

use super::theme::{HudColors, HudTheme, HudTypography};
use crate::config::ChartParameters;
use crate::model::{GLUCOSE_RANGE_MAX, GLUCOSE_RANGE_MIN, TARGET_GLUCOSE};
use crate::state::{GlucoseStatus, TimeSeriesView};

/// 3x3 cube face: all green when solved, all red when broken
pub struct StatusCube {
    status: GlucoseStatus,
    size: f32,
}

impl StatusCube {
    pub fn new(status: GlucoseStatus) -> Self {
        Self { status, size: 120.0 }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Widget for StatusCube {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let color = HudTheme::status_color(self.status);
            let cell = self.size / 3.0;
            let gap = (cell * 0.06).max(1.0);

            painter.rect_filled(rect, 4.0, HudColors::BACKGROUND);
            for i in 0..3 {
                for j in 0..3 {
                    let min = rect.min + Vec2::new(i as f32 * cell, j as f32 * cell);
                    let sticker = Rect::from_min_size(min, Vec2::splat(cell)).shrink(gap);
                    painter.rect_filled(sticker, 3.0, color);
                }
            }
        }

        response.on_hover_text(if self.status.is_solved() {
            "Solved: glucose within 4.0-7.0 mmol/L"
        } else {
            "Broken: glucose outside 4.0-7.0 mmol/L"
        })
    }
}

/// Line chart of the glucose history with target line and normal band
pub struct GlucoseChart<'a> {
    view: &'a TimeSeriesView,
    params: &'a ChartParameters,
    show_legend: bool,
    min_height: f32,
}

impl<'a> GlucoseChart<'a> {
    pub fn new(view: &'a TimeSeriesView, params: &'a ChartParameters) -> Self {
        Self {
            view,
            params,
            show_legend: params.show_legend,
            min_height: 200.0,
        }
    }

    pub fn show_legend(mut self, show: bool) -> Self {
        self.show_legend = show;
        self
    }
}

/// Data-to-screen mapping for the plot area
struct PlotTransform {
    plot: Rect,
    t: (f64, f64),
    v: (f64, f64),
}

impl PlotTransform {
    fn x(&self, t: f64) -> f32 {
        let frac = (t - self.t.0) / (self.t.1 - self.t.0);
        self.plot.left() + self.plot.width() * frac as f32
    }

    fn y(&self, v: f64) -> f32 {
        let frac = (v - self.v.0) / (self.v.1 - self.v.0);
        self.plot.bottom() - self.plot.height() * frac as f32
    }

    fn pos(&self, t: f64, v: f64) -> Pos2 {
        Pos2::new(self.x(t), self.y(v))
    }
}

impl Widget for GlucoseChart<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = Vec2::new(ui.available_width(), ui.available_height().max(self.min_height));
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let painter = ui.painter_at(rect);
        let label_font = FontId::new(HudTypography::LABEL_SIZE, FontFamily::Proportional);
        let tick_font = FontId::new(HudTypography::SMALL_SIZE, FontFamily::Monospace);

        // Left margin holds tick labels, bottom margin tick labels and axis title
        let plot = Rect::from_min_max(
            Pos2::new(rect.left() + 44.0, rect.top() + 22.0),
            Pos2::new(rect.right() - 12.0, rect.bottom() - 36.0),
        );
        let tf = PlotTransform {
            plot,
            t: self.view.time_bounds(),
            v: self.view.level_bounds(),
        };

        painter.rect_filled(plot, 0.0, HudColors::PLOT_BG);

        // Grid and tick labels
        let level_step = nice_step(tf.v.1 - tf.v.0, 6);
        for v in ticks(tf.v.0, tf.v.1, level_step) {
            let y = tf.y(v);
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                Stroke::new(1.0, HudColors::GRID),
            );
            painter.text(
                Pos2::new(plot.left() - 6.0, y),
                Align2::RIGHT_CENTER,
                format_tick(v, level_step),
                tick_font.clone(),
                HudColors::TEXT_LABEL,
            );
        }
        let time_step = nice_step(tf.t.1 - tf.t.0, 10).max(1.0);
        for t in ticks(tf.t.0, tf.t.1, time_step) {
            let x = tf.x(t);
            painter.line_segment(
                [Pos2::new(x, plot.top()), Pos2::new(x, plot.bottom())],
                Stroke::new(1.0, HudColors::GRID),
            );
            painter.text(
                Pos2::new(x, plot.bottom() + 4.0),
                Align2::CENTER_TOP,
                format_tick(t, time_step),
                tick_font.clone(),
                HudColors::TEXT_LABEL,
            );
        }

        // Normal range band across the full time domain
        let band = Rect::from_min_max(
            Pos2::new(plot.left(), tf.y(GLUCOSE_RANGE_MAX)),
            Pos2::new(plot.right(), tf.y(GLUCOSE_RANGE_MIN)),
        );
        painter.rect_filled(band, 0.0, HudColors::RANGE_BAND);

        // Target level
        let target_y = tf.y(TARGET_GLUCOSE);
        painter.extend(Shape::dashed_line(
            &[Pos2::new(plot.left(), target_y), Pos2::new(plot.right(), target_y)],
            Stroke::new(1.5, HudColors::TARGET_LINE),
            8.0,
            5.0,
        ));

        let points = plotted_points(self.view, &tf);
        if points.len() > 1 {
            painter.add(Shape::line(
                points.clone(),
                Stroke::new(self.params.line_width, HudColors::ACCENT),
            ));
        }
        for p in &points {
            painter.circle_filled(*p, self.params.marker_radius, HudColors::ACCENT);
        }

        painter.rect_stroke(plot, 0.0, Stroke::new(1.0, HudColors::BORDER));

        // Axis titles
        painter.text(
            Pos2::new(plot.center().x, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            "Time (hours)",
            label_font.clone(),
            HudColors::TEXT_SECONDARY,
        );
        painter.text(
            Pos2::new(plot.left(), rect.top() + 2.0),
            Align2::LEFT_TOP,
            "Glucose level (mmol/L)",
            label_font.clone(),
            HudColors::TEXT_SECONDARY,
        );

        if self.show_legend {
            paint_legend(&painter, plot, &label_font);
        }

        response
    }
}

/// Screen positions of the history; non-finite levels cannot be placed and
/// are skipped, levels beyond the axis are pinned to its edge
fn plotted_points(view: &TimeSeriesView, tf: &PlotTransform) -> Vec<Pos2> {
    view.points()
        .iter()
        .filter(|p| p[1].is_finite())
        .map(|p| tf.pos(p[0], p[1].clamp(tf.v.0, tf.v.1)))
        .collect()
}

fn paint_legend(painter: &egui::Painter, plot: Rect, font: &FontId) {
    let entries: [(&str, Color32); 3] = [
        ("Glucose level", HudColors::ACCENT),
        ("Target level", HudColors::TARGET_LINE),
        ("Normal range", HudColors::RANGE_BAND),
    ];
    let row = 18.0;
    let width = 130.0;
    let origin = Pos2::new(plot.right() - width - 8.0, plot.top() + 8.0);
    let frame = Rect::from_min_size(origin, Vec2::new(width, row * entries.len() as f32 + 8.0));

    painter.rect_filled(frame, 4.0, HudColors::PANEL_BG.gamma_multiply(0.9));
    painter.rect_stroke(frame, 4.0, Stroke::new(1.0, HudColors::BORDER));

    for (i, (label, color)) in entries.iter().enumerate() {
        let y = frame.top() + 4.0 + row * (i as f32 + 0.5);
        let swatch = Rect::from_center_size(Pos2::new(frame.left() + 16.0, y), Vec2::new(18.0, 8.0));
        match i {
            0 => {
                painter.line_segment([swatch.left_center(), swatch.right_center()], Stroke::new(2.0, *color));
                painter.circle_filled(swatch.center(), 3.0, *color);
            }
            1 => {
                painter.extend(Shape::dashed_line(
                    &[swatch.left_center(), swatch.right_center()],
                    Stroke::new(1.5, *color),
                    4.0,
                    3.0,
                ));
            }
            _ => {
                painter.rect_filled(swatch, 0.0, *color);
            }
        }
        painter.text(
            Pos2::new(frame.left() + 32.0, y),
            Align2::LEFT_CENTER,
            *label,
            font.clone(),
            HudColors::TEXT_PRIMARY,
        );
    }
}

/// Round tick spacing (1, 2 or 5 times a power of ten) giving at most about
/// `target_ticks` intervals over `span`
pub(crate) fn nice_step(span: f64, target_ticks: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || target_ticks == 0 {
        return 1.0;
    }
    let raw = span / target_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper limit on grid lines per axis
const MAX_TICKS: f64 = 1000.0;

/// Multiples of `step` within `[lo, hi]`; empty when there would be more
/// than [`MAX_TICKS`] of them
pub(crate) fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite() && step > 0.0) || hi < lo {
        return Vec::new();
    }
    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let count = last - first;
    if !(0.0..=MAX_TICKS).contains(&count) {
        return Vec::new();
    }
    (0..=count as usize).map(|k| (first + k as f64) * step).collect()
}

fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Section header with subtle line
pub fn section_header(ui: &mut Ui, text: &str) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_LABEL)
                .strong(),
        );
        ui.add_space(4.0);
        let rect = ui.available_rect_before_wrap();
        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.center().y),
                Pos2::new(rect.right(), rect.center().y),
            ],
            Stroke::new(1.0, HudColors::BORDER),
        );
    });
    ui.add_space(2.0);
}

/// Key-value pair in compact format
pub fn key_value(ui: &mut Ui, key: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_LABEL),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(HudTypography::LABEL_SIZE)
                    .family(FontFamily::Monospace)
                    .color(HudColors::TEXT_PRIMARY),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(4.0, 6), 1.0);
        assert_eq!(nice_step(100.0, 10), 10.0);
        assert!((nice_step(1.0, 10) - 0.1).abs() < 1e-12);
        assert_eq!(nice_step(0.0, 5), 1.0);
        assert_eq!(nice_step(f64::INFINITY, 5), 1.0);
    }

    #[test]
    fn test_ticks_within_bounds() {
        assert_eq!(ticks(3.5, 8.0, 1.0), vec![4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(ticks(0.0, 1.0, 1.0), vec![0.0, 1.0]);
        assert!(ticks(5.0, 1.0, 1.0).is_empty());
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
        assert!(ticks(0.2, 0.8, 1.0).is_empty());
    }

    #[test]
    fn test_ticks_capped() {
        assert!(ticks(-f64::MAX, f64::MAX, 1.0).is_empty());
        assert!(ticks(0.0, 1.0e6, 1.0).is_empty());
        assert!(ticks(0.0, 1.0, f64::MIN_POSITIVE).is_empty());
        assert_eq!(ticks(0.0, 1000.0, 1.0).len(), 1001);
    }

    /// History swinging between the largest finite levels
    fn extreme_view() -> TimeSeriesView {
        let mut state = crate::state::SimulationState::new();
        for insulin in [-1.7e308, -1.7e308, 1.7e308, 1.7e308, 1.7e308, 1.7e308] {
            state.apply(crate::model::compute_delta(0.0, 0.0, insulin, 0));
        }
        assert!(state.glucose_history().iter().all(|level| level.is_finite()));
        TimeSeriesView::from_state(&state)
    }

    #[test]
    fn test_extreme_levels_give_bounded_grid() {
        let view = extreme_view();
        let (lo, hi) = view.level_bounds();
        assert!((hi - lo).is_finite());

        let step = nice_step(hi - lo, 6);
        let grid = ticks(lo, hi, step);
        assert!(!grid.is_empty());
        assert!(grid.len() <= 12);
        assert!(grid.iter().all(|v| *v >= lo && *v <= hi));

        let (t0, t1) = view.time_bounds();
        let time_step = nice_step(t1 - t0, 10).max(1.0);
        assert_eq!(ticks(t0, t1, time_step).len(), 7);
    }

    #[test]
    fn test_extreme_levels_map_inside_plot() {
        let view = extreme_view();
        let plot = Rect::from_min_size(Pos2::new(44.0, 22.0), Vec2::new(600.0, 400.0));
        let tf = PlotTransform {
            plot,
            t: view.time_bounds(),
            v: view.level_bounds(),
        };

        let points = plotted_points(&view, &tf);
        assert_eq!(points.len(), 7);
        for p in &points {
            assert!(p.x.is_finite() && p.y.is_finite());
            assert!(p.y >= plot.top() - 0.5 && p.y <= plot.bottom() + 0.5);
        }
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(4.0, 1.0), "4");
        assert_eq!(format_tick(4.5, 0.5), "4.5");
    }
}
