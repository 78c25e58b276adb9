//! Chart data for the time-series view.
//!
//! The view keeps its own copy of the history and is only rebuilt when the
//! simulator asks for a redraw, so a failed Apply leaves the chart exactly as
//! it was.

use super::SimulationState;
use crate::model::{GLUCOSE_RANGE_MAX, GLUCOSE_RANGE_MIN, TARGET_GLUCOSE};

/// Largest magnitude the glucose axis reaches; keeps the axis span finite
const LEVEL_AXIS_LIMIT: f64 = f64::MAX / 4.0;

/// Snapshot of the history as plotted
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesView {
    points: Vec<[f64; 2]>,
    redraw_count: u64,
}

impl TimeSeriesView {
    /// Build a view already drawn from `state`
    pub fn from_state(state: &SimulationState) -> Self {
        let mut view = Self::default();
        view.redraw(state);
        view
    }

    /// Clear and rebuild from the full history
    pub fn redraw(&mut self, state: &SimulationState) {
        self.points.clear();
        self.points
            .extend(state.points().map(|(t, level)| [f64::from(t), level]));
        self.redraw_count += 1;
    }

    /// Plotted `[time, level]` points in chronological order
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Number of redraws since creation
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Time domain `(start, end)` in hours; at least one hour wide
    pub fn time_bounds(&self) -> (f64, f64) {
        let start = self.points.first().map_or(0.0, |p| p[0]);
        let end = self.points.last().map_or(0.0, |p| p[0]);
        if end - start < 1.0 {
            (start, start + 1.0)
        } else {
            (start, end)
        }
    }

    /// Glucose axis `(min, max)` covering the data, the target and the
    /// normal range, padded by 0.5 mmol/L on each side
    ///
    /// Levels beyond +/-`f64::MAX / 4` are cut off so `max - min` is finite.
    pub fn level_bounds(&self) -> (f64, f64) {
        let (lo, hi) = self.points.iter().fold(
            (GLUCOSE_RANGE_MIN.min(TARGET_GLUCOSE), GLUCOSE_RANGE_MAX.max(TARGET_GLUCOSE)),
            |(lo, hi), p| {
                if p[1].is_finite() {
                    (lo.min(p[1]), hi.max(p[1]))
                } else {
                    (lo, hi)
                }
            },
        );
        (
            lo.max(-LEVEL_AXIS_LIMIT) - 0.5,
            hi.min(LEVEL_AXIS_LIMIT) + 0.5,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redraw_rebuilds_from_history() {
        let mut state = SimulationState::new();
        let mut view = TimeSeriesView::from_state(&state);
        assert_eq!(view.points(), &[[0.0, 5.5]]);
        assert_eq!(view.redraw_count(), 1);

        state.apply(1.5);
        // Not redrawn yet
        assert_eq!(view.points().len(), 1);

        view.redraw(&state);
        assert_eq!(view.points(), &[[0.0, 5.5], [1.0, 7.0]]);
        assert_eq!(view.redraw_count(), 2);

        state.reset();
        view.redraw(&state);
        assert_eq!(view.points(), &[[0.0, 5.5]]);
    }

    #[test]
    fn test_bounds_include_range_and_data() {
        let mut state = SimulationState::new();
        state.apply(10.0);
        let view = TimeSeriesView::from_state(&state);

        assert_eq!(view.time_bounds(), (0.0, 1.0));
        let (lo, hi) = view.level_bounds();
        assert!((lo - 3.5).abs() < 1e-12);
        assert!((hi - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_level_bounds_finite_for_extreme_history() {
        let mut state = SimulationState::new();
        for delta in [8.5e307, 8.5e307, -8.5e307, -8.5e307, -8.5e307, -8.5e307] {
            state.apply(delta);
        }
        let view = TimeSeriesView::from_state(&state);

        let (lo, hi) = view.level_bounds();
        assert!(lo.is_finite() && hi.is_finite());
        assert!((hi - lo).is_finite());
        assert!(lo < 4.0 && hi > 7.0);
    }

    #[test]
    fn test_single_point_time_bounds_non_degenerate() {
        let view = TimeSeriesView::from_state(&SimulationState::new());
        assert_eq!(view.time_bounds(), (0.0, 1.0));
    }
}
