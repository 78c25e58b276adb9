//! Glucose level, elapsed time and their histories.

use crate::model::{TARGET_GLUCOSE, TIME_STEP_HOURS};

/// Simulation state owned by the application.
///
/// `glucose_history` and `time_history` are index-aligned and always the same
/// length. Index 0 holds `(0, TARGET_GLUCOSE)` until the next reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Current glucose level (mmol/L)
    pub glucose_level: f64,
    /// Elapsed simulated time (hours)
    pub time: u32,
    glucose_history: Vec<f64>,
    time_history: Vec<u32>,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            glucose_level: TARGET_GLUCOSE,
            time: 0,
            glucose_history: vec![TARGET_GLUCOSE],
            time_history: vec![0],
        }
    }
}

impl SimulationState {
    /// Create a state at the target level, time 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to the level, advance one time step and record the new point
    pub fn apply(&mut self, delta: f64) {
        self.glucose_level += delta;
        self.time += TIME_STEP_HOURS;
        self.glucose_history.push(self.glucose_level);
        self.time_history.push(self.time);
    }

    /// Return to the target level at time 0 with single-point histories
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn glucose_history(&self) -> &[f64] {
        &self.glucose_history
    }

    pub fn time_history(&self) -> &[u32] {
        &self.time_history
    }

    /// Number of recorded points (never zero)
    pub fn len(&self) -> usize {
        self.time_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_history.is_empty()
    }

    /// Most recent `(time, level)` point
    pub fn latest(&self) -> (u32, f64) {
        (self.time, self.glucose_level)
    }

    /// Recorded `(time, level)` points in chronological order
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.time_history
            .iter()
            .copied()
            .zip(self.glucose_history.iter().copied())
    }
}
