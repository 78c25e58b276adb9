//! Control surface logic.
//!
//! `Simulator` owns everything the window mutates: the simulation state, the
//! input form, the status indicator, the readout label and the chart data.
//! The HUD turns button clicks into [`ControlAction`]s and the event loop
//! hands them to [`Simulator::dispatch`].

use crate::error::InputError;
use crate::state::{GlucoseStatus, InputForm, Readout, SimulationState, TimeSeriesView};

/// User action on the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Advance one time step using the current inputs
    Apply,
    /// Restore initial state and default inputs
    Reset,
}

/// Application state behind the main window
#[derive(Debug, Clone)]
pub struct Simulator {
    pub state: SimulationState,
    pub form: InputForm,
    status: GlucoseStatus,
    readout: Readout,
    view: TimeSeriesView,
}

impl Default for Simulator {
    fn default() -> Self {
        let state = SimulationState::new();
        let view = TimeSeriesView::from_state(&state);
        Self {
            readout: Readout::Level(state.glucose_level),
            status: GlucoseStatus::InRange,
            form: InputForm::default(),
            state,
            view,
        }
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> GlucoseStatus {
        self.status
    }

    pub fn readout(&self) -> Readout {
        self.readout
    }

    pub fn view(&self) -> &TimeSeriesView {
        &self.view
    }

    /// Run an action, reporting input errors through the readout
    pub fn dispatch(&mut self, action: ControlAction) {
        match action {
            ControlAction::Apply => {
                if let Err(e) = self.apply() {
                    log::warn!("Apply rejected: {}", e);
                }
            }
            ControlAction::Reset => self.reset(),
        }
    }

    /// Parse the form and advance the simulation by one step.
    ///
    /// On a parse error only the readout changes; state, status and chart are
    /// left as they were. Returns the new glucose level.
    pub fn apply(&mut self) -> Result<f64, InputError> {
        let params = match self.form.parse() {
            Ok(params) => params,
            Err(e) => {
                self.readout = Readout::InputError;
                return Err(e);
            }
        };

        let delta = params.delta();
        self.state.apply(delta);

        let level = self.state.glucose_level;
        self.status = GlucoseStatus::from_level(level);
        self.readout = Readout::Level(level);
        self.view.redraw(&self.state);

        log::info!(
            "t={}h: delta={:+.2}, level={:.2} mmol/L ({:?})",
            self.state.time,
            delta,
            level,
            self.status
        );
        Ok(level)
    }

    /// Restore the initial state, default inputs and in-range status
    pub fn reset(&mut self) {
        self.state.reset();
        self.form.reset();
        self.status = GlucoseStatus::InRange;
        self.readout = Readout::Level(self.state.glucose_level);
        self.view.redraw(&self.state);
        log::info!("Simulation reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulator_in_range() {
        let sim = Simulator::new();
        assert_eq!(sim.status(), GlucoseStatus::InRange);
        assert_eq!(sim.readout(), Readout::Level(5.5));
        assert_eq!(sim.view().points().len(), 1);
    }

    #[test]
    fn test_dispatch_apply_error_sets_readout() {
        let mut sim = Simulator::new();
        sim.form.insulin = "ten".to_string();
        sim.dispatch(ControlAction::Apply);
        assert_eq!(sim.readout(), Readout::InputError);
        assert_eq!(sim.state.len(), 1);
    }

    #[test]
    fn test_dispatch_reset() {
        let mut sim = Simulator::new();
        sim.dispatch(ControlAction::Apply);
        sim.dispatch(ControlAction::Reset);
        assert_eq!(sim.state, SimulationState::new());
    }
}
