//! State management for the glucose simulation.
//!
//! Contains the simulation state and its histories, the control surface form,
//! the status indicator and the chart data derived from the history.

mod inputs;
mod series;
mod simulation;
mod status;

pub use inputs::{
    InputForm, InputParameters, DEFAULT_ACTIVITY_MINUTES, DEFAULT_CARBS, DEFAULT_GLYCEMIC_LOAD,
    DEFAULT_INSULIN,
};
pub use series::TimeSeriesView;
pub use simulation::SimulationState;
pub use status::{GlucoseStatus, Readout};
