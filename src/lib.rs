//! Glucose Simulator - interactive blood-glucose trainer
//!
//! A teaching tool: the user sets an insulin dose, carbohydrate intake,
//! glycemic load and minutes of activity, then advances simulated time one
//! hour at a time and watches the glucose level on a chart. A 3x3 cube shows
//! green while the level stays in the 4.0-7.0 mmol/L range and red otherwise.

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod simulator;
pub mod state;

pub use cli::CliOptions;
pub use config::Parameters;
pub use error::{InputError, InputField};
pub use model::{compute_delta, is_in_range, GLUCOSE_RANGE, TARGET_GLUCOSE, TIME_STEP_HOURS};
pub use render::RenderState;
pub use simulator::{ControlAction, Simulator};
pub use state::{GlucoseStatus, InputForm, InputParameters, Readout, SimulationState, TimeSeriesView};
