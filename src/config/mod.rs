//! Configuration module for loading presentation parameters.
//!
//! Model constants and input defaults are fixed; only the window and chart
//! appearance can be tuned from a JSON file.

mod parameters;

pub use parameters::{ChartParameters, Parameters, WindowParameters, DEFAULT_PARAMETERS_PATH};
