//! Error types for the simulator's input boundary.

use std::fmt;

use thiserror::Error;

/// Free-text input field on the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Insulin,
    Carbs,
    GlycemicLoad,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::Insulin => "insulin",
            InputField::Carbs => "carbohydrates",
            InputField::GlycemicLoad => "glycemic load",
        };
        f.write_str(name)
    }
}

/// Failure to turn the control surface into model inputs.
///
/// Raised on Apply before any state is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is not a number: {text:?}")]
    InvalidNumber { field: InputField, text: String },
}

impl InputError {
    /// Field that failed to parse
    pub fn field(&self) -> InputField {
        match self {
            InputError::InvalidNumber { field, .. } => *field,
        }
    }
}
