//! Control surface inputs: the editable form and the parsed parameters.

use crate::error::{InputError, InputField};
use crate::model::{compute_delta, ACTIVITY_MAX_MINUTES};

/// Default insulin dose (units)
pub const DEFAULT_INSULIN: &str = "10";
/// Default carbohydrate intake (grams)
pub const DEFAULT_CARBS: &str = "60";
/// Default glycemic load
pub const DEFAULT_GLYCEMIC_LOAD: &str = "20";
/// Default physical activity (minutes)
pub const DEFAULT_ACTIVITY_MINUTES: u32 = 30;

/// Parsed inputs for a single Apply.
///
/// Built fresh from the form each time and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputParameters {
    /// Insulin dose (units)
    pub insulin: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Glycemic load (unitless)
    pub glycemic_load: f64,
    /// Physical activity (minutes, 0-120)
    pub activity_minutes: u32,
}

impl InputParameters {
    /// Glucose change these inputs produce over one time step
    pub fn delta(&self) -> f64 {
        compute_delta(self.carbs, self.glycemic_load, self.insulin, self.activity_minutes)
    }
}

/// Editable state of the control surface.
///
/// The three numeric fields are free text, mirroring what the user typed.
/// Activity comes from a bounded slider and is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub insulin: String,
    pub carbs: String,
    pub glycemic_load: String,
    pub activity_minutes: u32,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            insulin: DEFAULT_INSULIN.to_string(),
            carbs: DEFAULT_CARBS.to_string(),
            glycemic_load: DEFAULT_GLYCEMIC_LOAD.to_string(),
            activity_minutes: DEFAULT_ACTIVITY_MINUTES,
        }
    }
}

impl InputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set activity, clamped to the slider range
    pub fn set_activity_minutes(&mut self, minutes: u32) {
        self.activity_minutes = minutes.min(ACTIVITY_MAX_MINUTES);
    }

    /// Parse the form into model inputs.
    ///
    /// Fields are checked in display order: insulin, carbohydrates, glycemic
    /// load. The first one that is not a number is reported.
    pub fn parse(&self) -> Result<InputParameters, InputError> {
        Ok(InputParameters {
            insulin: parse_number(InputField::Insulin, &self.insulin)?,
            carbs: parse_number(InputField::Carbs, &self.carbs)?,
            glycemic_load: parse_number(InputField::GlycemicLoad, &self.glycemic_load)?,
            activity_minutes: self.activity_minutes.min(ACTIVITY_MAX_MINUTES),
        })
    }
}

fn parse_number(field: InputField, text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            text: text.to_string(),
        })
}
