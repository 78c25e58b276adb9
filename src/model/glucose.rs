//! Glucose delta computation and range classification.

use super::constants::{GLUCOSE_RANGE_MAX, GLUCOSE_RANGE_MIN};

/// Carbohydrate grams per unit of glucose rise at reference glycemic load
const CARBS_PER_UNIT: f64 = 10.0;
/// Glycemic load at which carbohydrates have their nominal effect
const REFERENCE_GLYCEMIC_LOAD: f64 = 20.0;
/// Glucose drop (mmol/L) per unit of insulin
const INSULIN_EFFECT_PER_UNIT: f64 = 0.5;
/// Activity minutes per 1 mmol/L of change
const ACTIVITY_MINUTES_PER_UNIT: f64 = 60.0;

/// Change in glucose level (mmol/L) for one time step.
///
/// ```text
/// delta = (carbs / 10) * (glycemic_load / 20) - insulin * 0.5 + activity_minutes / 60
/// ```
///
/// Inputs are taken as-is: no validation, no clamping.
pub fn compute_delta(carbs: f64, glycemic_load: f64, insulin: f64, activity_minutes: u32) -> f64 {
    (carbs / CARBS_PER_UNIT) * (glycemic_load / REFERENCE_GLYCEMIC_LOAD)
        - insulin * INSULIN_EFFECT_PER_UNIT
        + f64::from(activity_minutes) / ACTIVITY_MINUTES_PER_UNIT
}

/// Whether `level` lies in the closed normal range [4.0, 7.0]
pub fn is_in_range(level: f64) -> bool {
    (GLUCOSE_RANGE_MIN..=GLUCOSE_RANGE_MAX).contains(&level)
}
