//! Process-wide constants of the glucose model.

/// Target glucose level (mmol/L); also the initial level after reset
pub const TARGET_GLUCOSE: f64 = 5.5;

/// Lower bound of the normal range (mmol/L), inclusive
pub const GLUCOSE_RANGE_MIN: f64 = 4.0;

/// Upper bound of the normal range (mmol/L), inclusive
pub const GLUCOSE_RANGE_MAX: f64 = 7.0;

/// Normal range as a `(min, max)` pair
pub const GLUCOSE_RANGE: (f64, f64) = (GLUCOSE_RANGE_MIN, GLUCOSE_RANGE_MAX);

/// Simulated hours advanced by one Apply
pub const TIME_STEP_HOURS: u32 = 1;

/// Upper bound of the activity slider (minutes)
pub const ACTIVITY_MAX_MINUTES: u32 = 120;
