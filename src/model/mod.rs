//! Glucose update model.
//!
//! A deliberately simple linear teaching model: carbohydrates scaled by
//! glycemic load raise the level, insulin lowers it, and activity minutes add
//! a small positive contribution. Levels are not clamped, so repeated
//! applications can drive the value negative or arbitrarily high.

mod constants;
mod glucose;

pub use constants::{
    ACTIVITY_MAX_MINUTES, GLUCOSE_RANGE, GLUCOSE_RANGE_MAX, GLUCOSE_RANGE_MIN, TARGET_GLUCOSE,
    TIME_STEP_HOURS,
};
pub use glucose::{compute_delta, is_in_range};
