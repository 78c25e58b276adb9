//! Two-state in-range indicator and the readout label.

use crate::model::is_in_range;

/// Status indicator for the current glucose level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlucoseStatus {
    /// Level within [4.0, 7.0]: the cube is "solved"
    #[default]
    InRange,
    /// Level outside the normal range: the cube is "broken"
    OutOfRange,
}

impl GlucoseStatus {
    /// Classify a glucose level
    pub fn from_level(level: f64) -> Self {
        if is_in_range(level) {
            GlucoseStatus::InRange
        } else {
            GlucoseStatus::OutOfRange
        }
    }

    pub fn is_solved(self) -> bool {
        self == GlucoseStatus::InRange
    }
}

/// Text shown under the status indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Readout {
    /// Current glucose level (mmol/L)
    Level(f64),
    /// Last Apply failed to parse its inputs
    InputError,
}

impl Readout {
    pub fn text(&self) -> String {
        match self {
            Readout::Level(level) => format!("Glucose level: {:.1} mmol/L", level),
            Readout::InputError => "Input error!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_level() {
        assert_eq!(GlucoseStatus::from_level(4.0), GlucoseStatus::InRange);
        assert_eq!(GlucoseStatus::from_level(7.0), GlucoseStatus::InRange);
        assert_eq!(GlucoseStatus::from_level(3.99), GlucoseStatus::OutOfRange);
        assert_eq!(GlucoseStatus::from_level(7.01), GlucoseStatus::OutOfRange);
        assert!(GlucoseStatus::default().is_solved());
    }

    #[test]
    fn test_readout_text() {
        assert_eq!(Readout::Level(5.5).text(), "Glucose level: 5.5 mmol/L");
        assert_eq!(Readout::Level(7.04).text(), "Glucose level: 7.0 mmol/L");
        assert_eq!(Readout::InputError.text(), "Input error!");
    }
}
