//! Parameter structures for the window and the chart.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default location of the parameters file, relative to the working directory
pub const DEFAULT_PARAMETERS_PATH: &str = "data/parameters/simulator.json";

/// Top-level parameters container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Main window settings
    pub window: WindowParameters,
    /// Time-series chart appearance
    pub chart: ChartParameters,
}

impl Parameters {
    /// Load parameters from the default path, or use defaults if the file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from(DEFAULT_PARAMETERS_PATH)
    }

    /// Load from a JSON file, falling back to defaults if it is missing or
    /// malformed. Sections and fields absent from the file keep their
    /// defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

/// Main window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowParameters {
    pub title: String,
    /// Logical width (points)
    pub width: u32,
    /// Logical height (points)
    pub height: u32,
}

impl Default for WindowParameters {
    fn default() -> Self {
        Self {
            title: "Diabetes Trainer".to_string(),
            width: 1000,
            height: 600,
        }
    }
}

/// Time-series chart appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartParameters {
    /// Radius of the point markers (points)
    pub marker_radius: f32,
    /// Width of the glucose line (points)
    pub line_width: f32,
    /// Draw the series legend in the top-right corner
    pub show_legend: bool,
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            marker_radius: 3.5,
            line_width: 2.0,
            show_legend: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_params() {
        let params = WindowParameters::default();
        assert_eq!(params.title, "Diabetes Trainer");
        assert_eq!((params.width, params.height), (1000, 600));
    }

    #[test]
    fn test_serialization() {
        let params = Parameters::default();
        let json = serde_json::to_string_pretty(&params).unwrap();
        let parsed: Parameters = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let parsed: Parameters = serde_json::from_str(r#"{"window": {"width": 1280}}"#).unwrap();
        assert_eq!(parsed.window.width, 1280);
        assert_eq!(parsed.window.height, 600);
        assert_eq!(parsed.chart, ChartParameters::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let params = Parameters::load_from("does/not/exist.json");
        assert_eq!(params, Parameters::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!("glucose_params_{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let params = Parameters::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(params, Parameters::default());
    }
}
