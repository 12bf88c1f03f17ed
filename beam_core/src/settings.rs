//! # Analysis Settings
//!
//! Inputs that are not properties of the beam: the deflection correction
//! factor, how densely diagrams are sampled, and chart axis labels. Every
//! field has a default, so a settings file only needs the values it changes.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "deflection_factor": 1.15,
//!   "sample_count": 201,
//!   "y_axis_labels": { "deflection": "δ (mm)" }
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::settings::AnalysisSettings;
//!
//! let settings = AnalysisSettings::from_json_str(r#"{ "deflection_factor": 1.15 }"#).unwrap();
//! assert_eq!(settings.deflection_factor, 1.15);
//! assert_eq!(settings.sample_count, 101);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::equations::Quantity;
use crate::errors::{CalcError, CalcResult};
use crate::plot::DEFAULT_X_AXIS_LABEL;

/// Fewest samples a diagram may use
pub const MIN_SAMPLE_COUNT: usize = 11;

/// Most samples a diagram may use
pub const MAX_SAMPLE_COUNT: usize = 100_001;

/// Settings applied to every equation and plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Dimensionless multiplier applied to every deflection value
    pub deflection_factor: f64,

    /// Number of evenly spaced samples per diagram
    pub sample_count: usize,

    /// Label for the horizontal axis
    pub x_axis_label: String,

    /// Overrides for the vertical axis label, per quantity
    pub y_axis_labels: HashMap<Quantity, String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            deflection_factor: 1.0,
            sample_count: 101, // every 1% of the beam
            x_axis_label: DEFAULT_X_AXIS_LABEL.to_string(),
            y_axis_labels: HashMap::new(),
        }
    }
}

impl AnalysisSettings {
    /// Builder: set the deflection correction factor
    pub fn with_deflection_factor(mut self, factor: f64) -> Self {
        self.deflection_factor = factor;
        self
    }

    /// Builder: set the sample count (clamped to
    /// [`MIN_SAMPLE_COUNT`]..=[`MAX_SAMPLE_COUNT`])
    pub fn with_sample_count(mut self, count: usize) -> Self {
        self.sample_count = count.clamp(MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT);
        self
    }

    /// Vertical axis label for a quantity
    pub fn y_axis_label(&self, quantity: Quantity) -> &str {
        self.y_axis_labels
            .get(&quantity)
            .map(String::as_str)
            .unwrap_or_else(|| quantity.axis_label())
    }

    /// Check that the settings can drive an analysis
    pub fn validate(&self) -> CalcResult<()> {
        if !self.deflection_factor.is_finite() {
            return Err(CalcError::invalid_input(
                "deflection_factor",
                self.deflection_factor.to_string(),
                "Correction factor must be a finite number",
            ));
        }
        if self.sample_count < MIN_SAMPLE_COUNT {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("At least {} samples are required", MIN_SAMPLE_COUNT),
            ));
        }
        if self.sample_count > MAX_SAMPLE_COUNT {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                format!("At most {} samples are allowed", MAX_SAMPLE_COUNT),
            ));
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: AnalysisSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.deflection_factor, 1.0);
        assert_eq!(settings.sample_count, 101);
        assert_eq!(settings.x_axis_label, "Span (m)");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = AnalysisSettings::from_json_str(
            r#"{ "sample_count": 51, "y_axis_labels": { "deflection": "δ (mm)" } }"#,
        )
        .unwrap();
        assert_eq!(settings.deflection_factor, 1.0);
        assert_eq!(settings.sample_count, 51);
        assert_eq!(settings.y_axis_label(Quantity::Deflection), "δ (mm)");
        assert_eq!(settings.y_axis_label(Quantity::ShearForce), "Shear Force (kN)");
    }

    #[test]
    fn test_rejects_too_few_samples() {
        let err = AnalysisSettings::from_json_str(r#"{ "sample_count": 3 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnalysisSettings::from_json_str("{ deflection_factor: }").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_rejects_too_many_samples() {
        let err = AnalysisSettings::from_json_str(r#"{ "sample_count": 1000000000 }"#).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "sample_count"));
        assert!(AnalysisSettings::from_json_str(r#"{ "sample_count": 100001 }"#).is_ok());
    }

    #[test]
    fn test_builder_clamps_sample_count() {
        let settings = AnalysisSettings::default().with_sample_count(2);
        assert_eq!(settings.sample_count, MIN_SAMPLE_COUNT);
        let settings = AnalysisSettings::default().with_sample_count(usize::MAX);
        assert_eq!(settings.sample_count, MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("beam_core_settings_does_not_exist.json");
        let err = AnalysisSettings::load(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "beam_core_settings_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "deflection_factor": 0.9 }"#).unwrap();
        let settings = AnalysisSettings::load(&path).unwrap();
        assert_eq!(settings.deflection_factor, 0.9);
        let _ = fs::remove_file(&path);
    }
}
