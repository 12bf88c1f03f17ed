//! # Materials
//!
//! A material is a named bundle of stiffness properties. Analyzers read the
//! properties they need by name; today that is only the flexural rigidity
//! [`FLEXURAL_RIGIDITY`] (`"EI"`).
//!
//! A missing property is not an error on the raw accessor: it reads as NaN
//! and propagates into the equations. Use [`Material::require`] (or
//! [`Material::validate`]) to check before analysis.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::Material;
//!
//! let steel = Material::new("Steel UB").with_property("EI", 2.0e14);
//! assert_eq!(steel.flexural_rigidity(), 2.0e14);
//!
//! let blank = Material::new("Unknown");
//! assert!(blank.flexural_rigidity().is_nan());
//! assert!(blank.validate().is_err());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Property key for flexural rigidity (N·mm²)
pub const FLEXURAL_RIGIDITY: &str = "EI";

/// A named set of material properties.
///
/// ## JSON
///
/// ```json
/// { "name": "Glulam GL28h", "properties": { "EI": 2.4e13 } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Material {
    /// Display name
    pub name: String,

    /// Property values keyed by name (e.g. "EI", "GA")
    #[serde(default)]
    pub properties: BTreeMap<String, f64>,
}

impl Material {
    /// Create a material with no properties
    pub fn new(name: impl Into<String>) -> Self {
        Material {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Create a material carrying only a flexural rigidity
    pub fn with_rigidity(name: impl Into<String>, ei: f64) -> Self {
        Material::new(name).with_property(FLEXURAL_RIGIDITY, ei)
    }

    /// Builder: add or replace a property
    pub fn with_property(mut self, key: impl Into<String>, value: f64) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Property value, or NaN when absent
    pub fn property(&self, key: &str) -> f64 {
        self.properties.get(key).copied().unwrap_or(f64::NAN)
    }

    /// Property value, failing when absent or non-finite
    pub fn require(&self, key: &str) -> CalcResult<f64> {
        match self.properties.get(key) {
            Some(value) if value.is_finite() => Ok(*value),
            Some(value) => Err(CalcError::invalid_input(
                format!("{}.{}", self.name, key),
                value.to_string(),
                "Property must be a finite number",
            )),
            None => Err(CalcError::missing_property(&self.name, key)),
        }
    }

    /// Declared flexural rigidity EI (N·mm²), NaN when absent
    pub fn flexural_rigidity(&self) -> f64 {
        self.property(FLEXURAL_RIGIDITY)
    }

    /// Check that every property the analyzers read is present and positive
    pub fn validate(&self) -> CalcResult<()> {
        let ei = self.require(FLEXURAL_RIGIDITY)?;
        if ei <= 0.0 {
            return Err(CalcError::invalid_input(
                format!("{}.{}", self.name, FLEXURAL_RIGIDITY),
                ei.to_string(),
                "Flexural rigidity must be positive",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup() {
        let mat = Material::with_rigidity("Timber", 1.2e13).with_property("GA", 5.0e5);
        assert_eq!(mat.flexural_rigidity(), 1.2e13);
        assert_eq!(mat.property("GA"), 5.0e5);
        assert!(mat.property("EA").is_nan());
    }

    #[test]
    fn test_require_missing() {
        let mat = Material::new("Bare");
        assert_eq!(
            mat.require("EI"),
            Err(CalcError::missing_property("Bare", "EI"))
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_rigidity() {
        let mat = Material::with_rigidity("Broken", -1.0);
        let err = mat.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mat = Material::with_rigidity("Infinite", f64::INFINITY);
        assert!(mat.validate().is_err());
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{ "name": "Steel", "properties": { "EI": 200000.0 } }"#;
        let mat: Material = serde_json::from_str(json).unwrap();
        assert_eq!(mat.name, "Steel");
        assert_eq!(mat.flexural_rigidity(), 200000.0);
    }
}
