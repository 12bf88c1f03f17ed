//! # Error Types
//!
//! Structured error types for beam_core. Every failure the engine can report
//! is a variant here, with enough context to tell the caller what to fix.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_m: f64) -> CalcResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "primary_span",
//!             span_m.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for beam calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive span, bad setting, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A material lacks a property an analyzer reads
    #[error("Material '{material}' has no '{property}' property")]
    MissingProperty { material: String, property: String },

    /// The support condition name is not one of the known conditions
    #[error("Unsupported condition: '{condition}'")]
    UnsupportedCondition { condition: String },

    /// An equation was sampled outside the physical span
    #[error("Position x = {position} is outside the beam (0 to {total_span}) for {quantity}")]
    OutOfDomain {
        quantity: String,
        position: f64,
        total_span: f64,
    },

    /// Plotting produced no usable point
    #[error("No valid data points for plotting '{label}'")]
    NoValidPoints { label: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(material: impl Into<String>, property: impl Into<String>) -> Self {
        CalcError::MissingProperty {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Create an UnsupportedCondition error
    pub fn unsupported_condition(condition: impl Into<String>) -> Self {
        CalcError::UnsupportedCondition {
            condition: condition.into(),
        }
    }

    /// Create an OutOfDomain error
    pub fn out_of_domain(quantity: impl Into<String>, position: f64, total_span: f64) -> Self {
        CalcError::OutOfDomain {
            quantity: quantity.into(),
            position,
            total_span,
        }
    }

    /// Create a NoValidPoints error
    pub fn no_valid_points(label: impl Into<String>) -> Self {
        CalcError::NoValidPoints {
            label: label.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingProperty { .. } => "MISSING_PROPERTY",
            CalcError::UnsupportedCondition { .. } => "UNSUPPORTED_CONDITION",
            CalcError::OutOfDomain { .. } => "OUT_OF_DOMAIN",
            CalcError::NoValidPoints { .. } => "NO_VALID_POINTS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
