//! # Error Types
//!
//! Structured error types for stave_core. Every failure a calculator can
//! report is a value the caller decides what to do with: show a message,
//! keep the previous result, or ask for new input.
//!
//! ## Example
//!
//! ```rust
//! use stave_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_in: f64) -> CalcResult<()> {
//!     if depth_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "shell_depth",
//!             depth_in.to_string(),
//!             "Shell depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for stave_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for parsing and calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Text does not resemble any supported numeric grammar
    #[error("Invalid format: '{input}' is not a recognizable measurement")]
    InvalidFormat { input: String },

    /// A fraction expression has a zero denominator
    #[error("Division by zero in '{input}'")]
    DivisionByZero { input: String },

    /// An input value is out of range for the calculation
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Edge profile key is not in the catalog
    #[error("Unknown bearing edge profile: {key}")]
    UnknownProfile { key: String },

    /// A required form field was left blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Inputs are individually valid but cannot be satisfied together
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidFormat error
    pub fn invalid_format(input: impl Into<String>) -> Self {
        CalcError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(input: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            input: input.into(),
        }
    }

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

    /// Create an UnknownProfile error
    pub fn unknown_profile(key: impl Into<String>) -> Self {
        CalcError::UnknownProfile { key: key.into() }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by text that could not be read as a number
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidFormat { .. } | CalcError::DivisionByZero { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidFormat { .. } => "INVALID_FORMAT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownProfile { .. } => "UNKNOWN_PROFILE",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
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
