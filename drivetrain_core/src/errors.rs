//! # Error Types
//!
//! Structured error types for drivetrain_core. Errors carry enough context
//! (field name, offending value, reason) for a caller to fix an input
//! programmatically instead of parsing a message string.
//!
//! Iteration caps and catalog misses are *not* errors: they are reported
//! through [`crate::outcome::Outcome`] so the caller decides whether a
//! lower-bound or fallback result is acceptable.
//!
//! ## Example
//!
//! ```rust
//! use drivetrain_core::errors::{CalcError, CalcResult};
//!
//! fn validate_ratio(shaft_ratio: f64) -> CalcResult<()> {
//!     if !(0.0..1.0).contains(&shaft_ratio) {
//!         return Err(CalcError::invalid_input(
//!             "shaft_ratio",
//!             shaft_ratio.to_string(),
//!             "Bore ratio must lie in [0, 1)",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for drivetrain_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, inconsistent)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Bearing family name not in the catalog
    #[error("Unknown bearing type: {name} (expected CARB, SRB, TRB1, CRB, TRB2 or RB)")]
    UnknownBearingType { name: String },

    /// Calculation could not produce a physical result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Study file is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownBearingType error
    pub fn unknown_bearing_type(name: impl Into<String>) -> Self {
        CalcError::UnknownBearingType { name: name.into() }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownBearingType { .. } => "UNKNOWN_BEARING_TYPE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Reject NaN, infinities and (optionally) non-positive values in one place.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive, finite number"));
    }
    Ok(())
}

pub(crate) fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("overhang", "-5.0", "Must be a positive, finite number");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_bearing_type("XRB").error_code(), "UNKNOWN_BEARING_TYPE");
        assert!(CalcError::file_locked("a", "b", "c").is_recoverable());
        assert!(!CalcError::serialization("bad").is_recoverable());
    }

    #[test]
    fn test_require_positive_rejects_nan() {
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_finite("x", f64::INFINITY).is_err());
    }
}
