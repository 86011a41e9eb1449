//! # Error Types
//!
//! Structured error types for uq_core. Every fallible operation on panels,
//! documents and files returns a [`UqResult`], so front ends can decide how
//! to surface a failure (warning dialog, status bar, exit code).
//!
//! ## Example
//!
//! ```rust
//! use uq_core::errors::{UqError, UqResult};
//!
//! fn validate_samples(samples: u32) -> UqResult<()> {
//!     if samples == 0 {
//!         return Err(UqError::invalid_input(
//!             "samples",
//!             samples.to_string(),
//!             "At least one sample is required",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for uq_core operations
pub type UqResult<T> = Result<T, UqError>;

/// Structured error type for configuration operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum UqError {
    /// An input value is invalid (out of range, blank, duplicated, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Two panels tried to write the same top-level document key
    #[error("Duplicate document section: '{key}'")]
    DuplicateSection { key: String },

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

impl UqError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        UqError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DuplicateSection error
    pub fn duplicate_section(key: impl Into<String>) -> Self {
        UqError::DuplicateSection { key: key.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        UqError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        UqError::SerializationError {
            reason: reason.into(),
        }
    }

    /// The underlying reason, without the variant prefix.
    ///
    /// Used for warning dialogs, which already name the path themselves.
    pub fn reason(&self) -> String {
        match self {
            UqError::InvalidInput { reason, .. } => reason.clone(),
            UqError::DuplicateSection { key } => format!("duplicate section '{}'", key),
            UqError::FileError { reason, .. } => reason.clone(),
            UqError::SerializationError { reason } => reason.clone(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            UqError::InvalidInput { .. } => "INVALID_INPUT",
            UqError::DuplicateSection { .. } => "DUPLICATE_SECTION",
            UqError::FileError { .. } => "FILE_ERROR",
            UqError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for UqError {
    fn from(e: serde_json::Error) -> Self {
        UqError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = UqError::invalid_input("stdDev", "-1", "Standard deviation must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: UqError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(UqError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(
            UqError::duplicate_section("fem").error_code(),
            "DUPLICATE_SECTION"
        );
    }

    #[test]
    fn test_file_error_reason_is_bare() {
        let error = UqError::file_error("open", "/tmp/a.json", "No such file or directory");
        assert_eq!(error.reason(), "No such file or directory");
        assert!(error.to_string().contains("/tmp/a.json"));
    }
}
