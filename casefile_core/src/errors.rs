//! # Error Types
//!
//! Structured error types for casefile_core. Only genuine failures live here:
//! a cancelled prompt or an empty tip message are ordinary outcomes and are
//! reported through [`crate::list_editor::AppendOutcome`] and
//! [`crate::tips::SubmitOutcome`] instead.
//!
//! ## Example
//!
//! ```rust
//! use casefile_core::errors::{CaseError, CaseResult};
//!
//! fn parse_entries(raw: &str) -> CaseResult<Vec<String>> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//!
//! let err = parse_entries("{not json").unwrap_err();
//! assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for casefile_core operations
pub type CaseResult<T> = Result<T, CaseError>;

/// Structured error type for store and editor operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CaseError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Store file is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// The backing key-value store refused an operation
    #[error("Storage error: {operation} '{key}' - {reason}")]
    StorageError {
        operation: String,
        key: String,
        reason: String,
    },
}

impl CaseError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CaseError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        CaseError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a StorageError
    pub fn storage(operation: impl Into<String>, key: impl Into<String>, reason: impl Into<String>) -> Self {
        CaseError::StorageError {
            operation: operation.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CaseError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry once the other process exits)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CaseError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CaseError::FileError { .. } => "FILE_ERROR",
            CaseError::FileLocked { .. } => "FILE_LOCKED",
            CaseError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CaseError::StorageError { .. } => "STORAGE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CaseError {
    fn from(e: serde_json::Error) -> Self {
        CaseError::serialization(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CaseError::storage("set", "timelineItems", "quota exceeded");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"StorageError\""));
        let roundtrip: CaseError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CaseError::file_error("read", "p", "r").error_code(), "FILE_ERROR");
        assert_eq!(CaseError::storage("get", "k", "r").error_code(), "STORAGE_ERROR");
        assert!(CaseError::file_locked("a", "b", "c").is_recoverable());
        assert!(!CaseError::serialization("bad").is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let error = CaseError::file_error("read", "/tmp/casefile.json", "denied");
        assert_eq!(
            error.to_string(),
            "File error: read on '/tmp/casefile.json' - denied"
        );
    }
}
