//! Error types for the personal assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by repository operations.
///
/// None of these are fatal: the dispatcher reports them and keeps running.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No record matches the given name or note handle
    #[error("Not found: {0}")]
    NotFound(String),

    /// Edit target is not one of the known contact fields
    #[error("Unknown field: {0} (expected name, phones, birthday, address or email)")]
    UnknownField(String),

    /// Argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A contact with this name already exists and duplicates are rejected
    #[error("Contact already exists: {0}")]
    DuplicateKey(String),

    /// Field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing the persisted store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors that can occur while reading or writing a persisted store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Store file does not exist
    #[error("Store not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Store could not be opened, read or written
    #[error("Store I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store content is not a valid document for this repository
    #[error("Malformed store {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Store was written by an incompatible format version
    #[error("Unsupported store version {found} in {} (expected {expected})", path.display())]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepositoryError::NotFound("Ghost".to_string());
        assert_eq!(err.to_string(), "Not found: Ghost");

        let err = RepositoryError::DuplicateKey("Anna".to_string());
        assert_eq!(err.to_string(), "Contact already exists: Anna");

        let err = StorageError::NotFound(PathBuf::from("auto_save.json"));
        assert_eq!(err.to_string(), "Store not found: auto_save.json");

        let err = ConfigError::InvalidValue {
            var: "ASSISTANT_NOTE_SORT_KEY".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ASSISTANT_NOTE_SORT_KEY: bad"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: RepositoryError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Incorrect phone number!");
    }

    #[test]
    fn test_storage_error_converts() {
        let err: RepositoryError = StorageError::UnsupportedVersion {
            path: PathBuf::from("notes.json"),
            found: 9,
            expected: 1,
        }
        .into();
        assert!(matches!(err, RepositoryError::Storage(_)));
        assert!(err.to_string().contains("version 9"));
    }
}
