//! Error types for the persistence layer.
//!
//! Lookups that find nothing are not errors: repositories return `Option`
//! or an empty `Vec` and leave the not-found decision to the caller. The
//! errors here describe a store that could not answer at all, or a dataset
//! that could not be imported.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Dataset import errors
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors raised by a storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },
}

/// Errors raised while loading a dataset into a store.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON or does not match the expected shape.
    #[error("invalid dataset: {0}")]
    InvalidDataset(#[from] serde_json::Error),

    /// A record refers to another record that is not part of the dataset.
    #[error("{kind} {key} references unknown {target}")]
    DanglingReference {
        kind: &'static str,
        key: String,
        target: String,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// Builds a serialization error from any displayable cause.
    pub fn serialization(message: impl std::fmt::Display) -> Self {
        StorageError::Backend(BackendError::SerializationError {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "disk I/O error".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "connection failed to sqlite: disk I/O error"
        );
    }

    #[test]
    fn test_dangling_reference_display() {
        let err = ImportError::DanglingReference {
            kind: "deck",
            key: "12".to_string(),
            target: "user 7".to_string(),
        };
        assert_eq!(err.to_string(), "deck 12 references unknown user 7");
    }

    #[test]
    fn test_serialization_helper() {
        let err = StorageError::serialization("bad json");
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::SerializationError { .. })
        ));
    }
}
