//! Error types for the planwise library.
//!
//! Note that plan validation failures are not errors: the rule engine
//! reports those as [`crate::models::ValidationReport`] data. The variants
//! here cover the surfaces around the engine: loading lookup catalogs,
//! pricing configuration, and plan records from disk, and rejecting
//! malformed interface input.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planwise operations.
#[derive(Error, Debug)]
pub enum PlanwiseError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlanwiseError {
    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid input error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type alias for planwise operations
pub type Result<T> = std::result::Result<T, PlanwiseError>;
