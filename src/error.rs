//! Error types for the phone directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by contact records and the directory store.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// A field failed validation; nothing was changed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Phone index beyond the contact's phone list
    #[error("Phone number index {index} out of range (contact has {len})")]
    PhoneIndexOutOfRange { index: usize, len: usize },

    /// Contact index beyond the directory
    #[error("Contact index {index} out of range (directory has {len})")]
    ContactIndexOutOfRange { index: usize, len: usize },

    /// Writing the backing storage failed; the in-memory change was reverted
    #[error("Failed to save contacts to {target}: {source}")]
    Persistence {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Unexpected I/O failure while reading the backing storage
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
