//! Error types for cardfile.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors from operations on contacts and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone with the given value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// A value object failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors surfaced at the command-dispatch boundary.
///
/// Every variant's `Display` text is shown to the user verbatim; the loop
/// never terminates on one of these.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command word is not part of the surface
    #[error("Invalid command.")]
    UnknownCommand,

    /// Wrong number of arguments for a known command
    #[error("Invalid arguments. Usage: {usage}")]
    BadArguments { usage: &'static str },

    /// A book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur while loading or saving the snapshot file.
///
/// Unlike command errors these are fatal: anything beyond a missing
/// snapshot file propagates out of `main`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the book into the snapshot blob failed
    #[error("Snapshot encode failed: {0}")]
    Encode(#[source] bincode::Error),

    /// The snapshot blob could not be decoded
    #[error("Snapshot decode failed: {0}")]
    Decode(#[source] bincode::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
