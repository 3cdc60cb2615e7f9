//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these messages are shown to the user directly; the command layer maps
//! each kind to its own fixed reply.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book and contact record operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, birthday or name failed validation
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no such phone number
    #[error("Phone number {0} not found in record")]
    PhoneNotFound(String),

    /// A command was given fewer arguments than it needs
    #[error("Command '{command}' expects {expected} argument(s)")]
    MissingArguments {
        command: &'static str,
        expected: usize,
    },
}

impl BookError {
    /// Whether this is one of the not-found kinds (contact or phone).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
