//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the payroll and authorization policies can raise.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, so callers
/// can map failures to user-facing messages in one place.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnknownRole {
///     role: "JANITOR".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown role: JANITOR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An input value was outside the accepted domain.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A role was given for which no policy row exists.
    #[error("Unknown role: {role}")]
    UnknownRole {
        /// The role text that could not be resolved.
        role: String,
    },

    /// Statutory rates were configured outside their valid range.
    #[error("Invalid statutory rates: {message}")]
    InvalidRates {
        /// A description of the rate problem.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// An [`EngineError::InvalidInput`] for an amount whose arithmetic would
    /// leave the representable decimal range.
    pub fn out_of_range(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "amount out of range")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
