//! Error types for the Equity Swap Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while editing, persisting and
//! computing compensation figures.

use thiserror::Error;

/// The main error type for the Equity Swap Calculator.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use equity_swap_calculator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/calculator.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/calculator.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// A persisted record was missing, unreadable or malformed.
    ///
    /// The settings store recovers from this locally by substituting defaults.
    #[error("Failed to read stored value '{key}': {message}")]
    StorageRead {
        /// The storage key that could not be read.
        key: String,
        /// A description of the read failure.
        message: String,
    },

    /// A record could not be written to the backing store.
    #[error("Failed to write stored value '{key}': {message}")]
    StorageWrite {
        /// The storage key that could not be written.
        key: String,
        /// A description of the write failure.
        message: String,
    },

    /// An edit would break the `min <= default <= max` ordering of a bound.
    #[error("Invalid bounds for '{field}': {message}")]
    InvalidBounds {
        /// The settings field being edited.
        field: String,
        /// A description of the violated ordering.
        message: String,
    },

    /// A value lies outside the domain of its field.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// The field that received the value.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A calculation step attempted to divide by zero.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The calculation step that attempted the division.
        operation: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
