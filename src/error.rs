//! Error types for the leave balance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during balance calculation.

use thiserror::Error;

/// The main error type for the leave balance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::InvalidDateRange {
///     value: "2025-13-40".to_string(),
///     message: "input contains invalid characters".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: could not parse '2025-13-40': input contains invalid characters"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string supplied to a date-range function could not be parsed.
    #[error("Invalid date range: could not parse '{value}': {message}")]
    InvalidDateRange {
        /// The input that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Policy configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee id was not found in the record store.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// A store snapshot could not be read or written.
    #[error("Store snapshot error at '{path}': {message}")]
    SnapshotIo {
        /// The snapshot file path.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
