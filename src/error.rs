//! Error types for the Severance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a settlement.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Severance Engine.
///
/// All fallible operations in the engine return this error type. Errors are
/// raised on the first invalid input encountered; no partial report is ever
/// produced.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     value: "2020-13-01".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid date '2020-13-01': input is out of range");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date string was not a valid ISO `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// An input field held a value the calculators do not accept.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The offending field.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Calendar arithmetic left the representable date range.
    #[error("Date out of range: {date} + {days} days")]
    DateOutOfRange {
        /// The date the arithmetic started from.
        date: NaiveDate,
        /// The number of days being added.
        days: u32,
    },

    /// A bracket table violated its ordering rules.
    #[error("Invalid rate table: {message}")]
    InvalidRateTable {
        /// A description of the violated rule.
        message: String,
    },

    /// Rate table file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Rate table file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A serialized settlement input could not be decoded.
    #[error("Failed to parse settlement input: {message}")]
    InputParse {
        /// A description of the decoding error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
