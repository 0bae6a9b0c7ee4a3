//! Error types for the compliance notification engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rosters, reading
//! configuration, and delivering notifications.

use thiserror::Error;

/// The main error type for the compliance notification engine.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::RosterNotFound {
///     path: "/missing/roster.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.csv");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    RosterNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be read as CSV.
    #[error("Failed to parse roster '{path}': {message}")]
    RosterParseError {
        /// The path to the roster that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A roster row contained a malformed or missing required field.
    ///
    /// The whole load aborts rather than skipping the row; a partial roster
    /// could silently miss an obligation.
    #[error("Invalid roster row {row}: {message}")]
    InvalidRosterRow {
        /// The 1-based data row number (excluding the header).
        row: usize,
        /// A description of what made the row invalid.
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

    /// Outbound webhook delivery failed.
    #[error("Webhook delivery failed: {message}")]
    DeliveryFailed {
        /// A description of the delivery failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
