//! Error types for the leave calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator, its configuration, and its prompts
//! can report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the leave calculator.
///
/// # Example
///
/// ```
/// use leave_calculator::error::LeaveError;
///
/// let error = LeaveError::ConfigNotFound {
///     path: "/missing/leave.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/leave.yaml");
/// ```
#[derive(Debug, Error)]
pub enum LeaveError {
    /// A non-empty answer to a prompt could not be parsed.
    #[error("Invalid {field} '{input}': {reason}")]
    InvalidInput {
        /// The prompt field being answered (e.g., "start date").
        field: String,
        /// The raw text that was entered.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A full-year allowance was negative.
    #[error("Leave allowance cannot be negative: {days}")]
    InvalidAllowance {
        /// The rejected number of days.
        days: Decimal,
    },

    /// A leave year ended before it started.
    #[error("Leave year end {end} is before its start {start}")]
    InvalidLeaveYear {
        /// The first day of the leave year.
        start: NaiveDate,
        /// The last day of the leave year.
        end: NaiveDate,
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

    /// Configuration parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The user closed standard input or pressed Ctrl-C during a prompt.
    #[error("Input interrupted")]
    Interrupted,
}

impl LeaveError {
    /// Returns the process exit status this error should terminate with.
    ///
    /// Interrupts are a clean exit. Rejected input exits with 2, every
    /// other failure with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            LeaveError::Interrupted => 0,
            LeaveError::InvalidInput { .. }
            | LeaveError::InvalidAllowance { .. }
            | LeaveError::InvalidLeaveYear { .. } => 2,
            _ => 1,
        }
    }
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;
