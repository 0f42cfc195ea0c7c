//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building and pricing a
//! schedule.

use chrono::{NaiveTime, Weekday};
use thiserror::Error;

/// The main error type for the salary engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::UnknownWeekday {
///     token: "XX".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown weekday abbreviation: XX");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time span was constructed with a start after its normalized end.
    #[error("Invalid time span: start {start} is after end {end}")]
    InvalidSpan {
        /// The start of the rejected span.
        start: NaiveTime,
        /// The end of the rejected span, as supplied by the caller.
        end: NaiveTime,
    },

    /// A weekday abbreviation was not one of `MO,TU,WE,TH,FR,SA,SU`.
    #[error("Unknown weekday abbreviation: {token}")]
    UnknownWeekday {
        /// The token that failed the lookup.
        token: String,
    },

    /// A schedule line did not match the expected format.
    #[error("Malformed schedule line: {message}")]
    MalformedSchedule {
        /// A description of what made the line malformed.
        message: String,
    },

    /// The rate table had no slots for a weekday. The built-in table covers
    /// all seven weekdays, so hitting this indicates a programming defect.
    #[error("No rate slots configured for {weekday}")]
    MissingRateSlots {
        /// The weekday with no slots.
        weekday: Weekday,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
