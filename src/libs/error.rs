//! Error kinds raised by the record store, the query engine and the
//! input validator.
//!
//! Each variant corresponds to one recoverable failure the interactive
//! shell knows how to report. Database failures are carried through
//! unchanged so callers can still inspect the underlying SQLite error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttritionError {
    /// A joining date did not have the `YYYY-MM-DD` shape.
    #[error("Invalid date format '{0}'. Please enter YYYY-MM-DD.")]
    InvalidDateFormat(String),

    /// No employee row exists with the given id.
    #[error("Invalid employee ID {0}. Please try again.")]
    UnknownEmployeeId(i64),

    /// The supplied employee id was not an integer.
    #[error("Invalid input '{0}'. Please enter an integer for employee ID.")]
    NotAnInteger(String),

    /// The analysis period was neither `quarterly` nor `yearly`.
    #[error("Invalid period '{0}' specified. Supported periods: quarterly, yearly")]
    UnsupportedPeriod(String),

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

pub type AttritionResult<T> = Result<T, AttritionError>;
