//! Error types for civil calendar handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date or time-of-day does not exist on the calendar.
    InvalidDate {
        year: i32,
        month: u32,
        day: u32,
        reason: &'static str,
    },
    /// Text could not be parsed as a civil date/time.
    Parse(String),
}

impl TimeError {
    pub(crate) fn invalid(year: i32, month: u32, day: u32, reason: &'static str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            reason,
        }
    }
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate {
                year,
                month,
                day,
                reason,
            } => write!(f, "invalid date {year:04}-{month:02}-{day:02}: {reason}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
