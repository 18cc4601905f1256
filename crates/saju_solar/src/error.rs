//! Error types for ephemeris adapters.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a solar longitude adapter.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch is outside the adapter's valid range.
    EpochOutOfRange { jd_ut: f64 },
    /// Epoch is NaN or infinite.
    InvalidEpoch,
    /// The adapter could not produce a value (foreign backend failure).
    Unavailable(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd_ut } => write!(f, "epoch out of range: JD {jd_ut}"),
            Self::InvalidEpoch => write!(f, "epoch is not a finite number"),
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
