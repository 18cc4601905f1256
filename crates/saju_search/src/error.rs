//! Error types for chart resolution and boundary search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_config::ConfigError;
use saju_solar::EphemerisError;
use saju_time::TimeError;

/// Errors from the pillar resolver, solar-term search and daewoon engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The civil moment is not a valid calendar date/time.
    Time(TimeError),
    /// The ephemeris adapter failed.
    Ephemeris(EphemerisError),
    /// No solar-term boundary was crossed within the search bound.
    BoundarySearchExhausted { steps: u32 },
    /// Search or chart configuration is invalid.
    InvalidConfig(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::BoundarySearchExhausted { steps } => {
                write!(f, "no solar-term boundary found within {steps} steps")
            }
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Invalid(msg) => Self::InvalidConfig(msg),
            _ => Self::InvalidConfig("configuration could not be loaded"),
        }
    }
}
