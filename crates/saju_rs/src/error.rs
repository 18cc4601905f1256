//! Error type for the convenience facade.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_config::ConfigError;
use saju_search::SearchError;
use saju_solar::EphemerisError;
use saju_time::TimeError;

/// Broad failure class of a [`SajuError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed civil date or time.
    InvalidDate,
    /// The ephemeris adapter failed.
    EphemerisUnavailable,
    /// No solar-term boundary within the search bound.
    BoundarySearchExhausted,
    /// Invalid or unreadable configuration.
    Config,
    /// The lunar-to-solar converter failed or is missing.
    LunarConversion,
    /// The report table is unreadable or lacks an entry.
    Report,
}

/// Errors from the facade.
#[derive(Debug)]
#[non_exhaustive]
pub enum SajuError {
    Search(SearchError),
    Config(ConfigError),
    LunarConversion(String),
    Report(String),
}

impl SajuError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Search(SearchError::Time(_)) => ErrorKind::InvalidDate,
            Self::Search(SearchError::Ephemeris(_)) => ErrorKind::EphemerisUnavailable,
            Self::Search(SearchError::BoundarySearchExhausted { .. }) => {
                ErrorKind::BoundarySearchExhausted
            }
            Self::Search(_) | Self::Config(_) => ErrorKind::Config,
            Self::LunarConversion(_) => ErrorKind::LunarConversion,
            Self::Report(_) => ErrorKind::Report,
        }
    }
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::LunarConversion(msg) => write!(f, "lunar conversion failed: {msg}"),
            Self::Report(msg) => write!(f, "report error: {msg}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for SajuError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ConfigError> for SajuError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Search(SearchError::Time(e))
    }
}

impl From<EphemerisError> for SajuError {
    fn from(e: EphemerisError) -> Self {
        Self::Search(SearchError::Ephemeris(e))
    }
}
