//! Types for solar-term boundary search.

use saju_base::{DaewoonDirection, SolarTerm};
use saju_time::CivilTime;
use serde::Serialize;

/// Search direction in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchDirection {
    Forward,
    Backward,
}

impl SearchDirection {
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

impl From<DaewoonDirection> for SearchDirection {
    fn from(d: DaewoonDirection) -> Self {
        match d {
            DaewoonDirection::Forward => Self::Forward,
            DaewoonDirection::Backward => Self::Backward,
        }
    }
}

/// Result of the fixed-stride scan: the first sampled instant whose
/// 15° sector differs from the starting one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermCrossing {
    pub direction: SearchDirection,
    /// JD (UT) the scan started from.
    pub start_jd_ut: f64,
    /// JD (UT) of the first sample in a different sector.
    pub jd_ut: f64,
    /// Strides taken to reach `jd_ut`.
    pub steps: u32,
    pub start_term: SolarTerm,
    pub end_term: SolarTerm,
    /// `|jd_ut - start_jd_ut|` in days.
    pub elapsed_days: f64,
}

/// A solar-term boundary refined by bisection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    /// Term that begins at this instant.
    pub term: SolarTerm,
    pub jd_ut: f64,
    /// The same instant in the configured civil zone, to the second.
    pub civil: CivilTime,
    /// Apparent solar longitude at `jd_ut`, in degrees.
    pub sun_longitude_deg: f64,
}
