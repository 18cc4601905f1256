//! Apparent geocentric solar longitude for saju charts.
//!
//! The chart engine consumes exactly one astronomical signal: the sun's
//! apparent ecliptic longitude at a UT instant. This crate defines the
//! [`SunLongitude`] seam and ships [`AnalyticSun`], a self-contained
//! low-precision solar theory that needs no kernel files.

pub mod adapter;
pub mod error;
pub mod nutation;
pub mod sun;

pub use adapter::{SunLongitude, normalize_360};
pub use error::EphemerisError;
pub use nutation::{fundamental_arguments, nutation_longitude_arcsec};
pub use sun::{AnalyticSun, MAX_JD_UT, MIN_JD_UT, RANGE_MARGIN_DAYS};
