//! Chart computation engine: pillar resolution, solar-term search and
//! decade-luck progression.
//!
//! This crate provides:
//! - Pillar resolver from a civil birth moment via an ephemeris adapter
//! - Fixed-stride solar-term boundary scan and bisection-refined
//!   next/previous solar-term search
//! - Daewoon engine (direction, starting age, decade pillars)
//! - One-shot chart assembly combining all of the above
//!
//! Every entry point is generic over [`saju_solar::SunLongitude`], so any
//! adapter (the bundled analytic sun, a closure, a foreign backend) can
//! drive it.

pub mod chart;
pub mod daewoon;
pub mod error;
pub mod pillars;
pub mod solar_term;
pub mod solar_term_types;

pub use chart::{Chart, chart_for_birth};
pub use daewoon::{DaewoonTimeline, compute_daewoon, daewoon_for_birth};
pub use error::SearchError;
pub use pillars::{ResolvedPillars, resolve_pillars};
pub use solar_term::{
    next_solar_term, prev_solar_term, scan_solar_term_crossing, sun_longitude_at,
    sun_longitude_for_civil,
};
pub use solar_term_types::{SearchDirection, SolarTermCrossing, SolarTermEvent};
