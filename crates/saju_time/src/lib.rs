//! Civil calendar values and time-scale helpers for saju charts.
//!
//! This crate provides:
//! - `CivilDate` / `CivilTime`, validated local calendar values
//! - Proleptic Gregorian day counting and Julian Date conversions
//! - A ΔT model for the UT → TT step needed by solar theory

pub mod civil_time;
pub mod delta_t;
pub mod error;
pub mod julian;

pub use civil_time::{CivilDate, CivilTime};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, civil_from_days, days_from_civil,
    days_in_month, is_leap_year, jd_to_calendar, jd_to_decimal_year,
};
