//! Local civil date and time values.
//!
//! `CivilTime` is the canonical birth-moment representation. It is always
//! validated on construction, so downstream code can rely on the date
//! existing on the proleptic Gregorian calendar.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, days_from_civil, days_in_month, jd_to_calendar};

/// Supported civil year range.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A validated calendar date without time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check that the date exists on the calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        let (y, m, d) = (self.year, self.month, self.day);
        if !(MIN_YEAR..=MAX_YEAR).contains(&y) {
            return Err(TimeError::invalid(y, m, d, "year out of range 1..=9999"));
        }
        if !(1..=12).contains(&m) {
            return Err(TimeError::invalid(y, m, d, "month must be 1..=12"));
        }
        if d == 0 || d > days_in_month(y, m) {
            return Err(TimeError::invalid(y, m, d, "day out of range for month"));
        }
        Ok(())
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Whole civil days from `epoch` to `self` (negative before the epoch).
    pub fn days_since(&self, epoch: CivilDate) -> i64 {
        self.day_number() - epoch.day_number()
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year = parse_field::<i32>(parts[0], "year")?;
        let month = parse_field::<u32>(parts[1], "month")?;
        let day = parse_field::<u32>(parts[2], "day")?;
        Self::new(year, month, day)
    }
}

/// A validated local (civil) date and time, to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        t.validate()?;
        Ok(t)
    }

    /// Shorthand for a moment on a whole minute.
    pub fn from_ymd_hm(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        Self::new(year, month, day, hour, minute, 0)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        self.date().validate()?;
        let (y, m, d) = (self.year, self.month, self.day);
        if self.hour > 23 {
            return Err(TimeError::invalid(y, m, d, "hour must be 0..=23"));
        }
        if self.minute > 59 {
            return Err(TimeError::invalid(y, m, d, "minute must be 0..=59"));
        }
        if self.second > 59 {
            return Err(TimeError::invalid(y, m, d, "second must be 0..=59"));
        }
        Ok(())
    }

    pub fn date(&self) -> CivilDate {
        CivilDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Minutes elapsed since local midnight (0..1440).
    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Julian Date (UT) of this civil moment, given the civil zone's
    /// offset east of UTC in hours.
    pub fn to_jd_ut(&self, utc_offset_hours: f64) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second as f64 / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac) - utc_offset_hours / 24.0
    }

    /// Civil moment for a Julian Date (UT), rounded to the nearest second.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let local_jd = jd_ut + utc_offset_hours / 24.0;
        let (year, month, day_frac) = jd_to_calendar(local_jd);
        let day = day_frac.floor();
        let mut seconds = ((day_frac - day) * SECONDS_PER_DAY).round() as i64;
        let mut date = (year, month, day as u32);
        if seconds >= SECONDS_PER_DAY as i64 {
            seconds -= SECONDS_PER_DAY as i64;
            let next = days_from_civil(date.0, date.1, date.2) + 1;
            date = crate::julian::civil_from_days(next);
        }
        Self::new(
            date.0,
            date.1,
            date.2,
            (seconds / 3600) as u32,
            ((seconds % 3600) / 60) as u32,
            (seconds % 60) as u32,
        )
    }
}

impl Display for CivilTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD HH:MM[:SS]` (a `T` separator is also accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date_part, time_part) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected 'YYYY-MM-DD HH:MM', got '{s}'")))?;
        let date: CivilDate = date_part.parse()?;
        let fields: Vec<&str> = time_part.trim().split(':').collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(TimeError::Parse(format!("expected HH:MM[:SS], got '{time_part}'")));
        }
        let hour = parse_field::<u32>(fields[0], "hour")?;
        let minute = parse_field::<u32>(fields[1], "minute")?;
        let second = match fields.get(2) {
            Some(v) => parse_field::<u32>(v, "second")?,
            None => 0,
        };
        Self::new(date.year, date.month, date.day, hour, minute, second)
    }
}

fn parse_field<T: FromStr>(s: &str, what: &str) -> Result<T, TimeError> {
    s.trim()
        .parse::<T>()
        .map_err(|_| TimeError::Parse(format!("invalid {what}: '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_nonexistent_dates() {
        assert!(CivilTime::from_ymd_hm(2023, 2, 29, 0, 0).is_err());
        assert!(CivilTime::from_ymd_hm(2024, 4, 31, 0, 0).is_err());
        assert!(CivilTime::from_ymd_hm(2024, 13, 1, 0, 0).is_err());
        assert!(CivilTime::from_ymd_hm(2024, 1, 0, 0, 0).is_err());
        assert!(CivilTime::from_ymd_hm(2024, 1, 1, 24, 0).is_err());
        assert!(CivilTime::from_ymd_hm(2024, 1, 1, 23, 60).is_err());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilTime::from_ymd_hm(2024, 2, 29, 12, 0).is_ok());
    }

    #[test]
    fn invalid_date_error_shape() {
        let err = CivilDate::new(2023, 2, 30).unwrap_err();
        assert!(matches!(
            err,
            TimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30,
                ..
            }
        ));
    }

    #[test]
    fn days_since_epoch() {
        let epoch = CivilDate::new(1900, 1, 1).unwrap();
        let d = CivilDate::new(2000, 1, 1).unwrap();
        assert_eq!(d.days_since(epoch), 36_524);
        assert_eq!(epoch.days_since(d), -36_524);
    }

    #[test]
    fn kst_midnight_is_previous_day_utc() {
        let t = CivilTime::from_ymd_hm(2000, 1, 1, 21, 0).unwrap();
        // 21:00 at UTC+9 is 12:00 UTC
        assert!((t.to_jd_ut(9.0) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_roundtrip_to_seconds() {
        let t = CivilTime::new(1990, 2, 4, 11, 14, 37).unwrap();
        let back = CivilTime::from_jd_ut(t.to_jd_ut(9.0), 9.0).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn parse_and_display() {
        let t: CivilTime = "1990-01-01 23:45".parse().unwrap();
        assert_eq!(t.minutes_of_day(), 23 * 60 + 45);
        assert_eq!(t.to_string(), "1990-01-01 23:45:00");
        let t2: CivilTime = "2024-02-04T17:27:05".parse().unwrap();
        assert_eq!(t2.second, 5);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("1990/01/01 12:00".parse::<CivilTime>().is_err());
        assert!("1990-01-01".parse::<CivilTime>().is_err());
        assert!("1990-02-30 12:00".parse::<CivilTime>().is_err());
    }
}
