//! Chart configuration for the saju engine.
//!
//! Every field has a default, so an empty TOML document yields the
//! standard Korean setup (UTC+9, 1900-01-01 day epoch, hourly boundary
//! search bounded at 45 days, three days per year of starting age).
//!
//! ```toml
//! utc_offset_hours = 9.0
//! day_epoch = "1900-01-01"
//! day_offset = 10
//!
//! [search]
//! step_hours = 1.0
//! max_steps = 1080
//!
//! [daewoon]
//! days_per_year = 3.0
//! ```

pub mod error;

use std::path::Path;

use saju_time::CivilDate;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Largest civil-zone offset accepted, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// Largest search stride accepted, in hours. A stride of a day or more
/// could step over a whole 15° sector.
pub const MAX_STEP_HOURS: f64 = 24.0;

/// Top-level configuration for chart computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Civil-zone offset east of UTC, in hours.
    pub utc_offset_hours: f64,
    /// Civil date counted as day zero for the day pillar.
    #[serde(with = "date_string")]
    pub day_epoch: CivilDate,
    /// Sexagenary position of the epoch day (10 puts 1900-01-01 on 甲戌).
    pub day_offset: i64,
    pub search: SearchConfig,
    pub daewoon: DaewoonConfig,
}

/// Solar-term boundary search settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stride of the scan, in hours.
    pub step_hours: f64,
    /// Number of strides tried before giving up.
    pub max_steps: u32,
}

/// Decade-luck settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaewoonConfig {
    /// Elapsed days counted as one year of starting age.
    pub days_per_year: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset_hours: 9.0,
            day_epoch: CivilDate {
                year: 1900,
                month: 1,
                day: 1,
            },
            day_offset: 10,
            search: SearchConfig::default(),
            daewoon: DaewoonConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            step_hours: 1.0,
            max_steps: 1080,
        }
    }
}

impl Default for DaewoonConfig {
    fn default() -> Self {
        Self { days_per_year: 3.0 }
    }
}

impl ChartConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS
        {
            return Err(ConfigError::Invalid(
                "utc_offset_hours must be finite and within ±14",
            ));
        }
        if self.day_epoch.validate().is_err() {
            return Err(ConfigError::Invalid("day_epoch is not a calendar date"));
        }
        self.search.validate()?;
        self.daewoon.validate()
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_hours.is_finite() || self.step_hours <= 0.0 {
            return Err(ConfigError::Invalid("search.step_hours must be positive"));
        }
        if self.step_hours >= MAX_STEP_HOURS {
            return Err(ConfigError::Invalid("search.step_hours must be under 24"));
        }
        if self.max_steps == 0 {
            return Err(ConfigError::Invalid("search.max_steps must be greater than 0"));
        }
        Ok(())
    }
}

impl DaewoonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.days_per_year.is_finite() || self.days_per_year <= 0.0 {
            return Err(ConfigError::Invalid("daewoon.days_per_year must be positive"));
        }
        Ok(())
    }
}

/// `CivilDate` as a `YYYY-MM-DD` string.
mod date_string {
    use saju_time::CivilDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &CivilDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(date)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<CivilDate, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = ChartConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.search.max_steps, 1080);
        assert_eq!(c.day_epoch.to_string(), "1900-01-01");
    }

    #[test]
    fn empty_document_gives_defaults() {
        let c = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(c, ChartConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let c = ChartConfig::from_toml_str("[search]\nmax_steps = 2000\n").unwrap();
        assert_eq!(c.search.max_steps, 2000);
        assert_eq!(c.search.step_hours, 1.0);
        assert_eq!(c.utc_offset_hours, 9.0);
    }

    #[test]
    fn parses_epoch_string() {
        let c = ChartConfig::from_toml_str("day_epoch = \"2000-01-01\"\nday_offset = 54\n").unwrap();
        assert_eq!(c.day_epoch, CivilDate::new(2000, 1, 1).unwrap());
        assert_eq!(c.day_offset, 54);
    }

    #[test]
    fn rejects_bad_epoch() {
        let err = ChartConfig::from_toml_str("day_epoch = \"1900-02-30\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_range_values() {
        for doc in [
            "utc_offset_hours = 15.0",
            "[search]\nstep_hours = 0.0",
            "[search]\nstep_hours = 48.0",
            "[search]\nmax_steps = 0",
            "[daewoon]\ndays_per_year = -3.0",
        ] {
            let err = ChartConfig::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{doc}: {err}");
        }
    }

    #[test]
    fn serializes_back_to_toml() {
        let c = ChartConfig::default();
        let text = toml::to_string(&c).unwrap();
        assert!(text.contains("day_epoch = \"1900-01-01\""));
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), c);
    }
}
