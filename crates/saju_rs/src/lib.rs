//! Convenience facade for the saju chart engine.
//!
//! [`Saju`] bundles an ephemeris adapter, a validated [`ChartConfig`], a
//! chart cache and an optional lunar converter, so callers go from a birth
//! date to a chart in one call.
//!
//! # Quick start
//!
//! ```rust
//! use saju_rs::{BirthDate, CivilDate, Gender, Saju};
//!
//! let saju = Saju::new();
//! let birth = BirthDate::Solar(CivilDate::new(1990, 1, 1).unwrap());
//! let chart = saju.chart_for_date(&birth, 0, 0, Gender::Male).unwrap();
//! assert_eq!(chart.label(), "己巳 丙子 丙寅 戊子");
//! ```

pub mod birth;
pub mod cache;
pub mod error;
pub mod report;

use saju_search::{
    daewoon_for_birth, next_solar_term, prev_solar_term, resolve_pillars, sun_longitude_for_civil,
};
use saju_solar::{AnalyticSun, SunLongitude};
use tracing::debug;

pub use birth::{BirthDate, LunarConverter, LunarDate};
pub use cache::{CacheStats, ChartCache, ChartKey, DEFAULT_CACHE_CAPACITY};
pub use error::{ErrorKind, SajuError};
pub use report::{DirectionAdvice, PersonalReport, ReportSummary, ReportTable, StrategyReport};

// Re-export the types callers need so they can depend on this crate alone.
pub use saju_base::{
    AnnotatedPillar, Branch, DaewoonDirection, DecadeStep, Gender, Pillar, PillarSlot, SolarTerm,
    SpecialCombination, SpiritMarker, Stem, TenGod, TenGodLabel, TwelveStage, VoidPair,
};
pub use saju_config::ChartConfig;
pub use saju_search::{
    Chart, DaewoonTimeline, ResolvedPillars, SearchError, SolarTermCrossing, SolarTermEvent,
};
pub use saju_solar::EphemerisError;
pub use saju_time::{CivilDate, CivilTime};

type SharedSun = Box<dyn SunLongitude + Send + Sync>;
type SharedLunarConverter = Box<dyn LunarConverter + Send + Sync>;

/// Chart engine handle.
pub struct Saju {
    sun: SharedSun,
    config: ChartConfig,
    cache: ChartCache,
    lunar: Option<SharedLunarConverter>,
}

impl Default for Saju {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Saju {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Saju")
            .field("config", &self.config)
            .field("cache", &self.cache.stats())
            .field("lunar", &self.lunar.is_some())
            .finish_non_exhaustive()
    }
}

impl Saju {
    /// Analytic sun with the default configuration.
    pub fn new() -> Self {
        Self {
            sun: Box::new(AnalyticSun),
            config: ChartConfig::default(),
            cache: ChartCache::new(),
            lunar: None,
        }
    }

    /// Analytic sun with a caller-supplied configuration.
    pub fn with_config(config: ChartConfig) -> Result<Self, SajuError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Bound the chart cache to `capacity` entries. Clears the cache.
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = ChartCache::with_capacity(capacity);
        self
    }

    /// Replace the ephemeris adapter. Clears the cache.
    pub fn with_sun(mut self, sun: impl SunLongitude + Send + Sync + 'static) -> Self {
        self.sun = Box::new(sun);
        self.cache.clear();
        self
    }

    pub fn with_lunar_converter(
        mut self,
        converter: impl LunarConverter + Send + Sync + 'static,
    ) -> Self {
        self.lunar = Some(Box::new(converter));
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Full chart for a civil birth moment, served from the cache when
    /// the same moment and gender were asked before.
    pub fn chart(&self, birth: &CivilTime, gender: Gender) -> Result<Chart, SajuError> {
        self.cache.get_or_try_insert((*birth, gender), || {
            debug!(birth = %birth, gender = %gender, "computing chart");
            saju_search::chart_for_birth(&*self.sun, birth, gender, &self.config)
                .map_err(SajuError::from)
        })
    }

    /// Full chart for a solar or lunar birth date and local time of day.
    pub fn chart_for_date(
        &self,
        date: &BirthDate,
        hour: u32,
        minute: u32,
        gender: Gender,
    ) -> Result<Chart, SajuError> {
        let birth = date.at(hour, minute, self.lunar.as_deref())?;
        self.chart(&birth, gender)
    }

    /// Raw four pillars without annotations or decade luck.
    pub fn pillars(&self, birth: &CivilTime) -> Result<ResolvedPillars, SajuError> {
        Ok(resolve_pillars(&*self.sun, birth, &self.config)?)
    }

    pub fn daewoon(&self, birth: &CivilTime, gender: Gender) -> Result<DaewoonTimeline, SajuError> {
        Ok(daewoon_for_birth(&*self.sun, birth, gender, &self.config)?)
    }

    /// Apparent solar longitude in degrees at a civil moment.
    pub fn sun_longitude(&self, at: &CivilTime) -> Result<f64, SajuError> {
        Ok(sun_longitude_for_civil(&*self.sun, at, &self.config)?)
    }

    pub fn next_solar_term(&self, after: &CivilTime) -> Result<SolarTermEvent, SajuError> {
        Ok(next_solar_term(&*self.sun, after, &self.config)?)
    }

    pub fn prev_solar_term(&self, before: &CivilTime) -> Result<SolarTermEvent, SajuError> {
        Ok(prev_solar_term(&*self.sun, before, &self.config)?)
    }

    /// Bundled 2026 report for the chart's day stem.
    pub fn report(&self, chart: &Chart, name: &str) -> Result<PersonalReport, SajuError> {
        ReportTable::bundled()?.personal_report(chart.day().pillar.stem, name)
    }
}
