//! Solar-term boundary search.
//!
//! A fixed-stride scan steps the query time until the sun's 15° sector
//! index changes. The daewoon engine uses the raw scan result; the
//! `next_solar_term` / `prev_solar_term` entry points additionally bisect
//! the bracketing stride down to sub-second precision.

use saju_base::{ALL_SOLAR_TERMS, SolarTerm, solar_term_from_longitude, solar_term_index};
use saju_config::{ChartConfig, SearchConfig};
use saju_solar::{SunLongitude, normalize_360};
use saju_time::CivilTime;
use tracing::{debug, trace, warn};

use crate::error::SearchError;
use crate::solar_term_types::{SearchDirection, SolarTermCrossing, SolarTermEvent};

/// Bisection stops once the bracket is narrower than this (≈ 0.1 s).
const BISECTION_CONVERGENCE_DAYS: f64 = 1e-6;

/// Bisection iteration cap; 1 h shrinks below the convergence width in ~32.
const BISECTION_MAX_ITER: u32 = 60;

/// Apparent solar longitude in [0, 360) at a JD (UT).
pub fn sun_longitude_at<S>(sun: &S, jd_ut: f64) -> Result<f64, SearchError>
where
    S: SunLongitude + ?Sized,
{
    Ok(normalize_360(sun.sun_longitude_deg(jd_ut)?))
}

/// Apparent solar longitude at a civil moment in the configured zone.
pub fn sun_longitude_for_civil<S>(
    sun: &S,
    civil: &CivilTime,
    config: &ChartConfig,
) -> Result<f64, SearchError>
where
    S: SunLongitude + ?Sized,
{
    sun_longitude_at(sun, civil.to_jd_ut(config.utc_offset_hours))
}

/// Step from `jd_start` until the 15° sector changes.
///
/// Sample `i` (1-based) is taken at `jd_start ± i * step_hours`. Fails
/// with `BoundarySearchExhausted` if `max_steps` samples all stay in the
/// starting sector.
pub fn scan_solar_term_crossing<S>(
    sun: &S,
    jd_start: f64,
    direction: SearchDirection,
    search: &SearchConfig,
) -> Result<SolarTermCrossing, SearchError>
where
    S: SunLongitude + ?Sized,
{
    search.validate()?;
    let start_idx = solar_term_index(sun_longitude_at(sun, jd_start)?);
    let stride_days = direction.sign() * search.step_hours / 24.0;

    for step in 1..=search.max_steps {
        let jd = jd_start + f64::from(step) * stride_days;
        let lon = sun_longitude_at(sun, jd)?;
        let idx = solar_term_index(lon);
        trace!(step, jd, lon, idx, "solar-term scan");
        if idx != start_idx {
            let crossing = SolarTermCrossing {
                direction,
                start_jd_ut: jd_start,
                jd_ut: jd,
                steps: step,
                start_term: term_at(start_idx),
                end_term: term_at(idx),
                elapsed_days: (jd - jd_start).abs(),
            };
            debug!(
                steps = step,
                elapsed_days = crossing.elapsed_days,
                from = crossing.start_term.name(),
                to = crossing.end_term.name(),
                "solar-term boundary found"
            );
            return Ok(crossing);
        }
    }

    warn!(
        jd_start,
        max_steps = search.max_steps,
        "solar-term search exhausted without a sector change"
    );
    Err(SearchError::BoundarySearchExhausted {
        steps: search.max_steps,
    })
}

/// Next solar-term boundary strictly after `civil`.
pub fn next_solar_term<S>(
    sun: &S,
    civil: &CivilTime,
    config: &ChartConfig,
) -> Result<SolarTermEvent, SearchError>
where
    S: SunLongitude + ?Sized,
{
    find_solar_term(sun, civil, SearchDirection::Forward, config)
}

/// Most recent solar-term boundary at or before `civil`.
pub fn prev_solar_term<S>(
    sun: &S,
    civil: &CivilTime,
    config: &ChartConfig,
) -> Result<SolarTermEvent, SearchError>
where
    S: SunLongitude + ?Sized,
{
    find_solar_term(sun, civil, SearchDirection::Backward, config)
}

fn find_solar_term<S>(
    sun: &S,
    civil: &CivilTime,
    direction: SearchDirection,
    config: &ChartConfig,
) -> Result<SolarTermEvent, SearchError>
where
    S: SunLongitude + ?Sized,
{
    config.validate()?;
    let jd_start = civil.to_jd_ut(config.utc_offset_hours);
    let crossing = scan_solar_term_crossing(sun, jd_start, direction, &config.search)?;

    // The last sample on the starting side brackets the boundary with the crossing sample.
    let stride_days = search_stride_days(&config.search);
    let (early, late) = match direction {
        SearchDirection::Forward => (crossing.jd_ut - stride_days, crossing.jd_ut),
        SearchDirection::Backward => (crossing.jd_ut, crossing.jd_ut + stride_days),
    };
    let jd = bisect_boundary(sun, early, late)?;
    let lon = sun_longitude_at(sun, jd)?;
    let event = SolarTermEvent {
        term: solar_term_from_longitude(lon),
        jd_ut: jd,
        civil: CivilTime::from_jd_ut(jd, config.utc_offset_hours)?,
        sun_longitude_deg: lon,
    };
    debug!(term = event.term.name(), civil = %event.civil, "solar term refined");
    Ok(event)
}

fn search_stride_days(search: &SearchConfig) -> f64 {
    search.step_hours / 24.0
}

/// Narrow `[early, late]`, whose endpoints lie in different sectors, to
/// the first instant of the later sector.
fn bisect_boundary<S>(sun: &S, mut early: f64, mut late: f64) -> Result<f64, SearchError>
where
    S: SunLongitude + ?Sized,
{
    let early_idx = solar_term_index(sun_longitude_at(sun, early)?);
    for _ in 0..BISECTION_MAX_ITER {
        if late - early < BISECTION_CONVERGENCE_DAYS {
            break;
        }
        let mid = 0.5 * (early + late);
        if solar_term_index(sun_longitude_at(sun, mid)?) == early_idx {
            early = mid;
        } else {
            late = mid;
        }
    }
    Ok(late)
}

fn term_at(idx: u8) -> SolarTerm {
    ALL_SOLAR_TERMS[usize::from(idx.min(23))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_solar::{AnalyticSun, EphemerisError};

    /// Sun moving a uniform 1° per day, 0° at JD 2_451_545.0.
    fn linear_sun(jd: f64) -> Result<f64, EphemerisError> {
        Ok(normalize_360(jd - 2_451_545.0))
    }

    #[test]
    fn tiny_negative_reading_wraps_to_zero() {
        let sun = |_jd: f64| -> Result<f64, EphemerisError> { Ok(-1e-20) };
        let lon = sun_longitude_at(&sun, 2_451_545.0).unwrap();
        assert_eq!(lon, 0.0);
        assert_eq!(solar_term_index(lon), 0);
        assert_eq!(saju_base::month_sector(lon), 1);
    }

    #[test]
    fn linear_forward_crossing() {
        // start at 14.4°: the 15° boundary is 14.4 h ahead
        let c = scan_solar_term_crossing(
            &linear_sun,
            2_451_545.0 + 14.4,
            SearchDirection::Forward,
            &SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(c.steps, 15);
        assert!((c.elapsed_days - 0.625).abs() < 1e-9);
        assert_eq!(c.start_term, SolarTerm::Chunbun);
        assert_eq!(c.end_term, SolarTerm::Cheongmyeong);
    }

    #[test]
    fn linear_backward_crossing() {
        // start at 0.3°: the 0° boundary is 7.2 h behind, so the first
        // sample in the previous sector is 8 h back
        let c = scan_solar_term_crossing(
            &linear_sun,
            2_451_545.0 + 0.3,
            SearchDirection::Backward,
            &SearchConfig::default(),
        )
        .unwrap();
        assert_eq!(c.steps, 8);
        assert_eq!(c.end_term.index(), 23);
    }

    #[test]
    fn frozen_sun_exhausts() {
        let frozen = |_: f64| -> Result<f64, EphemerisError> { Ok(100.0) };
        let err = scan_solar_term_crossing(
            &frozen,
            2_451_545.0,
            SearchDirection::Forward,
            &SearchConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::BoundarySearchExhausted { steps: 1080 });
    }

    #[test]
    fn adapter_failure_propagates() {
        let broken =
            |_: f64| -> Result<f64, EphemerisError> { Err(EphemerisError::Unavailable("down".into())) };
        let err = scan_solar_term_crossing(
            &broken,
            2_451_545.0,
            SearchDirection::Forward,
            &SearchConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SearchError::Ephemeris(EphemerisError::Unavailable(_))));
    }

    #[test]
    fn bisection_hits_linear_boundary() {
        let jd = bisect_boundary(&linear_sun, 2_451_545.0 + 29.9, 2_451_545.0 + 30.1).unwrap();
        assert!((jd - (2_451_545.0 + 30.0)).abs() < 1e-5);
    }

    #[test]
    fn next_term_after_new_year_2024_is_sohan() {
        let start = CivilTime::from_ymd_hm(2024, 1, 1, 0, 0).unwrap();
        let e = next_solar_term(&AnalyticSun, &start, &ChartConfig::default()).unwrap();
        assert_eq!(e.term, SolarTerm::Sohan);
        assert_eq!((e.civil.year, e.civil.month, e.civil.day), (2024, 1, 6));
        assert!((e.sun_longitude_deg - 285.0).abs() < 1e-3);
    }

    #[test]
    fn prev_term_before_new_year_2024_is_dongji() {
        let start = CivilTime::from_ymd_hm(2024, 1, 1, 0, 0).unwrap();
        let e = prev_solar_term(&AnalyticSun, &start, &ChartConfig::default()).unwrap();
        assert_eq!(e.term, SolarTerm::Dongji);
        assert_eq!((e.civil.year, e.civil.month, e.civil.day), (2023, 12, 22));
    }
}
