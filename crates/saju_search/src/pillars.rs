//! Pillar resolver: civil birth moment to raw four pillars.

use saju_base::{
    FourPillars, SolarTerm, astro_year, day_pillar, hour_pillar, month_pillar,
    solar_term_from_longitude, year_pillar,
};
use saju_config::ChartConfig;
use saju_solar::SunLongitude;
use saju_time::CivilTime;
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::solar_term::sun_longitude_at;

/// Raw pillars plus the intermediate values they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedPillars {
    pub pillars: FourPillars,
    /// JD (UT) of the birth moment.
    pub jd_ut: f64,
    /// Apparent solar longitude at birth, in [0, 360).
    pub sun_longitude_deg: f64,
    /// Solar term the birth falls in.
    pub solar_term: SolarTerm,
    /// Year whose pillar the chart carries (differs from the civil year
    /// before Ipchun).
    pub astro_year: i32,
    /// Whole civil days from the configured epoch to the birth date.
    pub days_since_epoch: i64,
}

/// Derive the four raw pillars for a civil moment.
pub fn resolve_pillars<S>(
    sun: &S,
    birth: &CivilTime,
    config: &ChartConfig,
) -> Result<ResolvedPillars, SearchError>
where
    S: SunLongitude + ?Sized,
{
    birth.validate()?;
    config.validate()?;

    let jd_ut = birth.to_jd_ut(config.utc_offset_hours);
    let lon = sun_longitude_at(sun, jd_ut)?;
    let astro = astro_year(birth.year, birth.month, lon);
    let year = year_pillar(astro);
    let month = month_pillar(year.stem, lon);

    let days = birth.date().days_since(config.day_epoch);
    let day = day_pillar(days, config.day_offset);
    let hour = hour_pillar(day.stem, birth.minutes_of_day());

    debug!(
        birth = %birth,
        jd_ut,
        lon,
        astro_year = astro,
        days_since_epoch = days,
        "pillars resolved"
    );

    Ok(ResolvedPillars {
        pillars: FourPillars {
            year,
            month,
            day,
            hour,
        },
        jd_ut,
        sun_longitude_deg: lon,
        solar_term: solar_term_from_longitude(lon),
        astro_year: astro,
        days_since_epoch: days,
    })
}
