//! Decade-luck (daewoon) engine.
//!
//! The starting age comes from the time between birth and the adjacent
//! solar-term boundary in the direction of travel: forward to the next
//! boundary or backward to the previous one. The boundary is taken from
//! the raw hourly scan, not a refined instant.

use saju_base::{
    Daewoon, DaewoonDirection, Gender, Pillar, daewoon_direction, start_age_from_elapsed_days,
};
use saju_config::ChartConfig;
use saju_solar::SunLongitude;
use saju_time::CivilTime;
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::pillars::resolve_pillars;
use crate::solar_term::scan_solar_term_crossing;
use crate::solar_term_types::SolarTermCrossing;

/// Decade-luck timeline together with the boundary it was measured to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaewoonTimeline {
    #[serde(flatten)]
    pub daewoon: Daewoon,
    pub crossing: SolarTermCrossing,
}

/// Starting age and decade pillars for a birth whose month pillar and
/// direction are already known.
pub fn compute_daewoon<S>(
    sun: &S,
    birth: &CivilTime,
    month_pillar: Pillar,
    direction: DaewoonDirection,
    config: &ChartConfig,
) -> Result<DaewoonTimeline, SearchError>
where
    S: SunLongitude + ?Sized,
{
    birth.validate()?;
    config.validate()?;

    let jd_ut = birth.to_jd_ut(config.utc_offset_hours);
    let crossing = scan_solar_term_crossing(sun, jd_ut, direction.into(), &config.search)?;
    let start_age =
        start_age_from_elapsed_days(crossing.elapsed_days, config.daewoon.days_per_year);
    debug!(
        direction = direction.name(),
        elapsed_days = crossing.elapsed_days,
        start_age,
        "daewoon start age"
    );

    Ok(DaewoonTimeline {
        daewoon: Daewoon::new(month_pillar, direction, start_age),
        crossing,
    })
}

/// Full decade-luck computation from a birth moment and gender.
pub fn daewoon_for_birth<S>(
    sun: &S,
    birth: &CivilTime,
    gender: Gender,
    config: &ChartConfig,
) -> Result<DaewoonTimeline, SearchError>
where
    S: SunLongitude + ?Sized,
{
    let resolved = resolve_pillars(sun, birth, config)?;
    let direction = daewoon_direction(gender, resolved.pillars.year.stem);
    compute_daewoon(sun, birth, resolved.pillars.month, direction, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{SolarTerm, Stem};
    use saju_solar::AnalyticSun;

    #[test]
    fn new_year_1990_male_runs_backward() {
        // 己 year stem is yin: a male chart runs backward across Dongji (270°, 1989-12-22)
        let birth = CivilTime::from_ymd_hm(1990, 1, 1, 0, 0).unwrap();
        let t = daewoon_for_birth(&AnalyticSun, &birth, Gender::Male, &ChartConfig::default())
            .unwrap();
        assert_eq!(t.daewoon.direction, DaewoonDirection::Backward);
        assert_eq!(t.crossing.start_term, SolarTerm::Dongji);
        assert_eq!(t.crossing.end_term, SolarTerm::Daeseol);
        assert!(t.crossing.elapsed_days > 9.0 && t.crossing.elapsed_days < 10.5);
        assert_eq!(t.daewoon.start_age, 3);
        assert_eq!(t.daewoon.steps[0].pillar.to_string(), "乙亥");
    }

    #[test]
    fn new_year_1990_female_runs_forward() {
        let birth = CivilTime::from_ymd_hm(1990, 1, 1, 0, 0).unwrap();
        let t = daewoon_for_birth(&AnalyticSun, &birth, Gender::Female, &ChartConfig::default())
            .unwrap();
        assert_eq!(t.daewoon.direction, DaewoonDirection::Forward);
        assert_eq!(t.crossing.end_term, SolarTerm::Sohan);
        assert_eq!(t.daewoon.steps[0].pillar.to_string(), "丁丑");
        assert_eq!(t.daewoon.steps[7].age, t.daewoon.start_age + 70);
    }

    #[test]
    fn exhausted_search_is_surfaced() {
        let frozen = |_: f64| -> Result<f64, saju_solar::EphemerisError> { Ok(200.0) };
        let birth = CivilTime::from_ymd_hm(1990, 6, 1, 12, 0).unwrap();
        let err = compute_daewoon(
            &frozen,
            &birth,
            Pillar::new(Stem::Gap, saju_base::Branch::O),
            DaewoonDirection::Forward,
            &ChartConfig::default(),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::BoundarySearchExhausted { steps: 1080 });
    }
}
