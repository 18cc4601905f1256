//! Chart assembly: resolver, annotator and daewoon engine in one pass.

use saju_base::{
    AnnotatedPillar, AnnotatedPillars, DECADE_COUNT, DaewoonDirection, DecadeStep, Gender,
    PillarSlot, SolarTerm, VoidPair, annotate, daewoon_direction,
};
use saju_config::ChartConfig;
use saju_solar::SunLongitude;
use saju_time::CivilTime;
use serde::Serialize;
use tracing::debug;

use crate::daewoon::compute_daewoon;
use crate::error::SearchError;
use crate::pillars::resolve_pillars;
use crate::solar_term_types::SolarTermCrossing;

/// A complete four-pillars chart.
///
/// Serialized field order: annotated pillars, void pair, decade
/// direction and steps, then the astronomical context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub birth: CivilTime,
    pub gender: Gender,
    /// `[year, month, day, hour]`.
    pub pillars: [AnnotatedPillar; 4],
    pub void_pair: VoidPair,
    pub direction: DaewoonDirection,
    pub start_age: u32,
    pub decades: [DecadeStep; DECADE_COUNT],
    pub astro_year: i32,
    pub sun_longitude_deg: f64,
    pub solar_term: SolarTerm,
    pub crossing: SolarTermCrossing,
}

impl Chart {
    pub fn pillar(&self, slot: PillarSlot) -> &AnnotatedPillar {
        &self.pillars[slot as usize]
    }

    pub fn day(&self) -> &AnnotatedPillar {
        self.pillar(PillarSlot::Day)
    }

    /// Four-pillar label such as `己巳 丙子 丙寅 戊子`.
    pub fn label(&self) -> String {
        self.pillars
            .iter()
            .map(|p| p.pillar.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Compute the chart for a civil birth moment and gender.
///
/// Any failure is terminal: no partial chart is returned.
pub fn chart_for_birth<S>(
    sun: &S,
    birth: &CivilTime,
    gender: Gender,
    config: &ChartConfig,
) -> Result<Chart, SearchError>
where
    S: SunLongitude + ?Sized,
{
    let resolved = resolve_pillars(sun, birth, config)?;
    let AnnotatedPillars { pillars, void_pair } = annotate(&resolved.pillars);
    let direction = daewoon_direction(gender, resolved.pillars.year.stem);
    let timeline = compute_daewoon(sun, birth, resolved.pillars.month, direction, config)?;

    let chart = Chart {
        birth: *birth,
        gender,
        pillars,
        void_pair,
        direction,
        start_age: timeline.daewoon.start_age,
        decades: timeline.daewoon.steps,
        astro_year: resolved.astro_year,
        sun_longitude_deg: resolved.sun_longitude_deg,
        solar_term: resolved.solar_term,
        crossing: timeline.crossing,
    };
    debug!(birth = %birth, gender = %gender, chart = %chart.label(), "chart computed");
    Ok(chart)
}
