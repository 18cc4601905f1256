//! Four-pillars building blocks: stem and branch tables, pillar
//! arithmetic, chart annotations and decade-luck arithmetic.
//!
//! This crate provides:
//! - The 10 stems and 12 branches with their element/polarity attributes
//! - Year, month, day and hour pillar derivation from already-known inputs
//!   (solar longitude, day count, minutes after midnight)
//! - Ten-gods, twelve-stage, void-pair, spirit and special-combination
//!   annotations
//! - Daewoon direction, starting age and decade sequence
//!
//! Nothing here queries an ephemeris; see `saju_search` for the pipeline
//! that feeds solar longitudes into these functions.

pub mod annotate;
pub mod branch;
pub mod daewoon;
pub mod element;
pub mod pillar;
pub mod solar_term;
pub mod special;
pub mod spirit;
pub mod stem;
pub mod tables;
pub mod ten_gods;
pub mod twelve_stage;
pub mod util;
pub mod void_pair;

pub use annotate::{AnnotatedPillar, AnnotatedPillars, annotate};
pub use branch::{ALL_BRANCHES, Branch};
pub use daewoon::{
    DECADE_COUNT, DECADE_YEARS, DEFAULT_DAYS_PER_YEAR, Daewoon, DaewoonDirection, DecadeStep,
    Gender, daewoon_direction, decade_steps, start_age_from_elapsed_days,
};
pub use element::{ALL_ELEMENTS, Element, ElementPolarity, Polarity};
pub use pillar::{
    ALL_SLOTS, FourPillars, Pillar, PillarSlot, astro_year, day_pillar, effective_day_stem,
    hour_branch, hour_pillar, month_pillar, month_sector, year_pillar,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, SOLAR_TERM_SPAN, SolarTerm, YEAR_START_LONGITUDE, solar_term_from_longitude,
    solar_term_index,
};
pub use special::{SpecialCombination, SpecialCombinations, special_combinations};
pub use spirit::{SpiritMarker, SpiritMarkers, spirit_group, spirit_markers};
pub use stem::{ALL_STEMS, Stem};
pub use ten_gods::{ALL_TEN_GODS, TenGod, TenGodLabel, ten_god_for_branch, ten_god_for_stem};
pub use twelve_stage::{ALL_TWELVE_STAGES, TwelveStage, twelve_stage};
pub use util::normalize_360;
pub use void_pair::{VoidPair, void_pair};
