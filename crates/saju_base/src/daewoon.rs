//! Decade-luck (daewoon) arithmetic: direction, starting age and the
//! sequence of decade pillars stepped from the month pillar.
//!
//! The boundary search that supplies the elapsed days lives in the
//! search crate; everything here is pure.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pillar::Pillar;
use crate::stem::Stem;

/// Number of decade windows in a daewoon sequence.
pub const DECADE_COUNT: usize = 8;

/// Years covered by one decade window.
pub const DECADE_YEARS: u32 = 10;

/// Default elapsed days counted as one year of starting age.
pub const DEFAULT_DAYS_PER_YEAR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            other => Err(format!("unknown gender '{other}' (expected male or female)")),
        }
    }
}

/// Direction the decade pillars (and the boundary search) move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DaewoonDirection {
    Forward,
    Backward,
}

impl DaewoonDirection {
    /// +1 for forward, −1 for backward.
    pub const fn sign(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Forward for a male with a yang year stem or a female with a yin one.
pub fn daewoon_direction(gender: Gender, year_stem: Stem) -> DaewoonDirection {
    match (gender, year_stem.is_yang()) {
        (Gender::Male, true) | (Gender::Female, false) => DaewoonDirection::Forward,
        _ => DaewoonDirection::Backward,
    }
}

/// Starting age from the days between birth and the adjacent term.
///
/// `floor(days / days_per_year)`, bumped by one only when the remainder
/// strictly exceeds `days_per_year - 1`, and never below 1.
pub fn start_age_from_elapsed_days(elapsed_days: f64, days_per_year: f64) -> u32 {
    let days = elapsed_days.abs();
    let mut age = (days / days_per_year).floor() as u32;
    let remainder = days % days_per_year;
    if remainder > days_per_year - 1.0 {
        age += 1;
    }
    age.max(1)
}

/// One ten-year window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecadeStep {
    /// Age at which the window opens.
    pub age: u32,
    pub pillar: Pillar,
}

/// The decade windows following `month_pillar` in `direction`.
pub fn decade_steps(
    month_pillar: Pillar,
    direction: DaewoonDirection,
    start_age: u32,
) -> [DecadeStep; DECADE_COUNT] {
    let mut steps = [DecadeStep {
        age: start_age,
        pillar: month_pillar,
    }; DECADE_COUNT];
    for (i, step) in steps.iter_mut().enumerate() {
        let n = i as i64 + 1;
        step.age = start_age + i as u32 * DECADE_YEARS;
        step.pillar = month_pillar.offset(n * direction.sign());
    }
    steps
}

/// Complete decade-luck timeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Daewoon {
    pub direction: DaewoonDirection,
    pub start_age: u32,
    pub steps: [DecadeStep; DECADE_COUNT],
}

impl Daewoon {
    pub fn new(month_pillar: Pillar, direction: DaewoonDirection, start_age: u32) -> Self {
        Self {
            direction,
            start_age,
            steps: decade_steps(month_pillar, direction, start_age),
        }
    }
}
