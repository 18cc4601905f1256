//! Stem/branch pillars and the arithmetic that derives each of the four.
//!
//! Year and month pillars follow solar longitude, so a chart cast in
//! early February can belong to the previous astrological year. Day and
//! hour pillars count civil days from a fixed epoch.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::solar_term::YEAR_START_LONGITUDE;
use crate::stem::Stem;
use crate::tables::{HOUR_STEM_START, MONTH_STEM_START};
use crate::util::{normalize_360, sector_index};

/// Offset that aligns CE year 4 (甲子) with stem 0 / branch 0.
pub const YEAR_CYCLE_OFFSET: i32 = 4;

/// Month sectors are 30° wide and start at Ipchun (315°).
pub const MONTH_SECTOR_SPAN: f64 = 30.0;

/// Minutes after midnight at which the 子 hour begins (23:30).
pub const LATE_JA_START_MIN: u32 = 23 * 60 + 30;

/// Minutes after midnight at which the 丑 hour begins (01:30).
pub const EARLY_JA_END_MIN: u32 = 60 + 30;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `n` of the sexagenary cycle (0 = 甲子).
    pub fn from_sexagenary(n: i64) -> Self {
        Self {
            stem: Stem::from_cycle(n),
            branch: Branch::from_cycle(n),
        }
    }

    /// Position 0..60 in the sexagenary cycle.
    pub fn sexagenary_index(self) -> u8 {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        // n ≡ s (mod 10), n ≡ b (mod 12); solvable only when parities agree
        ((6 * s - 5 * b).rem_euclid(60)) as u8
    }

    /// Step both components `n` positions along their cycles.
    pub fn offset(self, n: i64) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    /// Raw `(stem, branch)` indices.
    pub fn indices(self) -> (u8, u8) {
        (self.stem.index(), self.branch.index())
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

/// Which of the four chart slots a pillar occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum PillarSlot {
    Year = 0,
    Month = 1,
    Day = 2,
    Hour = 3,
}

pub const ALL_SLOTS: [PillarSlot; 4] = [
    PillarSlot::Year,
    PillarSlot::Month,
    PillarSlot::Day,
    PillarSlot::Hour,
];

impl PillarSlot {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The raw four pillars in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars as `[year, month, day, hour]`.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn get(&self, slot: PillarSlot) -> Pillar {
        match slot {
            PillarSlot::Year => self.year,
            PillarSlot::Month => self.month,
            PillarSlot::Day => self.day,
            PillarSlot::Hour => self.hour,
        }
    }
}

// ---------------------------------------------------------------------------
// Year
// ---------------------------------------------------------------------------

/// Astrological year for a civil year/month and solar longitude.
///
/// January always belongs to the previous year. February does too until
/// the sun reaches 315° (Ipchun).
pub fn astro_year(civil_year: i32, civil_month: u32, sun_lon_deg: f64) -> i32 {
    match civil_month {
        1 => civil_year - 1,
        2 if normalize_360(sun_lon_deg) < YEAR_START_LONGITUDE => civil_year - 1,
        _ => civil_year,
    }
}

/// Year pillar of an astrological year.
pub fn year_pillar(astro_year: i32) -> Pillar {
    let n = i64::from(astro_year) - i64::from(YEAR_CYCLE_OFFSET);
    Pillar::from_sexagenary(n)
}

// ---------------------------------------------------------------------------
// Month
// ---------------------------------------------------------------------------

/// Month sector 0..12 for a solar longitude; sector 0 begins at 315°.
pub fn month_sector(sun_lon_deg: f64) -> u8 {
    sector_index(sun_lon_deg, YEAR_START_LONGITUDE, MONTH_SECTOR_SPAN, 12)
}

/// Month pillar from the year stem and solar longitude.
pub fn month_pillar(year_stem: Stem, sun_lon_deg: f64) -> Pillar {
    let sector = month_sector(sun_lon_deg);
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize];
    Pillar {
        stem: Stem::from_cycle(i64::from(start) + i64::from(sector)),
        branch: Branch::from_cycle(i64::from(sector) + 2),
    }
}

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

/// Day pillar from whole days since the epoch and the calibration offset.
pub fn day_pillar(days_since_epoch: i64, day_offset: i64) -> Pillar {
    Pillar::from_sexagenary(days_since_epoch + day_offset)
}

// ---------------------------------------------------------------------------
// Hour
// ---------------------------------------------------------------------------

/// Hour branch for minutes after local midnight.
///
/// Each branch spans two hours starting 30 minutes before its nominal
/// even hour: 子 covers 23:30–01:29, 丑 01:30–03:29, and so on.
pub fn hour_branch(minutes_of_day: u32) -> Branch {
    if minutes_of_day >= LATE_JA_START_MIN || minutes_of_day < EARLY_JA_END_MIN {
        Branch::Ja
    } else {
        Branch::from_cycle(i64::from((minutes_of_day - EARLY_JA_END_MIN) / 120 + 1))
    }
}

/// Day stem used to derive the hour stem.
///
/// From 23:30 the 子 hour already belongs to the next day, so its stem
/// advances by one while the day pillar itself is unchanged.
pub fn effective_day_stem(day_stem: Stem, minutes_of_day: u32) -> Stem {
    if minutes_of_day >= LATE_JA_START_MIN {
        day_stem.offset(1)
    } else {
        day_stem
    }
}

/// Hour pillar from the day stem and minutes after local midnight.
pub fn hour_pillar(day_stem: Stem, minutes_of_day: u32) -> Pillar {
    let branch = hour_branch(minutes_of_day);
    let effective = effective_day_stem(day_stem, minutes_of_day);
    let start = HOUR_STEM_START[(effective.index() % 5) as usize];
    Pillar {
        stem: Stem::from_cycle(i64::from(start) + i64::from(branch.index())),
        branch,
    }
}
