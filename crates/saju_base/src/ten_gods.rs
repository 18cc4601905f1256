//! Ten-gods (sipsin) relation between the day stem and another stem or branch.
//!
//! The relation depends on the element cycle distance from the day stem
//! (same, produced, controlled, controlling, producing) and on whether the
//! polarities match.

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::element::ElementPolarity;
use crate::stem::Stem;

/// The ten relations, ordered `element_delta * 2 + polarity_differs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TenGod {
    /// Same element, same polarity (peer).
    Bigyeon = 0,
    /// Same element, opposite polarity (rival peer).
    Geopjae,
    /// Element I produce, same polarity (output).
    Siksin,
    /// Element I produce, opposite polarity.
    Sanggwan,
    /// Element I control, same polarity (wealth).
    Pyeonjae,
    /// Element I control, opposite polarity.
    Jeongjae,
    /// Element that controls me, same polarity (authority).
    Pyeongwan,
    /// Element that controls me, opposite polarity.
    Jeonggwan,
    /// Element that produces me, same polarity (resource).
    Pyeonin,
    /// Element that produces me, opposite polarity.
    Jeongin,
}

pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

const TEN_GOD_NAMES: [&str; 10] = [
    "Bigyeon",
    "Geopjae",
    "Siksin",
    "Sanggwan",
    "Pyeonjae",
    "Jeongjae",
    "Pyeongwan",
    "Jeonggwan",
    "Pyeonin",
    "Jeongin",
];

impl TenGod {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        TEN_GOD_NAMES[self as usize]
    }
}

/// Ten-gods field of an annotated pillar.
///
/// The day pillar is the reference point of the chart and is always
/// `Anchor`; every other pillar carries a computed relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGodLabel {
    Anchor,
    Relation(TenGod),
}

impl TenGodLabel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Anchor => "Anchor",
            Self::Relation(g) => g.name(),
        }
    }
}

impl Display for TenGodLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TenGodLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Relation of `target` attributes as seen from `me`.
pub fn ten_god_relation(me: ElementPolarity, target: ElementPolarity) -> TenGod {
    let delta = (target.element.index() + 5 - me.element.index()) % 5;
    let differs = u8::from(me.polarity != target.polarity);
    ALL_TEN_GODS[(delta * 2 + differs) as usize]
}

/// Relation of another stem to the day stem.
pub fn ten_god_for_stem(day_stem: Stem, target: Stem) -> TenGod {
    ten_god_relation(day_stem.attrs(), target.attrs())
}

/// Relation of a branch (via its hidden-stem attributes) to the day stem.
pub fn ten_god_for_branch(day_stem: Stem, target: Branch) -> TenGod {
    ten_god_relation(day_stem.attrs(), target.attrs())
}
