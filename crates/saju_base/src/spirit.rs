//! Spirit markers (sinsal) earned by a pillar's branch.
//!
//! Romance, travel and canopy are looked up through the day branch's
//! group; the noble helper is keyed by the day stem alone.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;
use crate::tables::{CANOPY_TARGET, NOBLE_HELPER, ROMANCE_TARGET, SPIRIT_GROUP, TRAVEL_TARGET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpiritMarker {
    /// Romance (peach blossom).
    Dohwa,
    /// Travel (post horse).
    Yeokma,
    /// Canopy (art and solitude).
    Hwagae,
    /// Noble helper.
    Cheoneul,
}

impl SpiritMarker {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dohwa => "Dohwa",
            Self::Yeokma => "Yeokma",
            Self::Hwagae => "Hwagae",
            Self::Cheoneul => "Cheoneul",
        }
    }
}

/// Ordered marker set of one pillar. Empty renders as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SpiritMarkers(Vec<SpiritMarker>);

impl SpiritMarkers {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, marker: SpiritMarker) -> bool {
        self.0.contains(&marker)
    }

    pub fn as_slice(&self) -> &[SpiritMarker] {
        &self.0
    }
}

impl Display for SpiritMarkers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        for (i, m) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(m.name())?;
        }
        Ok(())
    }
}

/// Spirit-group index (0..4) of a day branch.
pub fn spirit_group(day_branch: Branch) -> u8 {
    SPIRIT_GROUP[day_branch.index() as usize]
}

/// Markers earned by `target` under the given day pillar, in the fixed
/// order romance, travel, canopy, noble helper.
pub fn spirit_markers(day_stem: Stem, day_branch: Branch, target: Branch) -> SpiritMarkers {
    let group = spirit_group(day_branch) as usize;
    let t = target.index();
    let mut markers = Vec::new();
    if t == ROMANCE_TARGET[group] {
        markers.push(SpiritMarker::Dohwa);
    }
    if t == TRAVEL_TARGET[group] {
        markers.push(SpiritMarker::Yeokma);
    }
    if t == CANOPY_TARGET[group] {
        markers.push(SpiritMarker::Hwagae);
    }
    if NOBLE_HELPER[day_stem.index() as usize].contains(&t) {
        markers.push(SpiritMarker::Cheoneul);
    }
    SpiritMarkers(markers)
}
