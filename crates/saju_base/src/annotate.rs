//! Chart annotation: enrich the four raw pillars with their relations to
//! the day pillar.

use serde::Serialize;

use crate::pillar::{ALL_SLOTS, FourPillars, Pillar, PillarSlot};
use crate::special::{SpecialCombinations, special_combinations};
use crate::spirit::{SpiritMarkers, spirit_markers};
use crate::ten_gods::{TenGod, TenGodLabel, ten_god_for_branch, ten_god_for_stem};
use crate::twelve_stage::{TwelveStage, twelve_stage};
use crate::void_pair::{VoidPair, void_pair};

/// One pillar with all of its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotatedPillar {
    pub slot: PillarSlot,
    pub pillar: Pillar,
    /// Relation of this pillar's stem to the day stem (`Anchor` on the day).
    pub ten_god: TenGodLabel,
    /// Relation of this pillar's branch to the day stem.
    pub branch_ten_god: TenGod,
    pub stage: TwelveStage,
    pub spirits: SpiritMarkers,
    pub specials: SpecialCombinations,
    /// Whether the branch falls in the chart's void pair.
    pub is_void: bool,
}

/// The four annotated pillars in chart order plus the void pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnnotatedPillars {
    pub pillars: [AnnotatedPillar; 4],
    pub void_pair: VoidPair,
}

impl AnnotatedPillars {
    pub fn get(&self, slot: PillarSlot) -> &AnnotatedPillar {
        &self.pillars[slot as usize]
    }

    pub fn day(&self) -> &AnnotatedPillar {
        self.get(PillarSlot::Day)
    }
}

/// Annotate raw pillars against their own day pillar.
pub fn annotate(pillars: &FourPillars) -> AnnotatedPillars {
    let day = pillars.day;
    let void = void_pair(day.stem, day.branch);
    let annotated = ALL_SLOTS.map(|slot| {
        let pillar = pillars.get(slot);
        let is_day = slot == PillarSlot::Day;
        AnnotatedPillar {
            slot,
            pillar,
            ten_god: if is_day {
                TenGodLabel::Anchor
            } else {
                TenGodLabel::Relation(ten_god_for_stem(day.stem, pillar.stem))
            },
            branch_ten_god: ten_god_for_branch(day.stem, pillar.branch),
            stage: twelve_stage(day.stem, pillar.branch),
            spirits: if is_day {
                SpiritMarkers::empty()
            } else {
                spirit_markers(day.stem, day.branch, pillar.branch)
            },
            specials: special_combinations(pillar),
            is_void: void.contains(pillar.branch),
        }
    });
    AnnotatedPillars {
        pillars: annotated,
        void_pair: void,
    }
}
