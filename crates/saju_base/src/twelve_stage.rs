//! Twelve life stages (sibi unseong) of a branch relative to the day stem.

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;
use crate::tables::STAGE_START;

/// Life-stage cycle, starting at Jangsaeng (birth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum TwelveStage {
    Jangsaeng = 0,
    Mogyok,
    Gwandae,
    Geollok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mogyok,
    TwelveStage::Gwandae,
    TwelveStage::Geollok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

const TWELVE_STAGE_NAMES: [&str; 12] = [
    "Jangsaeng", "Mogyok", "Gwandae", "Geollok", "Jewang", "Soe", "Byeong", "Sa", "Myo", "Jeol",
    "Tae", "Yang",
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        TWELVE_STAGE_NAMES[self as usize]
    }
}

/// Stage of `branch` under `day_stem`.
///
/// Yang stems walk the branches forward from their start; yin stems walk
/// them backward.
pub fn twelve_stage(day_stem: Stem, branch: Branch) -> TwelveStage {
    let start = i64::from(STAGE_START[day_stem.index() as usize]);
    let b = i64::from(branch.index());
    let offset = if day_stem.is_yang() {
        (b - start).rem_euclid(12)
    } else {
        (start - b).rem_euclid(12)
    };
    ALL_TWELVE_STAGES[offset as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn gap_is_born_in_hae_and_peaks_in_myo() {
        assert_eq!(twelve_stage(Stem::Gap, Branch::Hae), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Gap, Branch::In), TwelveStage::Geollok);
        assert_eq!(twelve_stage(Stem::Gap, Branch::Myo), TwelveStage::Jewang);
        assert_eq!(twelve_stage(Stem::Gap, Branch::O), TwelveStage::Sa);
    }

    #[test]
    fn eul_walks_backward_from_o() {
        assert_eq!(twelve_stage(Stem::Eul, Branch::O), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Sa), TwelveStage::Mogyok);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Myo), TwelveStage::Geollok);
    }

    #[test]
    fn each_stem_visits_every_stage_once() {
        for s in ALL_STEMS {
            let mut seen = [false; 12];
            for b in ALL_BRANCHES {
                seen[twelve_stage(s, b).index() as usize] = true;
            }
            assert!(seen.iter().all(|&x| x), "stem {s:?}");
        }
    }
}
