//! Static lookup tables for stems, branches and their derived relations.
//!
//! Stems are indexed 0..10 (甲..癸) and branches 0..12 (子..亥).
//! Attribute pairs are `(element, polarity)` with elements in
//! generating order (wood, fire, earth, metal, water) and polarity
//! 0 = yang, 1 = yin.

/// `(element, polarity)` per stem.
pub const STEM_ATTRS: [(u8, u8); 10] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (2, 0),
    (2, 1),
    (3, 0),
    (3, 1),
    (4, 0),
    (4, 1),
];

/// `(element, polarity)` per branch.
///
/// Branch polarity follows the principal hidden stem, not the raw index
/// parity: 子 is yin water, 亥 yang water, 巳 yang fire, 午 yin fire.
pub const BRANCH_ATTRS: [(u8, u8); 12] = [
    (4, 1),
    (2, 1),
    (0, 0),
    (0, 1),
    (2, 0),
    (1, 0),
    (1, 1),
    (2, 1),
    (3, 0),
    (3, 1),
    (2, 0),
    (4, 0),
];

/// Branch where the twelve-stage cycle begins (Jangsaeng) per day stem.
pub const STAGE_START: [u8; 10] = [11, 6, 2, 9, 2, 9, 5, 0, 8, 3];

/// Stem that opens the first astrological month, keyed by `year_stem % 5`.
pub const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];

/// Stem of the 子 hour, keyed by `day_stem % 5`.
pub const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// Spirit group (0..4) per day branch.
pub const SPIRIT_GROUP: [u8; 12] = [2, 3, 1, 0, 2, 3, 1, 0, 2, 3, 1, 0];

/// Romance (Dohwa) target branch per spirit group.
pub const ROMANCE_TARGET: [u8; 4] = [0, 3, 9, 6];

/// Travel (Yeokma) target branch per spirit group.
pub const TRAVEL_TARGET: [u8; 4] = [5, 8, 2, 11];

/// Canopy (Hwagae) target branch per spirit group.
pub const CANOPY_TARGET: [u8; 4] = [7, 10, 4, 1];

/// Noble-helper (Cheoneul) branches per day stem.
pub const NOBLE_HELPER: [[u8; 2]; 10] = [
    [1, 7],
    [0, 8],
    [11, 9],
    [11, 9],
    [1, 7],
    [0, 8],
    [1, 7],
    [2, 6],
    [5, 3],
    [5, 3],
];

/// `(stem, branch)` pairs tagged as the tiger ill-omen (Baekho).
pub const TIGER_ILL_OMEN: [(u8, u8); 7] = [(0, 4), (1, 7), (2, 10), (3, 1), (4, 4), (8, 10), (9, 1)];

/// `(stem, branch)` pairs tagged as the formidable clash (Goegang).
pub const FORMIDABLE_CLASH: [(u8, u8); 6] = [(4, 10), (6, 4), (6, 10), (8, 4), (8, 10), (4, 4)];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_polarity_alternates() {
        for (i, (_, pol)) in STEM_ATTRS.iter().enumerate() {
            assert_eq!(*pol as usize, i % 2);
        }
    }

    #[test]
    fn every_group_has_three_branches() {
        for g in 0..4u8 {
            assert_eq!(SPIRIT_GROUP.iter().filter(|&&x| x == g).count(), 3);
        }
    }

    #[test]
    fn group_targets_are_distinct() {
        for g in 0..4 {
            let t = [ROMANCE_TARGET[g], TRAVEL_TARGET[g], CANOPY_TARGET[g]];
            assert!(t[0] != t[1] && t[1] != t[2] && t[0] != t[2]);
        }
    }

    #[test]
    fn stage_starts_are_branches() {
        assert!(STAGE_START.iter().all(|&b| b < 12));
        assert!(NOBLE_HELPER.iter().flatten().all(|&b| b < 12));
    }
}
