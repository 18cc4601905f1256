//! The twelve earthly branches (jiji).

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::ElementPolarity;
use crate::tables::BRANCH_ATTRS;

/// Earthly branch, 子 (index 0) through 亥 (index 11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Branch {
    Ja = 0,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cyclic order.
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_SYMBOLS: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_NAMES: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_BRANCHES.get(i as usize).copied()
    }

    /// Branch for any integer position on the 12-cycle.
    pub fn from_cycle(n: i64) -> Self {
        ALL_BRANCHES[n.rem_euclid(12) as usize]
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        BRANCH_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Hanja symbol.
    pub fn symbol(self) -> char {
        BRANCH_SYMBOLS[self as usize]
    }

    /// Romanized Korean name.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self as usize]
    }

    /// Element and polarity of the principal hidden stem.
    pub fn attrs(self) -> ElementPolarity {
        ElementPolarity::from_raw(BRANCH_ATTRS[self as usize])
    }

    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self as i64 + n)
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, Polarity};

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn cycle_wraps() {
        assert_eq!(Branch::from_cycle(12), Branch::Ja);
        assert_eq!(Branch::from_cycle(-1), Branch::Hae);
        assert_eq!(Branch::Hae.offset(2), Branch::Chuk);
    }

    #[test]
    fn hidden_stem_polarity_differs_from_index_parity() {
        assert_eq!(Branch::Ja.attrs().element, Element::Water);
        assert_eq!(Branch::Ja.attrs().polarity, Polarity::Yin);
        assert_eq!(Branch::Hae.attrs().polarity, Polarity::Yang);
        assert_eq!(Branch::Sa.attrs().polarity, Polarity::Yang);
        assert_eq!(Branch::O.attrs().polarity, Polarity::Yin);
    }

    #[test]
    fn symbols_roundtrip() {
        for b in ALL_BRANCHES {
            assert_eq!(Branch::from_symbol(b.symbol()), Some(b));
        }
    }
}
