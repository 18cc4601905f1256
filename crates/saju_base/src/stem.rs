//! The ten heavenly stems (cheongan).

use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

use crate::element::ElementPolarity;
use crate::tables::STEM_ATTRS;

/// Heavenly stem, 甲 (index 0) through 癸 (index 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Stem {
    Gap = 0,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cyclic order.
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_SYMBOLS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_NAMES: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_STEMS.get(i as usize).copied()
    }

    /// Stem for any integer position on the 10-cycle.
    pub fn from_cycle(n: i64) -> Self {
        ALL_STEMS[n.rem_euclid(10) as usize]
    }

    /// Stem for a hanja symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        STEM_SYMBOLS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_STEMS[i])
    }

    /// Hanja symbol.
    pub fn symbol(self) -> char {
        STEM_SYMBOLS[self as usize]
    }

    /// Romanized Korean name.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self as usize]
    }

    pub fn attrs(self) -> ElementPolarity {
        ElementPolarity::from_raw(STEM_ATTRS[self as usize])
    }

    /// Yang stems sit at even indices.
    pub const fn is_yang(self) -> bool {
        (self as u8) % 2 == 0
    }

    /// Step `n` positions along the cycle (negative steps go backward).
    pub fn offset(self, n: i64) -> Self {
        Self::from_cycle(self as i64 + n)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Some(*s));
        }
        assert_eq!(Stem::from_index(10), None);
    }

    #[test]
    fn cycle_wraps_both_ways() {
        assert_eq!(Stem::from_cycle(10), Stem::Gap);
        assert_eq!(Stem::from_cycle(-1), Stem::Gye);
        assert_eq!(Stem::Gap.offset(-1), Stem::Gye);
        assert_eq!(Stem::Gye.offset(1), Stem::Gap);
    }

    #[test]
    fn symbols_roundtrip() {
        for s in ALL_STEMS {
            assert_eq!(Stem::from_symbol(s.symbol()), Some(s));
        }
        assert_eq!(Stem::from_symbol('子'), None);
    }

    #[test]
    fn parity_matches_attribute_polarity() {
        for s in ALL_STEMS {
            assert_eq!(s.is_yang(), s.attrs().polarity.is_yang());
        }
    }
}
