//! Special combinations: fixed (stem, branch) pairs carrying a named tag.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::pillar::Pillar;
use crate::tables::{FORMIDABLE_CLASH, TIGER_ILL_OMEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialCombination {
    /// Tiger ill-omen.
    Baekho,
    /// Formidable clash.
    Goegang,
}

impl SpecialCombination {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baekho => "Baekho",
            Self::Goegang => "Goegang",
        }
    }
}

/// Tags carried by one pillar, Baekho before Goegang. Empty renders as `-`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SpecialCombinations(Vec<SpecialCombination>);

impl SpecialCombinations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: SpecialCombination) -> bool {
        self.0.contains(&tag)
    }

    pub fn as_slice(&self) -> &[SpecialCombination] {
        &self.0
    }
}

impl Display for SpecialCombinations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<&str> = self.0.iter().map(|c| c.name()).collect();
        f.write_str(&names.join(" "))
    }
}

/// Special combinations matched by a pillar.
pub fn special_combinations(pillar: Pillar) -> SpecialCombinations {
    let key = pillar.indices();
    let mut tags = Vec::new();
    if TIGER_ILL_OMEN.contains(&key) {
        tags.push(SpecialCombination::Baekho);
    }
    if FORMIDABLE_CLASH.contains(&key) {
        tags.push(SpecialCombination::Goegang);
    }
    SpecialCombinations(tags)
}
