//! Void pair (gongmang): the two branches left over when the day pillar's
//! decade of the sexagenary cycle pairs ten stems with twelve branches.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VoidPair {
    pub first: Branch,
    pub second: Branch,
}

impl VoidPair {
    pub fn contains(&self, branch: Branch) -> bool {
        self.first == branch || self.second == branch
    }
}

impl Display for VoidPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.first.symbol(), self.second.symbol())
    }
}

/// Void pair for a day pillar.
///
/// Depends only on `(day_branch - day_stem) mod 12`, the branch that the
/// 甲 stem of the same decade falls on.
pub fn void_pair(day_stem: Stem, day_branch: Branch) -> VoidPair {
    let start = i64::from(day_branch.index()) - i64::from(day_stem.index());
    VoidPair {
        first: Branch::from_cycle(start + 10),
        second: Branch::from_cycle(start + 11),
    }
}
