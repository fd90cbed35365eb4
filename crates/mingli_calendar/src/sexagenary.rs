//! Stem-branch pairs and the 60-combination sexagenary cycle.
//!
//! Stems cycle with period 10 and branches with period 12. Only pairs of
//! equal polarity occur, giving lcm(10, 12) = 60 combinations. Index 0 is
//! Jia-Zi (甲子).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Length of the combined cycle.
pub const SEXAGENARY_PERIOD: u8 = 60;

/// One heavenly stem paired with one earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    /// Pair a stem and branch. Returns `None` when their polarities differ,
    /// since such pairs never occur in the cycle.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.polarity() == branch.polarity() {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Pair at position `n` of the cycle, wrapping mod 60.
    pub const fn from_cycle_index(n: i64) -> Self {
        Self {
            stem: Stem::cyclic(n),
            branch: Branch::cyclic(n),
        }
    }

    /// Position in the cycle (0 = 甲子 .. 59 = 癸亥).
    ///
    /// Solves n ≡ stem (mod 10), n ≡ branch (mod 12): n = 6·stem − 5·branch (mod 60).
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(SEXAGENARY_PERIOD as i32) as u8
    }

    /// Two-glyph name, e.g. "甲子".
    pub fn name(self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Element of the stem.
    pub const fn stem_element(self) -> Element {
        self.stem.element()
    }

    /// Element of the branch.
    pub const fn branch_element(self) -> Element {
        self.branch.element()
    }

    /// The next pair in the cycle.
    pub fn succ(self) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + 1)
    }
}

impl std::fmt::Display for StemBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}
