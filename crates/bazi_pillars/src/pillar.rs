//! A single Stem-Branch pillar of the 60-term sexagenary cycle.

use serde::Serialize;

use crate::element::{Polarity, WuXing};
use crate::ganzhi::{Branch, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: i64 = 60;

/// Cycle index (0 = Jia-Zi) of a stem/branch index pair with equal parity.
///
/// Solves `x ≡ stem (mod 10)`, `x ≡ branch (mod 12)`.
pub const fn cycle_index(stem_index: i64, branch_index: i64) -> i64 {
    (6 * stem_index - 5 * branch_index).rem_euclid(CYCLE_LEN)
}

/// A Stem-Branch pair. Only the 60 same-parity combinations exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "PillarRecord")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pillar at position `index` of the cycle; any integer wraps modulo 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        let idx = index.rem_euclid(CYCLE_LEN) as usize;
        Self {
            stem: Stem::from_index(idx % 10),
            branch: Branch::from_index(idx % 12),
        }
    }

    /// Pillar from a stem and branch, or `None` when their parities differ.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 != branch.index() % 2 {
            return None;
        }
        Some(Self { stem, branch })
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the cycle (0 = Jia-Zi, 59 = Gui-Hai).
    pub const fn cycle_index(self) -> u8 {
        cycle_index(self.stem.index() as i64, self.branch.index() as i64) as u8
    }

    /// Element of the pillar, taken from its stem.
    pub const fn element(self) -> WuXing {
        self.stem.element()
    }

    /// Fixed element of the branch.
    pub const fn branch_element(self) -> WuXing {
        self.branch.element()
    }

    pub const fn polarity(self) -> Polarity {
        self.stem.polarity()
    }

    /// Two-ideograph form, e.g. "甲子".
    pub fn cjk(self) -> String {
        format!("{}{}", self.stem.cjk(), self.branch.cjk())
    }

    /// Romanized form, e.g. "Jia-Zi".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} {}{}",
            self.stem.name(),
            self.branch.name(),
            self.stem.cjk(),
            self.branch.cjk()
        )
    }
}

/// Serialized shape of a [`Pillar`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarRecord {
    pub stem: &'static str,
    #[serde(rename = "stemCJK")]
    pub stem_cjk: &'static str,
    pub branch: &'static str,
    #[serde(rename = "branchCJK")]
    pub branch_cjk: &'static str,
    pub element: WuXing,
    pub branch_element: WuXing,
    pub polarity: Polarity,
    pub animal: &'static str,
    #[serde(rename = "animalDE")]
    pub animal_de: &'static str,
    pub stem_index: u8,
    pub branch_index: u8,
}

impl From<Pillar> for PillarRecord {
    fn from(p: Pillar) -> Self {
        let animal = p.branch.animal();
        Self {
            stem: p.stem.name(),
            stem_cjk: p.stem.cjk(),
            branch: p.branch.name(),
            branch_cjk: p.branch.cjk(),
            element: p.element(),
            branch_element: p.branch_element(),
            polarity: p.polarity(),
            animal: animal.name(),
            animal_de: animal.german_name(),
            stem_index: p.stem.index(),
            branch_index: p.branch.index(),
        }
    }
}
