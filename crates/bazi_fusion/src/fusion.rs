//! Eastern/Western element vectors, harmony index and the fusion result.

use bazi_pillars::{FourPillarsChart, WuXing};
use serde::Serialize;

use crate::planets::Planets;
use crate::resonance::{Resonance, find_resonances};
use crate::vector::ElementVector;

/// Stem weights for (year, month, day, hour). The day stem is the Day Master.
pub const STEM_WEIGHTS: [f64; 4] = [1.0, 1.5, 2.0, 0.8];

/// Branch weights for (year, month, day, hour).
pub const BRANCH_WEIGHTS: [f64; 4] = [1.0, 1.5, 1.0, 0.8];

/// Weighted stem and fixed branch elements of the four pillars.
pub fn eastern_vector(chart: &FourPillarsChart) -> ElementVector {
    let mut raw = [0.0; 5];
    for ((pillar, stem_w), branch_w) in chart.pillars().iter().zip(STEM_WEIGHTS).zip(BRANCH_WEIGHTS) {
        raw[pillar.element().index() as usize] += stem_w;
        raw[pillar.branch_element().index() as usize] += branch_w;
    }
    ElementVector::normalize(raw)
}

/// Sum of body profiles over the supplied planets; uniform if none count.
pub fn western_vector(planets: &Planets) -> ElementVector {
    let mut raw = [0.0; 5];
    for (body, _) in planets.iter() {
        for (element, weight) in body.profile() {
            raw[element.index() as usize] += weight;
        }
    }
    ElementVector::normalize(raw)
}

/// `(cos_sim + 1) / 2`, clamped to [0, 1].
pub fn harmony_index(eastern: &ElementVector, western: &ElementVector) -> f64 {
    ((eastern.cosine_similarity(western) + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Banded reading of the harmony index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HarmonyLevel {
    VeryHigh,
    Good,
    Moderate,
    DynamicTension,
}

impl HarmonyLevel {
    /// Strict thresholds at 0.8, 0.6 and 0.4.
    pub fn from_index(index: f64) -> Self {
        if index > 0.8 {
            Self::VeryHigh
        } else if index > 0.6 {
            Self::Good
        } else if index > 0.4 {
            Self::Moderate
        } else {
            Self::DynamicTension
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "very high coherence",
            Self::Good => "good coherence",
            Self::Moderate => "moderate coherence",
            Self::DynamicTension => "dynamic tension",
        }
    }

    pub const fn german_label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Sehr hohe Kohärenz",
            Self::Good => "Gute Kohärenz",
            Self::Moderate => "Moderate Kohärenz",
            Self::DynamicTension => "Dynamische Spannung",
        }
    }
}

impl std::fmt::Display for HarmonyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementBalance {
    pub combined: ElementVector,
    pub eastern: ElementVector,
    pub western: ElementVector,
    pub dominant_element: WuXing,
    #[serde(rename = "dominantElementDE")]
    pub dominant_element_de: &'static str,
    pub deficient_element: WuXing,
    #[serde(rename = "deficientElementDE")]
    pub deficient_element_de: &'static str,
}

impl ElementBalance {
    /// Blend both sides unweighted and pick the extremes of the blend.
    pub fn new(eastern: ElementVector, western: ElementVector) -> Self {
        let combined = eastern.blend(&western);
        let dominant = combined.dominant();
        let deficient = combined.deficient();
        Self {
            combined,
            eastern,
            western,
            dominant_element: dominant,
            dominant_element_de: dominant.german_name(),
            deficient_element: deficient,
            deficient_element_de: deficient.german_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionResult {
    pub element_vector: ElementBalance,
    pub harmony_index: f64,
    #[serde(skip)]
    pub harmony_level: HarmonyLevel,
    pub harmony_interpretation: &'static str,
    #[serde(rename = "harmonyInterpretationDE")]
    pub harmony_interpretation_de: &'static str,
    pub resonances: Vec<Resonance>,
}

/// Fuse a Four Pillars chart with Western planet placements.
pub fn calculate_fusion(chart: &FourPillarsChart, planets: &Planets) -> FusionResult {
    let eastern = eastern_vector(chart);
    let western = western_vector(planets);
    let index = harmony_index(&eastern, &western);
    let level = HarmonyLevel::from_index(index);
    let resonances = find_resonances(chart, planets);

    tracing::trace!(
        chart = %chart,
        bodies = planets.len(),
        harmony = index,
        resonances = resonances.len(),
        "fusion computed"
    );

    FusionResult {
        element_vector: ElementBalance::new(eastern, western),
        harmony_index: index,
        harmony_level: level,
        harmony_interpretation: level.label(),
        harmony_interpretation_de: level.german_label(),
        resonances,
    }
}
