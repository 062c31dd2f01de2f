//! Five-element vectors in (Wood, Fire, Earth, Metal, Water) order.

use bazi_pillars::{ALL_WU_XING, WuXing};
use serde::Serialize;

/// Uniform share returned when a vector has nothing to normalize.
pub const UNIFORM_SHARE: f64 = 0.2;

/// A normalized element distribution: non-negative, sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ElementVector([f64; 5]);

impl ElementVector {
    /// Normalize raw weights; an all-zero input becomes uniform.
    pub fn normalize(raw: [f64; 5]) -> Self {
        let sum: f64 = raw.iter().sum();
        if sum == 0.0 {
            return Self::uniform();
        }
        Self(raw.map(|w| w / sum))
    }

    pub const fn uniform() -> Self {
        Self([UNIFORM_SHARE; 5])
    }

    pub const fn values(&self) -> [f64; 5] {
        self.0
    }

    pub const fn get(&self, element: WuXing) -> f64 {
        self.0[element.index() as usize]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Element-wise sum of two vectors, renormalized.
    pub fn blend(&self, other: &Self) -> Self {
        let mut raw = self.0;
        for (a, b) in raw.iter_mut().zip(other.0) {
            *a += b;
        }
        Self::normalize(raw)
    }

    /// Cosine similarity in [-1, 1].
    pub fn cosine_similarity(&self, other: &Self) -> f64 {
        let dot: f64 = self.0.iter().zip(other.0).map(|(a, b)| a * b).sum();
        let norm_a = self.0.iter().map(|a| a * a).sum::<f64>().sqrt();
        let norm_b = other.0.iter().map(|b| b * b).sum::<f64>().sqrt();
        dot / (norm_a * norm_b)
    }

    /// Element with the largest share; ties go to the earlier element.
    pub fn dominant(&self) -> WuXing {
        let mut best = 0;
        for i in 1..5 {
            if self.0[i] > self.0[best] {
                best = i;
            }
        }
        ALL_WU_XING[best]
    }

    /// Element with the smallest share; ties go to the earlier element.
    pub fn deficient(&self) -> WuXing {
        let mut worst = 0;
        for i in 1..5 {
            if self.0[i] < self.0[worst] {
                worst = i;
            }
        }
        ALL_WU_XING[worst]
    }
}
