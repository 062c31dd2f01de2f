//! East-West fusion of a Four Pillars chart with Western planet placements.
//!
//! This crate provides:
//! - Western zodiac signs, bodies and the planet map an ephemeris supplies
//! - Five-element vectors for both sides and their unweighted blend
//! - Harmony index (rescaled cosine similarity) with banded interpretation
//! - Sign-based resonances between chart positions and placements

pub mod body;
pub mod fusion;
pub mod planets;
pub mod resonance;
pub mod sign;
pub mod vector;

pub use body::{ALL_WESTERN_BODIES, WesternBody};
pub use fusion::{
    BRANCH_WEIGHTS, ElementBalance, FusionResult, HarmonyLevel, STEM_WEIGHTS, calculate_fusion,
    eastern_vector, harmony_index, western_vector,
};
pub use planets::{PlanetPosition, Planets};
pub use resonance::{
    ALL_RESONANCE_KINDS, ElementRelation, Resonance, ResonanceKind, ResonanceQuality,
    find_resonances,
};
pub use sign::{ALL_ZODIAC_SIGNS, WesternElement, ZodiacSign};
pub use vector::{ElementVector, UNIFORM_SHARE};
