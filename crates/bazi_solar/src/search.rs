//! Inverse solar longitude: the Julian Date at which the Sun reaches a
//! target ecliptic longitude.
//!
//! Algorithm: seed from a table of approximate civil dates per 15° grid
//! point, then fixed-point refinement `jd += wrap(target - lon(jd)) / n`
//! with `n` the Sun's mean daily motion. The ratio between true and mean
//! motion stays within ±4%, so each step shrinks the error by about 25×.

use bazi_time::gregorian_to_jd;
use serde::{Deserialize, Serialize};

use crate::longitude::{normalize_360, solar_longitude_deg, wrap_180};

/// Approximate civil (month, day) at which the Sun reaches `15° × index`.
const SEED_DATES: [(i32, i32); 24] = [
    (3, 21),  // 0
    (4, 5),   // 15
    (4, 20),  // 30
    (5, 6),   // 45
    (5, 21),  // 60
    (6, 6),   // 75
    (6, 21),  // 90
    (7, 7),   // 105
    (7, 23),  // 120
    (8, 8),   // 135
    (8, 23),  // 150
    (9, 8),   // 165
    (9, 23),  // 180
    (10, 8),  // 195
    (10, 24), // 210
    (11, 8),  // 225
    (11, 22), // 240
    (12, 7),  // 255
    (12, 22), // 270
    (1, 6),   // 285
    (1, 20),  // 300
    (2, 4),   // 315
    (2, 19),  // 330
    (3, 6),   // 345
];

/// Configuration for the longitude root finder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarSearchConfig {
    /// Maximum refinement steps (default 50).
    pub max_iterations: u32,
    /// Stop once |target - longitude| falls below this, in degrees (default 1e-4).
    pub tolerance_deg: f64,
    /// Mean solar motion used as the step divisor (default 0.98565 °/day).
    pub mean_motion_deg_per_day: f64,
}

impl SolarSearchConfig {
    pub const fn new(max_iterations: u32, tolerance_deg: f64, mean_motion_deg_per_day: f64) -> Self {
        Self {
            max_iterations,
            tolerance_deg,
            mean_motion_deg_per_day,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if !self.mean_motion_deg_per_day.is_finite() || self.mean_motion_deg_per_day <= 0.0 {
            return Err("mean_motion_deg_per_day must be positive");
        }
        Ok(())
    }
}

impl Default for SolarSearchConfig {
    fn default() -> Self {
        Self::new(50, 1e-4, 0.98565)
    }
}

/// Result of a root-finder run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarCrossing {
    /// Best estimate of the crossing instant (JD, UTC).
    pub jd: f64,
    /// Refinement steps actually taken.
    pub iterations: u32,
    /// Whether the tolerance was met before the iteration cap.
    pub converged: bool,
}

/// Seed JD (12:00 UTC of the table date in `year`) for a target longitude.
///
/// Off-grid targets use the seed of the 15° grid point at or below them.
pub fn seed_jd(target_deg: f64, year: i32) -> f64 {
    let slot = (normalize_360(target_deg) / 15.0).floor() as usize % 24;
    let (month, day) = SEED_DATES[slot];
    gregorian_to_jd(year, month, day, 12, 0, 0.0)
}

/// Refine from an arbitrary seed until the Sun's longitude matches `target_deg`.
///
/// The crossing nearest the seed (within ±180° of solar motion) is returned.
/// `config` is expected to pass [`SolarSearchConfig::validate`].
pub fn refine_solar_longitude_jd(
    target_deg: f64,
    seed_jd: f64,
    config: &SolarSearchConfig,
) -> SolarCrossing {
    let target = normalize_360(target_deg);
    let mut jd = seed_jd;

    for i in 0..config.max_iterations {
        let diff = wrap_180(target - solar_longitude_deg(jd));
        if diff.abs() < config.tolerance_deg {
            return SolarCrossing {
                jd,
                iterations: i,
                converged: true,
            };
        }
        jd += diff / config.mean_motion_deg_per_day;
    }

    tracing::debug!(
        target_deg = target,
        seed_jd,
        jd,
        max_iterations = config.max_iterations,
        "solar longitude search hit iteration cap"
    );
    SolarCrossing {
        jd,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// JD at which the Sun reaches `target_deg` in civil year `year`, with a
/// custom search configuration.
pub fn find_solar_longitude_crossing(
    target_deg: f64,
    year: i32,
    config: &SolarSearchConfig,
) -> SolarCrossing {
    refine_solar_longitude_jd(target_deg, seed_jd(target_deg, year), config)
}

/// JD at which the Sun reaches `target_deg` near its usual date in `year`.
///
/// The caller picks the year; no disambiguation across years is attempted.
pub fn find_solar_longitude_jd(target_deg: f64, year: i32) -> f64 {
    find_solar_longitude_crossing(target_deg, year, &SolarSearchConfig::default()).jd
}
