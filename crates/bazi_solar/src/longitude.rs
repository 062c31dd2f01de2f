//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! Low-precision series from Meeus, Astronomical Algorithms ch. 25: mean
//! longitude L0 and mean anomaly g as polynomials in Julian centuries T, plus
//! the three-term equation of centre C. Accuracy is about 0.01°, which is
//! far below the 15° granularity of the solar terms.

use bazi_time::jd_to_centuries;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360
    if r >= 360.0 { 0.0 } else { r }
}

/// Fold an angular difference into (-180, 180] degrees.
pub fn wrap_180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Geometric mean longitude of the Sun in degrees (not normalized).
pub fn mean_longitude_deg(t: f64) -> f64 {
    280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun in degrees (not normalized).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + 35_999.05029 * t - 0.000_153_6 * t * t
}

/// Equation of centre in degrees for mean anomaly `g_deg`.
pub fn equation_of_centre_deg(t: f64, g_deg: f64) -> f64 {
    let g = g_deg.to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * g.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * g).sin()
        + 0.000_289 * (3.0 * g).sin()
}

/// Solar ecliptic longitude in degrees [0, 360) at Julian Date `jd`.
pub fn solar_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let l0 = mean_longitude_deg(t);
    let c = equation_of_centre_deg(t, mean_anomaly_deg(t));
    normalize_360(l0 + c)
}
