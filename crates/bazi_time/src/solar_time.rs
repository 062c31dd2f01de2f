//! Equation of time and local solar time.
//!
//! Two equation-of-time models live here:
//! - [`equation_of_time_coarse_min`]: NOAA day-of-year approximation, used by
//!   the hour pillar's True Solar Time.
//! - [`equation_of_time_min`]: Meeus ch. 28 series in the Sun's mean
//!   longitude/anomaly, used for Local Apparent Time.
//!
//! They differ by up to ~0.5 min over a year.

use std::f64::consts::TAU;

use crate::julian::{day_of_year, jd_to_centuries};
use crate::utc_time::UtcTime;

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Minutes per civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Normalize a minute-of-day value into [0, 1440).
pub fn normalize_minutes(minutes: f64) -> f64 {
    let r = minutes % MINUTES_PER_DAY;
    if r < 0.0 { r + MINUTES_PER_DAY } else { r }
}

/// NOAA equation of time in minutes for a 0-based UTC day-of-year index.
pub fn equation_of_time_noaa_min(day_index: u32) -> f64 {
    let b = TAU / 364.0 * (f64::from(day_index) - 81.0);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// NOAA equation of time in minutes for the UTC day containing `jd_utc`.
pub fn equation_of_time_coarse_min(jd_utc: f64) -> f64 {
    equation_of_time_noaa_min(day_of_year(jd_utc) - 1)
}

/// Meeus equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_min(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);

    let l0 = (280.46646 + 36_000.76983 * t).to_radians();
    let m = (357.52911 + 35_999.05029 * t).to_radians();
    let e = 0.016708634 - 0.000042037 * t;
    let eps = (23.439291 - 0.0130042 * t).to_radians();
    let y = (eps / 2.0).tan().powi(2);

    let eot_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    eot_rad.to_degrees() * MINUTES_PER_DEGREE
}

/// Local Mean Time as a Julian Date: UTC shifted by `longitude_deg / 15` hours.
pub fn local_mean_time_jd(jd_utc: f64, longitude_deg: f64) -> f64 {
    jd_utc + longitude_deg * MINUTES_PER_DEGREE / MINUTES_PER_DAY
}

/// Local Apparent (true solar) Time as a Julian Date, using the Meeus
/// equation of time.
pub fn local_apparent_time_jd(jd_utc: f64, longitude_deg: f64) -> f64 {
    local_mean_time_jd(jd_utc, longitude_deg) + equation_of_time_min(jd_utc) / MINUTES_PER_DAY
}

/// True Solar Time in minutes of day [0, 1440), using the coarse NOAA
/// equation of time.
///
/// `UTC clock minutes + 4·longitude + EoT`, east longitude positive.
pub fn true_solar_minutes(jd_utc: f64, longitude_deg: f64) -> f64 {
    // clock minutes and EoT day must come from the same rounded instant
    let utc = UtcTime::from_jd(jd_utc);
    let eot = equation_of_time_coarse_min(UtcTime::date(utc.year, utc.month, utc.day).to_jd());
    normalize_minutes(utc.minutes_of_day() + longitude_deg * MINUTES_PER_DEGREE + eot)
}
