//! Time handling for the Ba Zi engine.
//!
//! This crate provides:
//! - Julian Date ↔ civil calendar conversions (Meeus ch. 7)
//! - Unix-millisecond ↔ JD conversion
//! - A `UtcTime` civil date/time with ISO display and parsing
//! - Equation of time (coarse NOAA and Meeus) and local solar time
//! - IANA zone offsets for civil wall-clock times

pub mod error;
pub mod julian;
pub mod solar_time;
pub mod utc_time;
pub mod zone;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, JD_UNIX_EPOCH, MS_PER_DAY, calendar_to_jd, day_of_year,
    gregorian_to_jd, is_leap_year, is_valid_jd, jd_to_calendar, jd_to_centuries, jd_to_unix_ms,
    julian_day_number, modified_julian_date, unix_ms_to_jd,
};
pub use solar_time::{
    equation_of_time_coarse_min, equation_of_time_min, local_apparent_time_jd, local_mean_time_jd,
    true_solar_minutes,
};
pub use utc_time::{UtcTime, jd_to_gregorian};
pub use zone::{local_to_utc, parse_zone, utc_offset_minutes, utc_to_local, zone_offset_minutes};
