//! Solar position and the Chinese 24 solar terms.
//!
//! This crate provides:
//! - Apparent solar ecliptic longitude at a Julian Date
//! - A bounded root finder for "JD at which the Sun reaches longitude L"
//! - The static 24-term table and a calendar over it

pub mod calendar;
pub mod error;
pub mod longitude;
pub mod search;
pub mod term;

pub use calendar::{
    SolarTermCalendar, SolarTermDate, SolarTermInfo, all_solar_terms, current_solar_term,
    is_on_solar_term, next_solar_term, previous_solar_term, solar_term_date, solar_term_for_date,
};
pub use error::SolarError;
pub use longitude::{normalize_360, solar_longitude_deg, wrap_180};
pub use search::{
    SolarCrossing, SolarSearchConfig, find_solar_longitude_crossing, find_solar_longitude_jd,
    refine_solar_longitude_jd,
};
pub use term::{ALL_SOLAR_TERMS, SolarTerm};
