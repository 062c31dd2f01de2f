//! Four Pillars of Destiny (Ba Zi) chart calculation.
//!
//! This crate provides:
//! - Wu Xing elements with the generating/controlling cycles
//! - Heavenly Stems, Earthly Branches and the 60-term cycle
//! - Year/month/day/hour pillars and the Day Master from a birth instant

pub mod calculator;
pub mod chart;
pub mod element;
pub mod error;
pub mod ganzhi;
pub mod input;
pub mod pillar;

pub use calculator::{
    BaZiResult, FIVE_RATS, FIVE_TIGERS, calculate_bazi, chart_year, day_pillar, hour_branch,
    hour_pillar, month_pillar, solar_month_index, year_pillar,
};
pub use chart::{DayMaster, FourPillarsChart};
pub use element::{ALL_WU_XING, Polarity, WuXing};
pub use error::BirthInputError;
pub use ganzhi::{ALL_BRANCHES, ALL_STEMS, ALL_ZODIAC_ANIMALS, Branch, Stem, ZodiacAnimal};
pub use input::BirthInput;
pub use pillar::Pillar;
