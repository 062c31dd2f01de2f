//! Solar-term calendar: which term contains an instant, term dates for a
//! year, and stepping to neighbouring terms.
//!
//! Crossings around a reference instant are found by seeding the root
//! finder at (or one mean term-length away from) that instant. Civil-year
//! table seeds are only used for the year-keyed lookups.

use bazi_time::UtcTime;
use serde::Serialize;

use crate::error::SolarError;
use crate::longitude::solar_longitude_deg;
use crate::search::{SolarSearchConfig, find_solar_longitude_crossing, refine_solar_longitude_jd};
use crate::term::{ALL_SOLAR_TERMS, SolarTerm};

/// Mean duration of one solar term in days (tropical year / 24).
pub const MEAN_TERM_DAYS: f64 = 365.2422 / 24.0;

/// Default half-width of the "on a term" window.
pub const DEFAULT_PROXIMITY_HOURS: f64 = 12.0;

/// A solar term and the instant the Sun enters it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermDate {
    pub term: SolarTerm,
    #[serde(rename = "julianDate")]
    pub jd_utc: f64,
    #[serde(rename = "date")]
    pub utc: UtcTime,
}

impl SolarTermDate {
    fn at(term: SolarTerm, jd_utc: f64) -> Self {
        Self {
            term,
            jd_utc,
            utc: UtcTime::from_jd(jd_utc),
        }
    }
}

/// The term containing an instant, bounded by its start and end crossings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarTermInfo {
    pub term: SolarTerm,
    pub index: u8,
    #[serde(rename = "startDate")]
    pub start: SolarTermDate,
    #[serde(rename = "endDate")]
    pub end: SolarTermDate,
}

/// Solar-term lookups with a fixed search configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermCalendar {
    search: SolarSearchConfig,
    proximity_hours: f64,
}

impl Default for SolarTermCalendar {
    fn default() -> Self {
        Self {
            search: SolarSearchConfig::default(),
            proximity_hours: DEFAULT_PROXIMITY_HOURS,
        }
    }
}

impl SolarTermCalendar {
    /// Calendar with a custom root-finder config and "on term" window.
    pub fn new(search: SolarSearchConfig, proximity_hours: f64) -> Result<Self, SolarError> {
        search.validate().map_err(SolarError::InvalidConfig)?;
        if !proximity_hours.is_finite() || proximity_hours <= 0.0 {
            return Err(SolarError::InvalidConfig("proximity_hours must be positive"));
        }
        Ok(Self {
            search,
            proximity_hours,
        })
    }

    pub fn search_config(&self) -> &SolarSearchConfig {
        &self.search
    }

    pub fn proximity_hours(&self) -> f64 {
        self.proximity_hours
    }

    fn crossing_near(&self, term: SolarTerm, seed_jd: f64) -> SolarTermDate {
        let hit = refine_solar_longitude_jd(term.longitude_deg(), seed_jd, &self.search);
        SolarTermDate::at(term, hit.jd)
    }

    /// Term containing `jd_utc`, with the crossings that bound it.
    pub fn current_term(&self, jd_utc: f64) -> SolarTermInfo {
        let term = self.term_for_date(jd_utc);
        let start = self.crossing_near(term, jd_utc);
        let end = self.crossing_near(term.next(), start.jd_utc + MEAN_TERM_DAYS);
        SolarTermInfo {
            term,
            index: term.index(),
            start,
            end,
        }
    }

    /// Term whose 15° segment contains the Sun at `jd_utc`.
    pub fn term_for_date(&self, jd_utc: f64) -> SolarTerm {
        SolarTerm::from_longitude(solar_longitude_deg(jd_utc))
    }

    /// Crossing of `term` near its usual date in civil year `year`.
    pub fn term_date(&self, term: SolarTerm, year: i32) -> SolarTermDate {
        let hit = find_solar_longitude_crossing(term.longitude_deg(), year, &self.search);
        SolarTermDate::at(term, hit.jd)
    }

    /// All 24 terms of the solar year that opens with Li Chun of `year`.
    ///
    /// Xiao Han and Da Han fall in January of `year + 1`.
    pub fn all_terms(&self, year: i32) -> Vec<SolarTermDate> {
        ALL_SOLAR_TERMS
            .iter()
            .map(|&term| {
                let search_year = match term {
                    SolarTerm::XiaoHan | SolarTerm::DaHan => year + 1,
                    _ => year,
                };
                self.term_date(term, search_year)
            })
            .collect()
    }

    /// Whether `jd_utc` lies strictly within the proximity window of the
    /// nearest crossing of `term`.
    pub fn is_on_term(&self, jd_utc: f64, term: SolarTerm) -> bool {
        let nearest = self.crossing_near(term, jd_utc);
        (jd_utc - nearest.jd_utc).abs() * 24.0 < self.proximity_hours
    }

    /// First term crossing after `jd_utc`.
    pub fn next_term(&self, jd_utc: f64) -> SolarTermDate {
        self.current_term(jd_utc).end
    }

    /// Term preceding the one that contains `jd_utc`, with its crossing.
    pub fn previous_term(&self, jd_utc: f64) -> SolarTermDate {
        let current = self.current_term(jd_utc);
        self.crossing_near(current.term.prev(), current.start.jd_utc - MEAN_TERM_DAYS)
    }
}

/// Term containing `jd_utc` with its start and end crossings.
pub fn current_solar_term(jd_utc: f64) -> SolarTermInfo {
    SolarTermCalendar::default().current_term(jd_utc)
}

/// Crossing of `term` in civil year `year`.
pub fn solar_term_date(term: SolarTerm, year: i32) -> SolarTermDate {
    SolarTermCalendar::default().term_date(term, year)
}

/// All 24 term crossings of the solar year starting at Li Chun of `year`.
pub fn all_solar_terms(year: i32) -> Vec<SolarTermDate> {
    SolarTermCalendar::default().all_terms(year)
}

/// Term containing `jd_utc`.
pub fn solar_term_for_date(jd_utc: f64) -> SolarTerm {
    SolarTermCalendar::default().term_for_date(jd_utc)
}

/// Whether `jd_utc` is within ±12 hours of a crossing of `term`.
pub fn is_on_solar_term(jd_utc: f64, term: SolarTerm) -> bool {
    SolarTermCalendar::default().is_on_term(jd_utc, term)
}

/// Next term crossing after `jd_utc`.
pub fn next_solar_term(jd_utc: f64) -> SolarTermDate {
    SolarTermCalendar::default().next_term(jd_utc)
}

/// Term before the current one, with its crossing.
pub fn previous_solar_term(jd_utc: f64) -> SolarTermDate {
    SolarTermCalendar::default().previous_term(jd_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::gregorian_to_jd;

    fn jd(y: i32, m: i32, d: i32) -> f64 {
        gregorian_to_jd(y, m, d, 0, 0, 0.0)
    }

    #[test]
    fn rejects_invalid_config() {
        let bad = SolarSearchConfig::new(0, 1e-4, 0.98565);
        assert!(SolarTermCalendar::new(bad, 12.0).is_err());
        assert_eq!(
            SolarTermCalendar::new(SolarSearchConfig::default(), 0.0),
            Err(SolarError::InvalidConfig("proximity_hours must be positive"))
        );
    }

    #[test]
    fn custom_proximity_window() {
        let cal = SolarTermCalendar::new(SolarSearchConfig::default(), 48.0).unwrap();
        let equinox = cal.term_date(SolarTerm::ChunFen, 2024).jd_utc;
        assert!(cal.is_on_term(equinox + 1.5, SolarTerm::ChunFen));
        assert!(!is_on_solar_term(equinox + 1.5, SolarTerm::ChunFen));
    }

    #[test]
    fn current_term_brackets_instant() {
        for (y, m, d) in [(2024, 2, 5), (2024, 3, 21), (2024, 6, 22), (2024, 12, 31)] {
            let t = jd(y, m, d);
            let info = current_solar_term(t);
            assert!(info.start.jd_utc <= t, "{y}-{m}-{d}");
            assert!(t < info.end.jd_utc, "{y}-{m}-{d}");
            assert_eq!(info.end.term, info.term.next());
            let span = info.end.jd_utc - info.start.jd_utc;
            assert!((14.0..16.5).contains(&span), "span={span}");
        }
    }

    #[test]
    fn current_term_names() {
        assert_eq!(current_solar_term(jd(2024, 2, 5)).term, SolarTerm::LiChun);
        assert_eq!(current_solar_term(jd(2024, 3, 21)).term, SolarTerm::ChunFen);
        assert_eq!(current_solar_term(jd(2024, 6, 22)).term, SolarTerm::XiaZhi);
        assert_eq!(current_solar_term(jd(2024, 5, 15)).term, SolarTerm::LiXia);
    }

    #[test]
    fn da_han_ends_at_li_chun() {
        let info = current_solar_term(jd(2024, 1, 25));
        assert_eq!(info.term, SolarTerm::DaHan);
        assert_eq!(info.end.term, SolarTerm::LiChun);
        assert_eq!((info.end.utc.year, info.end.utc.month), (2024, 2));
    }

    #[test]
    fn jing_zhe_ends_at_chun_fen() {
        let info = current_solar_term(jd(2024, 3, 10));
        assert_eq!(info.term, SolarTerm::JingZhe);
        assert_eq!(info.end.term, SolarTerm::ChunFen);
        assert_eq!((info.end.utc.year, info.end.utc.month), (2024, 3));
    }

    #[test]
    fn term_for_date() {
        assert_eq!(solar_term_for_date(jd(2024, 4, 10)), SolarTerm::QingMing);
    }

    #[test]
    fn next_and_previous() {
        assert_eq!(next_solar_term(jd(2024, 2, 10)).term, SolarTerm::YuShui);
        assert_eq!(previous_solar_term(jd(2024, 2, 25)).term, SolarTerm::LiChun);
    }

    #[test]
    fn next_crosses_year_end() {
        let next = next_solar_term(jd(2024, 12, 30));
        assert_eq!(next.term, SolarTerm::XiaoHan);
        assert_eq!((next.utc.year, next.utc.month), (2025, 1));
    }

    #[test]
    fn previous_crosses_year_start() {
        let prev = previous_solar_term(jd(2025, 1, 10));
        assert_eq!(prev.term, SolarTerm::DongZhi);
        assert_eq!((prev.utc.year, prev.utc.month), (2024, 12));
    }

    #[test]
    fn on_term_within_window() {
        let equinox = solar_term_date(SolarTerm::ChunFen, 2024);
        assert!(is_on_solar_term(equinox.jd_utc, SolarTerm::ChunFen));
        assert!(is_on_solar_term(equinox.jd_utc + 0.4, SolarTerm::ChunFen));
        assert!(!is_on_solar_term(equinox.jd_utc + 0.6, SolarTerm::ChunFen));
        assert!(!is_on_solar_term(jd(2024, 3, 15), SolarTerm::ChunFen));
    }

    #[test]
    fn all_terms_strictly_increasing() {
        let terms = all_solar_terms(2024);
        assert_eq!(terms.len(), 24);
        for pair in terms.windows(2) {
            assert!(pair[0].jd_utc < pair[1].jd_utc);
        }
        assert_eq!(terms[22].term, SolarTerm::XiaoHan);
        assert_eq!(terms[22].utc.year, 2025);
    }
}
