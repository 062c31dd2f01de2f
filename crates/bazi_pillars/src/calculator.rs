//! Four Pillars from a birth instant.
//!
//! - Year: civil year, one back for Jan/Feb births between the winter
//!   solstice (270°) and Li Chun (315°); 1984 is Jia-Zi.
//! - Month: twelve 30° windows starting at Li Chun; branch Yin opens the
//!   year, stem from the Five Tigers rule on the year stem.
//! - Day: `(JDN of civil date + 49) mod 60`.
//! - Hour: two-hour branch windows of True Solar Time centred on even hours,
//!   stem from the Five Rats rule on the day stem.
//!
//! No range checks: out-of-range civil fields roll over.

use bazi_solar::{normalize_360, solar_longitude_deg};
use bazi_time::{julian_day_number, solar_time::true_solar_minutes};
use serde::Serialize;

use crate::chart::FourPillarsChart;
use crate::ganzhi::{Branch, Stem};
use crate::input::BirthInput;
use crate::pillar::{Pillar, cycle_index};

/// Reference Jia-Zi year.
pub const JIA_ZI_YEAR: i32 = 1984;

/// Day-pillar offset: `(JDN + 49) mod 60` is 0 on a Jia-Zi day.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Five Tigers: stem of the Tiger (first) month, keyed by year stem mod 5.
pub const FIVE_TIGERS: [u8; 5] = [2, 4, 6, 8, 0];

/// Five Rats: stem of the Rat (first) hour, keyed by day stem mod 5.
pub const FIVE_RATS: [u8; 5] = [0, 2, 4, 6, 8];

/// Solar longitude at which the first solar month (Tiger) begins.
pub const FIRST_MONTH_LONGITUDE_DEG: f64 = 315.0;

const WINTER_SOLSTICE_DEG: f64 = 270.0;

/// Chart output with the intermediate values used to derive it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaZiResult {
    pub chart: FourPillarsChart,
    #[serde(rename = "solarLongitude")]
    pub solar_longitude_deg: f64,
    #[serde(rename = "julianDate")]
    pub jd_utc: f64,
    /// True Solar Time in minutes of day.
    pub true_solar_minutes: f64,
}

/// Year used for the year pillar.
pub fn chart_year(civil_year: i32, civil_month: i32, solar_longitude: f64) -> i32 {
    if civil_month <= 2 && (WINTER_SOLSTICE_DEG..FIRST_MONTH_LONGITUDE_DEG).contains(&solar_longitude)
    {
        civil_year - 1
    } else {
        civil_year
    }
}

/// Year pillar of a chart year.
pub fn year_pillar(chart_year: i32) -> Pillar {
    Pillar::from_cycle_index(i64::from(chart_year) - i64::from(JIA_ZI_YEAR))
}

/// Solar month index 0..12 (0 = Tiger month starting at 315°).
pub fn solar_month_index(solar_longitude: f64) -> u8 {
    let rel = normalize_360(solar_longitude - FIRST_MONTH_LONGITUDE_DEG);
    ((rel / 30.0).floor() as u8).min(11)
}

/// Month pillar from the solar longitude and the year stem.
pub fn month_pillar(solar_longitude: f64, year_stem: Stem) -> Pillar {
    let idx = i64::from(solar_month_index(solar_longitude));
    let branch = (2 + idx) % 12;
    let stem = (i64::from(FIVE_TIGERS[year_stem.index() as usize % 5]) + idx) % 10;
    Pillar::from_cycle_index(cycle_index(stem, branch))
}

/// Day pillar of a civil date; hour, longitude and timezone play no part.
pub fn day_pillar(year: i32, month: i32, day: i32) -> Pillar {
    let jd = bazi_time::gregorian_to_jd(year, month, day, 0, 0, 0.0);
    Pillar::from_cycle_index(julian_day_number(jd) + DAY_CYCLE_OFFSET)
}

/// Hour branch from True Solar Time; Zi spans 23:00-01:00.
pub fn hour_branch(true_solar_minutes: f64) -> Branch {
    let idx = ((true_solar_minutes + 60.0) / 120.0).floor() as i64;
    Branch::from_index(idx.rem_euclid(12) as usize)
}

/// Hour pillar from True Solar Time and the day stem.
pub fn hour_pillar(true_solar_minutes: f64, day_stem: Stem) -> Pillar {
    let branch = i64::from(hour_branch(true_solar_minutes).index());
    let stem = (i64::from(FIVE_RATS[day_stem.index() as usize % 5]) + branch) % 10;
    Pillar::from_cycle_index(cycle_index(stem, branch))
}

/// Compute the Four Pillars for a birth input.
pub fn calculate_bazi(input: &BirthInput) -> BaZiResult {
    let jd_utc = input.jd_utc();
    let solar_longitude = solar_longitude_deg(jd_utc);

    let year = year_pillar(chart_year(input.year, input.month, solar_longitude));
    let month = month_pillar(solar_longitude, year.stem());
    let day = day_pillar(input.year, input.month, input.day);
    let tst = true_solar_minutes(jd_utc, input.longitude_deg);
    let hour = hour_pillar(tst, day.stem());

    let chart = FourPillarsChart::new(year, month, day, hour);
    tracing::trace!(
        jd_utc,
        solar_longitude,
        true_solar_minutes = tst,
        notation = %chart,
        "ba zi chart"
    );

    BaZiResult {
        chart,
        solar_longitude_deg: solar_longitude,
        jd_utc,
        true_solar_minutes: tst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_pillar_reference_years() {
        assert_eq!(year_pillar(1984).name(), "Jia-Zi");
        assert_eq!(year_pillar(1980).name(), "Geng-Shen");
        assert_eq!(year_pillar(2023).name(), "Gui-Mao");
        assert_eq!(year_pillar(2024).name(), "Jia-Chen");
        assert_eq!(year_pillar(1924).name(), "Jia-Zi");
    }

    #[test]
    fn chart_year_only_shifts_early_months() {
        assert_eq!(chart_year(2024, 1, 285.0), 2023);
        assert_eq!(chart_year(2024, 2, 314.9), 2023);
        assert_eq!(chart_year(2024, 2, 315.0), 2024);
        // late December sits in the same longitude range but keeps its year
        assert_eq!(chart_year(2024, 12, 275.0), 2024);
    }

    #[test]
    fn solar_month_windows() {
        assert_eq!(solar_month_index(315.0), 0);
        assert_eq!(solar_month_index(344.9), 0);
        assert_eq!(solar_month_index(345.0), 1);
        assert_eq!(solar_month_index(0.0), 1);
        assert_eq!(solar_month_index(15.0), 2);
        assert_eq!(solar_month_index(92.9), 4);
        assert_eq!(solar_month_index(280.0), 10);
        assert_eq!(solar_month_index(314.999), 11);
    }

    #[test]
    fn five_tigers_jia_year_starts_bing_yin() {
        let p = month_pillar(320.0, Stem::Jia);
        assert_eq!((p.stem(), p.branch()), (Stem::Bing, Branch::Yin));
        let p = month_pillar(320.0, Stem::Ji);
        assert_eq!((p.stem(), p.branch()), (Stem::Bing, Branch::Yin));
        let p = month_pillar(320.0, Stem::Wu);
        assert_eq!((p.stem(), p.branch()), (Stem::Jia, Branch::Yin));
    }

    #[test]
    fn month_branch_follows_longitude() {
        assert_eq!(month_pillar(92.9, Stem::Geng).branch(), Branch::Wu);
        assert_eq!(month_pillar(280.0, Stem::Ji).branch(), Branch::Zi);
        assert_eq!(month_pillar(300.0, Stem::Ji).branch(), Branch::Chou);
    }

    #[test]
    fn day_pillar_jia_zi_2024() {
        assert_eq!(day_pillar(2024, 1, 1).name(), "Jia-Zi");
        assert_eq!(day_pillar(2024, 1, 2).name(), "Yi-Chou");
        assert_eq!(day_pillar(2023, 12, 31).name(), "Gui-Hai");
    }

    #[test]
    fn day_pillar_rolls_over() {
        assert_eq!(day_pillar(2023, 12, 32), day_pillar(2024, 1, 1));
    }

    #[test]
    fn hour_branch_windows() {
        assert_eq!(hour_branch(0.0), Branch::Zi);
        assert_eq!(hour_branch(59.9), Branch::Zi);
        assert_eq!(hour_branch(60.0), Branch::Chou);
        assert_eq!(hour_branch(720.0), Branch::Wu);
        assert_eq!(hour_branch(1379.9), Branch::Hai);
        assert_eq!(hour_branch(1380.0), Branch::Zi);
    }

    #[test]
    fn five_rats_jia_day_starts_jia_zi() {
        for day_stem in [Stem::Jia, Stem::Ji] {
            let p = hour_pillar(0.0, day_stem);
            assert_eq!((p.stem(), p.branch()), (Stem::Jia, Branch::Zi));
        }
        let p = hour_pillar(0.0, Stem::Yi);
        assert_eq!(p.stem(), Stem::Bing);
    }
}
