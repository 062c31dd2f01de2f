//! Golden values for JD/calendar conversions.
//!
//! Reference JDs from Meeus, Astronomical Algorithms, ch. 7.

use bazi_time::{
    J2000_JD, UtcTime, gregorian_to_jd, jd_to_calendar, julian_day_number, unix_ms_to_jd,
};

const EPS: f64 = 1e-9;

#[test]
fn meeus_sputnik_launch() {
    // 1957-10-04.81
    let jd = gregorian_to_jd(1957, 10, 4, 19, 26, 24.0);
    assert!((jd - 2_436_116.31).abs() < 1e-6, "jd={jd}");
}

#[test]
fn meeus_reference_dates() {
    let cases: [(i32, i32, i32, f64); 6] = [
        (2000, 1, 1, 2_451_544.5),
        (1999, 1, 1, 2_451_179.5),
        (1987, 1, 27, 2_446_822.5),
        (1987, 6, 19, 2_446_965.5),
        (1988, 1, 27, 2_447_187.5),
        (1900, 1, 1, 2_415_020.5),
    ];
    for (y, m, d, expected) in cases {
        let jd = gregorian_to_jd(y, m, d, 0, 0, 0.0);
        assert!((jd - expected).abs() < EPS, "{y}-{m}-{d}: {jd} != {expected}");
    }
}

#[test]
fn inverse_matches_reference_dates() {
    let (y, m, d) = jd_to_calendar(2_436_116.31);
    assert_eq!((y, m), (1957, 10));
    assert!((d - 4.81).abs() < 1e-6);

    let (y, m, d) = jd_to_calendar(2_446_822.5);
    assert_eq!((y, m), (1987, 1));
    assert!((d - 27.0).abs() < EPS);
}

#[test]
fn unix_ms_golden() {
    // 2024-01-01T00:00:00Z
    let jd = unix_ms_to_jd(1_704_067_200_000.0);
    assert!((jd - 2_460_310.5).abs() < EPS);
    assert_eq!(julian_day_number(jd), 2_460_311);
}

#[test]
fn utc_time_j2000_display() {
    assert_eq!(UtcTime::from_jd(J2000_JD).to_string(), "2000-01-01T12:00:00Z");
}

#[test]
fn civil_roundtrip_across_centuries() {
    for (y, m, d, h, min) in [
        (1600, 2, 29, 6, 0),
        (1980, 6, 24, 12, 30),
        (2024, 2, 29, 23, 59),
        (2100, 12, 31, 0, 1),
    ] {
        let t = UtcTime::new(y, m, d, h, min, 0.0);
        assert_eq!(UtcTime::from_jd(t.to_jd()), t, "{t}");
    }
}

#[test]
fn utc_time_serializes_fields() {
    let t = UtcTime::new(2024, 2, 4, 8, 27, 0.0);
    let v = serde_json::to_value(t).unwrap();
    assert_eq!(v["year"], 2024);
    assert_eq!(v["month"], 2);
    assert_eq!(v["minute"], 27);
}
