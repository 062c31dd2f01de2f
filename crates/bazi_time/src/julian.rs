//! Julian Date ↔ civil calendar conversions.
//!
//! Forward conversion always uses the proleptic Gregorian leap rule. The
//! inverse follows Meeus ch. 7 and switches to the Julian calendar below
//! JDN 2299161 (1582-10-15), so the pair is only symmetric after the reform.

/// Julian Date of the Unix epoch (1970-01-01T00:00:00Z).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of J2000.0 (2000-01-01T12:00:00 TT, treated as UTC here).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Milliseconds per day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Offset between JD and Modified Julian Date.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_JDN: i64 = 2_299_161;

/// Half-width of the accepted JD range around J2000, in days (±5000 years).
const VALID_JD_HALF_RANGE_DAYS: f64 = 5000.0 * 365.25;

/// Convert a Unix timestamp in milliseconds to a Julian Date.
pub fn unix_ms_to_jd(unix_ms: f64) -> f64 {
    JD_UNIX_EPOCH + unix_ms / MS_PER_DAY
}

/// Convert a Julian Date to a Unix timestamp in milliseconds.
pub fn jd_to_unix_ms(jd: f64) -> f64 {
    (jd - JD_UNIX_EPOCH) * MS_PER_DAY
}

/// Julian Date from a calendar date with fractional day.
///
/// `month` outside 1..=12 is folded into the year first (month 13 is January
/// of the next year); day overflow is linear, so day 32 of January lands on
/// February 1.
pub fn calendar_to_jd(year: i32, month: i32, day_frac: f64) -> f64 {
    let month0 = i64::from(month) - 1;
    let mut y = i64::from(year) + month0.div_euclid(12);
    let mut m = month0.rem_euclid(12) + 1;
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);

    (365.25 * (y + 4716) as f64).floor() + (30.6001 * (m + 1) as f64).floor() + day_frac
        + b as f64
        - 1524.5
}

/// Julian Date from Gregorian civil fields.
///
/// No range checks: hour 24, minute 75 and similar roll over.
pub fn gregorian_to_jd(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: f64) -> f64 {
    let day_frac =
        f64::from(day) + (f64::from(hour) + f64::from(minute) / 60.0 + second / 3600.0) / 24.0;
    calendar_to_jd(year, month, day_frac)
}

/// Calendar date from a Julian Date: `(year, month, day_with_fraction)`.
///
/// Dates before the Gregorian reform come out in the Julian calendar.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let a = if z < GREGORIAN_REFORM_JDN as f64 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian Day Number: the integer day whose civil midnight precedes `jd`.
///
/// The boundary sits at fractional part 0.5, i.e. civil midnight UTC.
pub fn julian_day_number(jd: f64) -> i64 {
    (jd + 0.5).floor() as i64
}

/// Modified Julian Date.
pub fn modified_julian_date(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// 1-based day of the (UTC) year containing `jd`.
pub fn day_of_year(jd: f64) -> u32 {
    let (year, _, _) = jd_to_calendar(jd);
    let jan1 = calendar_to_jd(year, 1, 1.0);
    (jd - jan1).floor() as u32 + 1
}

/// Whether `jd` is finite and within ±5000 years of J2000.0.
pub fn is_valid_jd(jd: f64) -> bool {
    jd.is_finite() && (jd - J2000_JD).abs() <= VALID_JD_HALF_RANGE_DAYS
}
