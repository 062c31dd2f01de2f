//! UTC calendar date/time.
//!
//! `UtcTime` is the civil representation used at every boundary of the
//! engine: parsing user input, reporting solar-term instants, rendering.

use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{
    MS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_unix_ms, unix_ms_to_jd,
};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_MINUTE: i64 = 60_000;

/// UTC calendar date with millisecond-resolution seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight UTC of a calendar date.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self::new(year, month, day, 0, 0, 0.0)
    }

    /// Julian Date of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = f64::from(self.day)
            + f64::from(self.hour) / 24.0
            + f64::from(self.minute) / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month as i32, day_frac)
    }

    /// Civil fields of a Julian Date, rounded to the millisecond.
    ///
    /// Dates before 1582-10-15 come out in the Julian calendar.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let mut jdn = shifted.floor();
        let mut ms_of_day = ((shifted - jdn) * MS_PER_DAY).round() as i64;
        if ms_of_day >= MS_PER_DAY as i64 {
            jdn += 1.0;
            ms_of_day -= MS_PER_DAY as i64;
        }

        // jdn - 0.5 is civil midnight, so the day fraction is integral
        let (year, month, day_frac) = jd_to_calendar(jdn - 0.5);

        let hour = ms_of_day / MS_PER_HOUR;
        let minute = (ms_of_day % MS_PER_HOUR) / MS_PER_MINUTE;
        let second = (ms_of_day % MS_PER_MINUTE) as f64 / 1000.0;

        Self {
            year,
            month,
            day: day_frac.round() as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
        }
    }

    /// Instant from a Unix timestamp in milliseconds.
    pub fn from_unix_ms(unix_ms: f64) -> Self {
        Self::from_jd(unix_ms_to_jd(unix_ms))
    }

    /// Unix timestamp in milliseconds.
    pub fn to_unix_ms(&self) -> f64 {
        jd_to_unix_ms(self.to_jd())
    }

    /// Minutes elapsed since 00:00 of this UTC day.
    pub fn minutes_of_day(&self) -> f64 {
        f64::from(self.hour) * 60.0 + f64::from(self.minute) + self.second / 60.0
    }
}

/// Civil UTC fields of a Julian Date (Meeus inverse, Julian calendar before
/// the 1582 reform).
pub fn jd_to_gregorian(jd: f64) -> UtcTime {
    UtcTime::from_jd(jd)
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - f64::from(whole);
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` and `YYYY-MM-DDThh:mm:ss[.sss]`,
    /// with an optional trailing `Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('Z');
        let (date, time) = match trimmed.split_once('T') {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let (sign, date) = match date.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, date),
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parse_field(date_parts[0], "year")?;
        let month: u32 = parse_field(date_parts[1], "month")?;
        let day: u32 = parse_field(date_parts[2], "day")?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                match time_parts.as_slice() {
                    [h, m] => (parse_field(h, "hour")?, parse_field(m, "minute")?, 0.0),
                    [h, m, sec] => (
                        parse_field(h, "hour")?,
                        parse_field(m, "minute")?,
                        parse_field(sec, "second")?,
                    ),
                    _ => {
                        return Err(TimeError::Parse(format!(
                            "expected hh:mm or hh:mm:ss, got {t}"
                        )));
                    }
                }
            }
        };

        Ok(Self::new(sign * year, month, day, hour, minute, second))
    }
}

fn parse_field<T: FromStr>(raw: &str, what: &'static str) -> Result<T, TimeError>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| TimeError::Parse(format!("invalid {what} '{raw}': {e}")))
}
