//! Error types for birth-input validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_time::TimeError;

/// A birth-input field outside its accepted range.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BirthInputError {
    Year(i32),
    Month(i32),
    /// Day outside 1..=days-in-month.
    Day { year: i32, month: i32, day: i32 },
    Hour(i32),
    Minute(i32),
    Longitude(f64),
    TimezoneOffset(i32),
    /// IANA zone unknown, or the wall time does not exist in it.
    Zone(TimeError),
}

impl Display for BirthInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Year(y) => write!(f, "year {y} outside 1800..=2200"),
            Self::Month(m) => write!(f, "month {m} outside 1..=12"),
            Self::Day { year, month, day } => {
                write!(f, "day {day} does not exist in {year:04}-{month:02}")
            }
            Self::Hour(h) => write!(f, "hour {h} outside 0..=23"),
            Self::Minute(m) => write!(f, "minute {m} outside 0..=59"),
            Self::Longitude(l) => write!(f, "longitude {l} outside -180..=180"),
            Self::TimezoneOffset(o) => write!(f, "timezone offset {o} min outside ±18h"),
            Self::Zone(e) => write!(f, "{e}"),
        }
    }
}

impl Error for BirthInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Zone(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for BirthInputError {
    fn from(e: TimeError) -> Self {
        Self::Zone(e)
    }
}
