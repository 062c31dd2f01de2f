//! Error types for time parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing civil date/time input and resolving time zones.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date/time string did not match any accepted layout.
    Parse(String),
    /// Not an IANA time zone name.
    UnknownZone(String),
    /// Civil fields that name no instant: out of range, or skipped by a
    /// daylight-saving transition.
    InvalidLocalTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::UnknownZone(name) => write!(f, "unknown time zone '{name}'"),
            Self::InvalidLocalTime(msg) => write!(f, "invalid local time: {msg}"),
        }
    }
}

impl Error for TimeError {}
