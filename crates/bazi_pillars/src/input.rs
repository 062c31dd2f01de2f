//! Birth input: local civil date/time plus place.

use bazi_time::{UtcTime, gregorian_to_jd, is_leap_year, zone_offset_minutes};
use serde::{Deserialize, Serialize};

use crate::error::BirthInputError;

/// Local civil birth instant and geographic longitude.
///
/// `timezone_offset_minutes` is local minus UTC (e.g. +120 for CEST).
/// Deserialized records may name an IANA `timezone` instead; it is resolved
/// to an offset on read and takes precedence over any explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BirthInputRecord")]
pub struct BirthInput {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// Degrees, east positive.
    #[serde(rename = "longitude")]
    pub longitude_deg: f64,
    #[serde(default, alias = "timezoneOffset")]
    pub timezone_offset_minutes: i32,
}

/// Wire form of [`BirthInput`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BirthInputRecord {
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    #[serde(rename = "longitude")]
    longitude_deg: f64,
    #[serde(default, alias = "timezoneOffset")]
    timezone_offset_minutes: i32,
    #[serde(default)]
    timezone: Option<String>,
}

impl TryFrom<BirthInputRecord> for BirthInput {
    type Error = BirthInputError;

    fn try_from(r: BirthInputRecord) -> Result<Self, Self::Error> {
        match r.timezone.as_deref() {
            Some(zone) => Self::in_zone(
                r.year,
                r.month,
                r.day,
                r.hour,
                r.minute,
                r.longitude_deg,
                zone,
            ),
            None => Ok(Self::new(
                r.year,
                r.month,
                r.day,
                r.hour,
                r.minute,
                r.longitude_deg,
                r.timezone_offset_minutes,
            )),
        }
    }
}

const MAX_TZ_OFFSET_MINUTES: i32 = 18 * 60;

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl BirthInput {
    pub fn new(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        longitude_deg: f64,
        timezone_offset_minutes: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            longitude_deg,
            timezone_offset_minutes,
        }
    }

    /// Birth input whose offset is looked up for the wall time in an IANA zone.
    ///
    /// Fields are validated first. Wall times skipped by a daylight-saving
    /// change are rejected; repeated ones take the earlier (daylight) offset.
    pub fn in_zone(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        longitude_deg: f64,
        zone: &str,
    ) -> Result<Self, BirthInputError> {
        let mut input = Self::new(year, month, day, hour, minute, longitude_deg, 0);
        input.validate()?;
        // validated above, so every field is non-negative
        let wall = UtcTime::new(year, month as u32, day as u32, hour as u32, minute as u32, 0.0);
        input.timezone_offset_minutes = zone_offset_minutes(zone, &wall)?;
        Ok(input)
    }

    /// Check every field against its accepted range.
    ///
    /// The calculator itself never calls this: unchecked fields roll over.
    pub fn validate(&self) -> Result<(), BirthInputError> {
        if !(1800..=2200).contains(&self.year) {
            return Err(BirthInputError::Year(self.year));
        }
        if !(1..=12).contains(&self.month) {
            return Err(BirthInputError::Month(self.month));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(BirthInputError::Day {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if !(0..=23).contains(&self.hour) {
            return Err(BirthInputError::Hour(self.hour));
        }
        if !(0..=59).contains(&self.minute) {
            return Err(BirthInputError::Minute(self.minute));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(BirthInputError::Longitude(self.longitude_deg));
        }
        if self.timezone_offset_minutes.abs() > MAX_TZ_OFFSET_MINUTES {
            return Err(BirthInputError::TimezoneOffset(self.timezone_offset_minutes));
        }
        Ok(())
    }

    /// Julian Date of local civil midnight of the birth date.
    pub fn civil_date_jd(&self) -> f64 {
        gregorian_to_jd(self.year, self.month, self.day, 0, 0, 0.0)
    }

    /// Julian Date (UTC) of the birth instant.
    pub fn jd_utc(&self) -> f64 {
        gregorian_to_jd(self.year, self.month, self.day, self.hour, self.minute, 0.0)
            - f64::from(self.timezone_offset_minutes) / 1440.0
    }
}
