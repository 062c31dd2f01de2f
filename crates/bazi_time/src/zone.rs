//! IANA time zones.
//!
//! Offsets come from the tz database bundled by `chrono-tz`, so historical
//! daylight-saving rules apply. A wall time skipped by a forward transition
//! is an error; a wall time repeated by a backward transition resolves to
//! the earlier instant.

use chrono::{LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::SECONDS_PER_DAY;
use crate::utc_time::UtcTime;

/// Look up an IANA zone name such as `Europe/Berlin`.
pub fn parse_zone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(name.to_string()))
}

fn naive(t: &UtcTime) -> Result<NaiveDateTime, TimeError> {
    let whole = t.second.floor();
    let milli = (((t.second - whole) * 1000.0).round() as u32).min(999);
    NaiveDate::from_ymd_opt(t.year, t.month, t.day)
        .and_then(|d| d.and_hms_milli_opt(t.hour, t.minute, whole as u32, milli))
        .ok_or_else(|| TimeError::InvalidLocalTime(wall_clock(t)))
}

fn wall_clock(t: &UtcTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        t.year, t.month, t.day, t.hour, t.minute
    )
}

fn local_offset_seconds(zone: &str, local: &UtcTime) -> Result<i32, TimeError> {
    let tz = parse_zone(zone)?;
    let wall = naive(local)?;
    let offset = match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => dt.offset().fix(),
        LocalResult::Ambiguous(earlier, _) => earlier.offset().fix(),
        LocalResult::None => {
            return Err(TimeError::InvalidLocalTime(format!(
                "{} does not exist in {zone}",
                wall_clock(local)
            )));
        }
    };
    Ok(offset.local_minus_utc())
}

fn utc_offset_seconds(zone: &str, utc: &UtcTime) -> Result<i32, TimeError> {
    let tz = parse_zone(zone)?;
    let instant = naive(utc)?;
    Ok(tz.offset_from_utc_datetime(&instant).fix().local_minus_utc())
}

fn seconds_to_minutes(seconds: i32) -> i32 {
    (f64::from(seconds) / 60.0).round() as i32
}

/// Offset (local minus UTC, minutes) in effect at a wall-clock time in `zone`.
///
/// `local` carries wall-clock fields, not a UTC instant. Local mean time
/// offsets with odd seconds round to the nearest minute.
pub fn zone_offset_minutes(zone: &str, local: &UtcTime) -> Result<i32, TimeError> {
    local_offset_seconds(zone, local).map(seconds_to_minutes)
}

/// Offset (local minus UTC, minutes) in effect at a UTC instant.
pub fn utc_offset_minutes(zone: &str, utc: &UtcTime) -> Result<i32, TimeError> {
    utc_offset_seconds(zone, utc).map(seconds_to_minutes)
}

/// UTC instant of a wall-clock time in `zone`.
pub fn local_to_utc(zone: &str, local: &UtcTime) -> Result<UtcTime, TimeError> {
    let offset = local_offset_seconds(zone, local)?;
    Ok(UtcTime::from_jd(
        local.to_jd() - f64::from(offset) / SECONDS_PER_DAY,
    ))
}

/// Wall-clock fields in `zone` of a UTC instant.
pub fn utc_to_local(zone: &str, utc: &UtcTime) -> Result<UtcTime, TimeError> {
    let offset = utc_offset_seconds(zone, utc)?;
    Ok(UtcTime::from_jd(utc.to_jd() + f64::from(offset) / SECONDS_PER_DAY))
}
