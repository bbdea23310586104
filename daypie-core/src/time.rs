//! Conversion between wall-clock "HH:MM" text, minute offsets from local
//! midnight, and compact "START-END" range keys.
//!
//! All functions here are pure. Malformed input is an error, never a default.

use crate::error::{DayPieError, DayPieResult};

const RANGE_KEY_SEPARATOR: char = '-';

/// Parse "HH:MM" into minutes since midnight (`hour * 60 + minute`).
///
/// The hour is not limited to 0..24 so that "24:00" (end of day) and later
/// times survive until the partition builder clamps them.
pub fn to_minutes(text: &str) -> DayPieResult<u32> {
    let (hour, minute) = text
        .split_once(':')
        .ok_or_else(|| DayPieError::time_parse(text, "expected HH:MM"))?;

    if minute.contains(':') {
        return Err(DayPieError::time_parse(text, "expected exactly one ':'"));
    }

    let hour = parse_number(hour)
        .ok_or_else(|| DayPieError::time_parse(text, "hour is not a number"))?;
    let minute = parse_number(minute)
        .ok_or_else(|| DayPieError::time_parse(text, "minute is not a number"))?;

    if minute >= 60 {
        return Err(DayPieError::time_parse(text, "minute must be below 60"));
    }

    hour.checked_mul(60)
        .and_then(|m| m.checked_add(minute))
        .ok_or_else(|| DayPieError::time_parse(text, "time is out of range"))
}

/// Format minutes as zero-padded "HH:MM".
///
/// Hours are not wrapped at 24, so 1440 formats as "24:00".
pub fn minutes_to_label(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Split a "START-END" key into its two minute values.
pub fn parse_range_key(key: &str) -> DayPieResult<(u32, u32)> {
    let (start, end) = key
        .split_once(RANGE_KEY_SEPARATOR)
        .ok_or_else(|| DayPieError::range_key(key, "missing '-' separator"))?;

    let start = parse_number(start)
        .ok_or_else(|| DayPieError::range_key(key, "start is not a number"))?;
    let end =
        parse_number(end).ok_or_else(|| DayPieError::range_key(key, "end is not a number"))?;

    Ok((start, end))
}

/// Decode a "START-END" minute range key into ("HH:MM", "HH:MM").
pub fn decode_range_key(key: &str) -> DayPieResult<(String, String)> {
    let (start, end) = parse_range_key(key)?;
    Ok((minutes_to_label(start), minutes_to_label(end)))
}

/// Non-empty, ASCII digits only. Rejects signs and whitespace.
fn parse_number(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
