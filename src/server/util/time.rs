//! Calendar and time-of-day helpers shared by slot generation and reservation.
//!
//! Times of day are handled as minutes since midnight and rendered as zero-padded
//! 24-hour `"HH:MM"` strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Day of the week for a calendar date, counting from Sunday = 0 to Saturday = 6.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parses an `HH:MM` time of day into minutes since midnight.
///
/// Accepts `24:00` so a schedule can close at midnight; any other hour above 23 or minute
/// above 59 is rejected.
pub fn parse_minutes(value: &str) -> Option<u32> {
    let (hours, minutes) = value.trim().split_once(':')?;

    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }

    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    if minutes > 59 {
        return None;
    }

    let total = hours * 60 + minutes;
    (total <= MINUTES_PER_DAY).then_some(total)
}

/// Parses an `HH:MM` time of day that a slot can start at (`00:00` to `23:59`).
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    let minutes = parse_minutes(value)?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Renders minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Combines a date with a minute offset into a slot start with zero seconds.
pub fn at_minutes(date: NaiveDate, minutes: u32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + chrono::Duration::minutes(minutes as i64)
}

/// First and last instant of a calendar day, both inclusive.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + chrono::Duration::days(1) - chrono::Duration::milliseconds(1);

    (start, end)
}
