//! 12-hour clock strings as they appear in the line format, plus the
//! small amount of time arithmetic the schedule needs.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use super::error::LineError;

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})\s*([AaPp][Mm])$").unwrap());

/// Parse a clock string like `9:00 AM` or `12:45 pm` into a 24-hour time.
pub fn parse_clock(input: &str) -> Result<NaiveTime, LineError> {
    let input = input.trim();
    let invalid = || LineError::InvalidClock(input.to_string());

    let caps = CLOCK_RE.captures(input).ok_or_else(invalid)?;
    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = caps[2].parse().map_err(|_| invalid())?;
    let is_pm = caps[3].eq_ignore_ascii_case("pm");

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(invalid());
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Format a time as `H:MM AM` with no leading zero on the hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Human readable duration, e.g. `1h 30m`, `2h` or `45m`.
pub fn format_duration(minutes: i64) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 && mins > 0 {
        format!("{}h {}m", hours, mins)
    } else if hours > 0 {
        format!("{}h", hours)
    } else {
        format!("{}m", mins)
    }
}

/// Whole minutes between two timestamps, rounded to the nearest minute.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds();
    (millis as f64 / 60_000.0).round() as i64
}

/// Round a timestamp to the nearest multiple of `minutes` past midnight.
/// A grid of zero leaves the timestamp untouched.
pub fn snap_to_grid(dt: NaiveDateTime, minutes: u32) -> NaiveDateTime {
    if minutes == 0 {
        return dt;
    }
    let grid = i64::from(minutes) * 60;
    let secs = i64::from(dt.time().num_seconds_from_midnight());
    let snapped = (secs + grid / 2) / grid * grid;
    dt.date().and_time(NaiveTime::MIN) + Duration::seconds(snapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn it_parses_morning_and_evening_clocks() {
        assert_eq!(parse_clock("9:00 AM").unwrap(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(parse_clock("09:30 pm").unwrap(), NaiveTime::from_hms_opt(21, 30, 0).unwrap());
        assert_eq!(parse_clock(" 7:05PM ").unwrap(), NaiveTime::from_hms_opt(19, 5, 0).unwrap());
    }

    #[test]
    fn it_handles_noon_and_midnight() {
        assert_eq!(parse_clock("12:00 AM").unwrap(), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(parse_clock("12:15 PM").unwrap(), NaiveTime::from_hms_opt(12, 15, 0).unwrap());
    }

    #[test]
    fn it_rejects_malformed_clocks() {
        for bad in ["", "9 AM", "13:00 PM", "0:30 AM", "9:60 AM", "9:00", "nine:00 AM"] {
            assert!(parse_clock(bad).is_err(), "expected {:?} to fail", bad);
        }
    }

    #[test]
    fn it_formats_without_leading_zero() {
        assert_eq!(format_clock(NaiveTime::from_hms_opt(8, 5, 0).unwrap()), "8:05 AM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), "12:00 AM");
        assert_eq!(format_clock(NaiveTime::from_hms_opt(23, 45, 0).unwrap()), "11:45 PM");
    }

    #[test]
    fn it_formats_durations() {
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(0), "0m");
    }

    #[test]
    fn it_rounds_duration_to_nearest_minute() {
        let start = at(9, 0);
        assert_eq!(duration_minutes(start, at(10, 30)), 90);
        assert_eq!(duration_minutes(start, start + Duration::seconds(89)), 1);
        assert_eq!(duration_minutes(start, start + Duration::seconds(29)), 0);
    }

    #[test]
    fn it_snaps_to_the_nearest_grid_line() {
        assert_eq!(snap_to_grid(at(9, 7), 15), at(9, 0));
        assert_eq!(snap_to_grid(at(9, 8), 15), at(9, 15));
        assert_eq!(snap_to_grid(at(9, 7), 0), at(9, 7));
    }
}
