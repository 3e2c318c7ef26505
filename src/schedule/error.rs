use chrono::NaiveDateTime;
use thiserror::Error;

/// Why a single line of the line format could not be decoded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("line has no `=` separating the time range from the title")]
    MissingSeparator,
    #[error("time range `{0}` is not of the form `<start> - <end>`")]
    InvalidTimeRange(String),
    #[error("clock `{0}` is not of the form `H:MM AM|PM`")]
    InvalidClock(String),
    #[error("time range `{0}` has no length")]
    EmptyRange(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("no event with id `{0}`")]
    NotFound(String),
    #[error("event must end after it starts (start {start}, end {end})")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}
