//! Conversion between the flat line format and schedule events.
//!
//! One event per line:
//!
//! ```text
//! 9:00 AM - 10:30 AM= Deep work
//! 12:00 PM - 12:45 PM= Lunch
//! ```
//!
//! Decoding is forgiving: anything that does not look like an event line
//! is logged and skipped. Encoding drops the duration annotation since the
//! duration is always recomputed from the timestamps.

use chrono::{Duration, NaiveDate};

use super::classify::Classifier;
use super::clock::{format_clock, parse_clock};
use super::error::LineError;
use super::event::ScheduleEvent;

/// Decode a single line anchored on `date`.
pub fn decode_line(
    line: &str,
    date: NaiveDate,
    classifier: &Classifier,
) -> Result<ScheduleEvent, LineError> {
    let (range, title) = line.split_once('=').ok_or(LineError::MissingSeparator)?;
    let range = range.trim();

    let (start, end) = range
        .split_once('-')
        .ok_or_else(|| LineError::InvalidTimeRange(range.to_string()))?;
    let start = date.and_time(parse_clock(start)?);
    let mut end = date.and_time(parse_clock(end)?);

    // A block that ends before it starts runs past midnight
    if end < start {
        end += Duration::days(1);
    }

    ScheduleEvent::new(title, start, end, classifier)
        .map_err(|_| LineError::EmptyRange(range.to_string()))
}

/// Decode a whole day. Lines without `=` are ignored and malformed event
/// lines are dropped, so the result may be shorter than the input.
pub fn decode(text: &str, date: NaiveDate, classifier: &Classifier) -> Vec<ScheduleEvent> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .filter(|line| line.contains('='))
        .filter_map(|line| match decode_line(line, date, classifier) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Skipping line {:?}: {}", line, e);
                None
            }
        })
        .collect()
}

pub fn encode_line(event: &ScheduleEvent) -> String {
    format!(
        "{} - {}= {}",
        format_clock(event.start.time()),
        format_clock(event.end.time()),
        event.name
    )
}

pub fn encode(events: &[ScheduleEvent]) -> String {
    events.iter().map(encode_line).collect::<Vec<_>>().join("\n")
}

/// The encoded lines as a list, the shape the add-events endpoint takes.
pub fn time_slots(events: &[ScheduleEvent]) -> Vec<String> {
    events.iter().map(encode_line).collect()
}
