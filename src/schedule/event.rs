//! The event record shared by the codec, the schedule and the API.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::{Captures, Regex};
use serde::Serialize;

use super::classify::{Classifier, DisplayClass};
use super::clock::{duration_minutes, format_clock, format_duration};
use super::error::ScheduleError;

// Keycaps take their base character along. A zero width joiner only goes
// when it sits next to a pictograph so joined scripts keep theirs.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[0-9#*]\x{FE0F}?\x{20E3}|\x{200D}?[\p{Emoji_Presentation}\p{Extended_Pictographic}\p{Emoji_Modifier}\x{FE0F}\x{20E3}]\x{200D}?",
    )
    .unwrap()
});

// Millisecond timestamps leak into titles when an id gets used as a name
static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]?\d{13,}").unwrap());

// `(1h 30m)`, `(45 min)`, `(2h)` at the end of a title
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\s*\d+\s*[[:alpha:]]+(?:\s+\d+\s*[[:alpha:]]+)?\s*\)\s*$").unwrap()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Strip emoji, stray millisecond timestamps and a trailing duration
/// annotation from a title.
pub fn clean_title(title: &str) -> String {
    let cleaned = EMOJI_RE.replace_all(title, "");
    let cleaned = TIMESTAMP_RE.replace_all(&cleaned, |caps: &Captures| {
        let matched = &caps[0];
        if matched.trim_start_matches(['-', '_']).len() == 13 {
            String::new()
        } else {
            matched.to_string()
        }
    });
    let cleaned = DURATION_RE.replace(&cleaned, "");
    WHITESPACE_RE.replace_all(&cleaned, " ").trim().to_string()
}

/// Id derived from the cleaned name and the start time in epoch millis.
pub fn event_id(name: &str, start: NaiveDateTime) -> String {
    format!("{}-{}", name, start.and_utc().timestamp_millis())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleEvent {
    pub id: String,
    /// Display string: time range, name and duration
    pub title: String,
    /// Cleaned title, the only part that is persisted
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
    pub display_class: DisplayClass,
}

impl ScheduleEvent {
    pub fn new(
        name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        classifier: &Classifier,
    ) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        let name = clean_title(name);
        let mut event = Self {
            id: event_id(&name, start),
            title: String::new(),
            name,
            start,
            end,
            duration_minutes: 0,
            display_class: DisplayClass::Default,
        };
        event.refresh(classifier);
        Ok(event)
    }

    /// Recompute everything derived from the range and the name. The id
    /// is left alone so an event keeps its identity while it is dragged.
    pub(crate) fn refresh(&mut self, classifier: &Classifier) {
        self.duration_minutes = duration_minutes(self.start, self.end);
        self.display_class = classifier.classify(&self.name, self.duration_minutes);
        self.title = self.display_title();
    }

    pub fn display_title(&self) -> String {
        format!(
            "{} - {} | {} ({})",
            format_clock(self.start.time()),
            format_clock(self.end.time()),
            self.name,
            format_duration(self.duration_minutes)
        )
    }
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
    fn it_strips_emoji() {
        assert_eq!(clean_title("🍝 Lunch 🥗"), "Lunch");
        assert_eq!(clean_title("Run 🏃🏽‍♂️ outside"), "Run outside");
    }

    #[test]
    fn it_strips_trailing_duration_annotations() {
        assert_eq!(clean_title("Deep work (1h 30m)"), "Deep work");
        assert_eq!(clean_title("Reading (45 min)"), "Reading");
        assert_eq!(clean_title("Sleep (360 min) "), "Sleep");
        assert_eq!(clean_title("Gym (2h)"), "Gym");
        // Only a trailing annotation is removed
        assert_eq!(clean_title("Call (2 people) prep"), "Call (2 people) prep");
    }

    #[test]
    fn it_strips_millisecond_timestamps() {
        assert_eq!(clean_title("Lunch1741597200000"), "Lunch");
        assert_eq!(clean_title("Lunch-1741597200000 with team"), "Lunch with team");
        assert_eq!(clean_title("Room 42"), "Room 42");
    }

    #[test]
    fn it_keeps_longer_numbers_intact() {
        assert_eq!(clean_title("Call 12345678901234"), "Call 12345678901234");
        assert_eq!(clean_title("Order 123456789012"), "Order 123456789012");
    }

    #[test]
    fn it_strips_keycaps() {
        assert_eq!(clean_title("1\u{FE0F}\u{20E3} Task"), "Task");
        assert_eq!(clean_title("Step 2\u{20E3}"), "Step");
    }

    #[test]
    fn it_keeps_joiners_inside_words() {
        let word = "\u{0915}\u{094D}\u{200D}\u{0937}";
        assert_eq!(clean_title(word), word);
        assert_eq!(clean_title("Family \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} time"), "Family time");
    }

    #[test]
    fn it_builds_a_display_title() {
        let event = ScheduleEvent::new("Lunch", at(12, 0), at(13, 30), &Classifier::default()).unwrap();
        assert_eq!(event.title, "12:00 PM - 1:30 PM | Lunch (1h 30m)");
        assert_eq!(event.duration_minutes, 90);
        assert_eq!(event.display_class, DisplayClass::Highlighted);
        assert_eq!(event.id, format!("Lunch-{}", at(12, 0).and_utc().timestamp_millis()));
    }

    #[test]
    fn it_rejects_empty_and_inverted_ranges() {
        let classifier = Classifier::default();
        assert!(matches!(
            ScheduleEvent::new("Nap", at(9, 0), at(9, 0), &classifier),
            Err(ScheduleError::InvalidRange { .. })
        ));
        assert!(ScheduleEvent::new("Nap", at(10, 0), at(9, 0), &classifier).is_err());
    }
}
