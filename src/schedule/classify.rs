//! Display tags that drive how an event block is styled.

use serde::{Deserialize, Serialize};

/// Titles containing any of these words are highlighted no matter how
/// long the event is.
pub const HIGHLIGHT_WORDS: &[&str] = &[
    "break",
    "dinner",
    "good morning",
    "your journey",
    "lunch",
    "relaxation",
    "snack",
    "walking",
    "good night",
    "breakfast",
    "fall in love",
    "stop chasing",
    "study like",
    "5-minute rule",
    "bath",
    "sleep",
];

pub const DEFAULT_SHORT_EVENT_MINUTES: i64 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayClass {
    Highlighted,
    Short,
    Default,
}

impl DisplayClass {
    /// CSS class name understood by the calendar front end.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Highlighted => "pink-event",
            Self::Short => "small-event",
            Self::Default => "yellow-event",
        }
    }
}

/// Keyword match first, then the duration threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classifier {
    pub short_event_minutes: i64,
}

impl Classifier {
    pub fn new(short_event_minutes: i64) -> Self {
        Self {
            short_event_minutes,
        }
    }

    pub fn classify(&self, name: &str, duration_minutes: i64) -> DisplayClass {
        let lowered = name.to_lowercase();
        if HIGHLIGHT_WORDS.iter().any(|word| lowered.contains(word)) {
            DisplayClass::Highlighted
        } else if duration_minutes < self.short_event_minutes {
            DisplayClass::Short
        } else {
            DisplayClass::Default
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_EVENT_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_highlights_keywords_regardless_of_duration() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("Lunch with Sam", 5), DisplayClass::Highlighted);
        assert_eq!(classifier.classify("LUNCH", 120), DisplayClass::Highlighted);
        assert_eq!(classifier.classify("Evening walking", 15), DisplayClass::Highlighted);
    }

    #[test]
    fn it_falls_back_to_the_duration_threshold() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("Email triage", 14), DisplayClass::Short);
        assert_eq!(classifier.classify("Email triage", 15), DisplayClass::Default);
        assert_eq!(classifier.classify("Deep work", 240), DisplayClass::Default);
    }

    #[test]
    fn it_respects_a_custom_threshold() {
        let classifier = Classifier::new(25);
        assert_eq!(classifier.classify("Standup", 20), DisplayClass::Short);
        assert_eq!(classifier.classify("Standup", 25), DisplayClass::Default);
    }

    #[test]
    fn it_maps_tags_to_class_names() {
        assert_eq!(DisplayClass::Highlighted.class_name(), "pink-event");
        assert_eq!(DisplayClass::Short.class_name(), "small-event");
        assert_eq!(DisplayClass::Default.class_name(), "yellow-event");
    }
}
