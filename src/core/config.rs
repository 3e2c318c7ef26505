use std::env;

use chrono::{Duration, Local, NaiveDate};

use crate::schedule::Classifier;
use crate::schedule::classify::DEFAULT_SHORT_EVENT_MINUTES;
use crate::views::ViewMode;

pub const DEFAULT_API_URL: &str = "https://sharishth.pythonanywhere.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub view: ViewMode,
    pub short_event_minutes: i64,
    pub snap_minutes: u32,
    // The planner opens on tomorrow by default
    pub day_offset: i64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}", key, value);
            default
        }),
        Err(_) => default,
    }
}

impl AppConfig {
    pub fn classifier(&self) -> Classifier {
        Classifier::new(self.short_event_minutes)
    }

    /// The date a session opens on when none is given.
    pub fn default_date(&self) -> NaiveDate {
        Local::now().date_naive() + Duration::days(self.day_offset)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let api_base_url = env::var("DAYPLAN_API_URL").unwrap_or(DEFAULT_API_URL.to_string());
        let view = env_or("DAYPLAN_VIEW", ViewMode::Events);
        let short_event_minutes = env_or("DAYPLAN_SHORT_EVENT_MINUTES", DEFAULT_SHORT_EVENT_MINUTES);
        let snap_minutes = env_or("DAYPLAN_SNAP_MINUTES", 15);
        let day_offset = env_or("DAYPLAN_DAY_OFFSET", 1);

        Self {
            api_base_url,
            view,
            short_event_minutes,
            snap_minutes,
            day_offset,
        }
    }
}
