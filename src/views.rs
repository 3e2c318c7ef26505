//! View modes and the backend each one reads from and writes to.
//!
//! There is a single day view. What differs between modes is only where
//! the day comes from and where it is saved:
//!
//! | mode     | load                        | save                       |
//! |----------|-----------------------------|----------------------------|
//! | `events` | fetch-events (JSON)         | add-events (`time_slots`)  |
//! | `file`   | fetch-file-content (text)   | update-file-content (text) |

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, Result, bail};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::backend::{BackendClient, to_events};
use crate::schedule::{Classifier, ScheduleEvent, codec};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Events,
    File,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Events => "events",
            Self::File => "file",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "events" => Ok(Self::Events),
            "file" => Ok(Self::File),
            other => bail!("Unknown view mode {:?}, expected `events` or `file`", other),
        }
    }
}

/// Where a day is loaded from and saved to.
#[async_trait]
pub trait ScheduleSource {
    async fn load(&self, date: NaiveDate, classifier: &Classifier) -> Result<Vec<ScheduleEvent>>;

    async fn store(&self, events: &[ScheduleEvent]) -> Result<()>;
}

/// JSON events in, `time_slots` out.
pub struct EventsSource<'a> {
    backend: &'a BackendClient,
}

#[async_trait]
impl ScheduleSource for EventsSource<'_> {
    async fn load(&self, _date: NaiveDate, classifier: &Classifier) -> Result<Vec<ScheduleEvent>> {
        let remote = self.backend.fetch_events().await?;
        Ok(to_events(&remote, classifier))
    }

    async fn store(&self, events: &[ScheduleEvent]) -> Result<()> {
        let ack = self.backend.add_events(codec::time_slots(events)).await?;
        tracing::debug!("Backend acknowledged save: {}", ack);
        Ok(())
    }
}

/// Plain text in the line format both ways.
pub struct FileSource<'a> {
    backend: &'a BackendClient,
}

#[async_trait]
impl ScheduleSource for FileSource<'_> {
    async fn load(&self, date: NaiveDate, classifier: &Classifier) -> Result<Vec<ScheduleEvent>> {
        let text = self.backend.fetch_file_content().await?;
        Ok(codec::decode(&text, date, classifier))
    }

    async fn store(&self, events: &[ScheduleEvent]) -> Result<()> {
        self.backend.update_file_content(&codec::encode(events)).await
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ViewConfig {
    pub mode: ViewMode,
    pub label: &'static str,
}

pub const VIEWS: &[ViewConfig] = &[
    ViewConfig {
        mode: ViewMode::Events,
        label: "Calendar events",
    },
    ViewConfig {
        mode: ViewMode::File,
        label: "Schedule file",
    },
];

impl ViewConfig {
    pub fn for_mode(mode: ViewMode) -> Self {
        match mode {
            ViewMode::Events => VIEWS[0],
            ViewMode::File => VIEWS[1],
        }
    }

    pub fn source<'a>(&self, backend: &'a BackendClient) -> Box<dyn ScheduleSource + Send + Sync + 'a> {
        match self.mode {
            ViewMode::Events => Box::new(EventsSource { backend }),
            ViewMode::File => Box::new(FileSource { backend }),
        }
    }
}
