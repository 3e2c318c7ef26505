//! A day being edited: the schedule, which view it belongs to, and the
//! progress flags and message a front end shows while talking to the
//! backend.
//!
//! Reload and save are split into `begin_*` / `finish_*` so callers that
//! keep the session behind a lock can release it while the request is in
//! flight. Nothing is coordinated: a save sends whatever the schedule
//! holds when it begins.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::backend::BackendClient;
use crate::schedule::{Classifier, Schedule, ScheduleEvent};
use crate::views::ViewConfig;

pub const LOADED_MESSAGE: &str = "Events loaded successfully!";
pub const LOAD_ERROR_MESSAGE: &str = "Error loading events. Please try again.";
pub const SAVED_MESSAGE: &str = "Events saved successfully!";
pub const SAVE_ERROR_MESSAGE: &str = "Error saving events. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    fn success(text: &str) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.to_string(),
        }
    }

    fn error(text: &str) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub loading: bool,
    pub saving: bool,
    pub message: Option<StatusMessage>,
}

#[derive(Clone, Debug)]
pub struct DaySession {
    pub schedule: Schedule,
    pub view: ViewConfig,
    pub status: SessionStatus,
}

impl DaySession {
    pub fn new(date: NaiveDate, classifier: Classifier, view: ViewConfig) -> Self {
        Self {
            schedule: Schedule::new(date, classifier),
            view,
            status: SessionStatus::default(),
        }
    }

    pub fn begin_reload(&mut self) {
        self.status.loading = true;
    }

    /// On failure the current events are kept.
    pub fn finish_reload(&mut self, result: Result<Vec<ScheduleEvent>>) {
        self.status.loading = false;
        match result {
            Ok(events) => {
                tracing::info!("Loaded {} events from {} view", events.len(), self.view.mode);
                self.schedule.replace_all(events);
                self.status.message = Some(StatusMessage::success(LOADED_MESSAGE));
            }
            Err(e) => {
                tracing::error!("Error fetching events: {:?}", e);
                self.status.message = Some(StatusMessage::error(LOAD_ERROR_MESSAGE));
            }
        }
    }

    /// Mark the save as started and snapshot what will be sent.
    pub fn begin_save(&mut self) -> Vec<ScheduleEvent> {
        self.status.saving = true;
        self.schedule.events().to_vec()
    }

    pub fn finish_save(&mut self, result: Result<()>) {
        self.status.saving = false;
        match result {
            Ok(()) => {
                tracing::info!("Events saved to {} view", self.view.mode);
                self.status.message = Some(StatusMessage::success(SAVED_MESSAGE));
            }
            Err(e) => {
                tracing::error!("Error saving events: {:?}", e);
                self.status.message = Some(StatusMessage::error(SAVE_ERROR_MESSAGE));
            }
        }
    }

    pub async fn reload(&mut self, backend: &BackendClient) {
        self.begin_reload();
        let result = self
            .view
            .source(backend)
            .load(self.schedule.date(), self.schedule.classifier())
            .await;
        self.finish_reload(result);
    }

    pub async fn save(&mut self, backend: &BackendClient) {
        let events = self.begin_save();
        let result = self.view.source(backend).store(&events).await;
        self.finish_save(result);
    }
}
