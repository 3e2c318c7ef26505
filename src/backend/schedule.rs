//! Client for the endpoints that hold a day's schedule
use anyhow::{Result, anyhow, bail};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

use super::public::{AddEventsRequest, EventsResponse, RemoteEvent};
use crate::schedule::{Classifier, ScheduleEvent};

pub const EVENTS_PATH: &str = "get_events/";
pub const FILE_CONTENT_PATH: &str = "get_file_content/";
pub const UPDATE_FILE_CONTENT_PATH: &str = "update_file_content/";
pub const ADD_EVENTS_PATH: &str = "add-events/";

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the day as JSON events.
    pub async fn fetch_events(&self) -> Result<Vec<RemoteEvent>> {
        let resp = self
            .http
            .get(self.url(EVENTS_PATH))
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let body: EventsResponse = resp.json().await?;
        if body.status != "success" {
            bail!("Invalid events response status: {}", body.status);
        }
        tracing::debug!("Fetched {} events", body.events.len());
        Ok(body.events)
    }

    /// Fetch the day as raw text in the line format.
    pub async fn fetch_file_content(&self) -> Result<String> {
        let text = self
            .http
            .get(self.url(FILE_CONTENT_PATH))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text)
    }

    pub async fn update_file_content(&self, text: &str) -> Result<()> {
        self.http
            .post(self.url(UPDATE_FILE_CONTENT_PATH))
            .header("Content-Type", "text/plain")
            .body(text.to_string())
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Replace the remote day with `time_slots`, returning whatever the
    /// backend acknowledges with.
    pub async fn add_events(&self, time_slots: Vec<String>) -> Result<Value> {
        let payload = AddEventsRequest { time_slots };
        let resp = self
            .http
            .post(self.url(ADD_EVENTS_PATH))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}

/// Accepts RFC 3339 (wall clock of the given offset is kept) or a naive
/// `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_remote_time(input: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map_err(|e| anyhow!("Invalid event time {:?}: {}", input, e))
}

impl RemoteEvent {
    pub fn to_event(&self, classifier: &Classifier) -> Result<ScheduleEvent> {
        let start = parse_remote_time(&self.start)?;
        let end = parse_remote_time(&self.end)?;
        Ok(ScheduleEvent::new(&self.title, start, end, classifier)?)
    }
}

/// Convert remote events, dropping the ones that do not make sense.
pub fn to_events(remote: &[RemoteEvent], classifier: &Classifier) -> Vec<ScheduleEvent> {
    remote
        .iter()
        .filter_map(|r| match r.to_event(classifier) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!("Skipping event {:?}: {}", r.title, e);
                None
            }
        })
        .collect()
}
