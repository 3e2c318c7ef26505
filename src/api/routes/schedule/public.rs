//! Public types for the schedule API
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::{DisplayClass, ScheduleEvent};
use crate::session::{DaySession, StatusMessage};
use crate::views::ViewMode;

#[derive(Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
    pub display_class: DisplayClass,
    pub class_name: &'static str,
}

impl From<&ScheduleEvent> for EventResponse {
    fn from(event: &ScheduleEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            name: event.name.clone(),
            start: event.start,
            end: event.end,
            duration_minutes: event.duration_minutes,
            display_class: event.display_class,
            class_name: event.display_class.class_name(),
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub date: NaiveDate,
    pub view: ViewMode,
    pub view_label: &'static str,
    pub loading: bool,
    pub saving: bool,
    pub message: Option<StatusMessage>,
    pub events: Vec<EventResponse>,
}

impl From<&DaySession> for ScheduleResponse {
    fn from(session: &DaySession) -> Self {
        Self {
            date: session.schedule.date(),
            view: session.view.mode,
            view_label: session.view.label,
            loading: session.status.loading,
            saving: session.status.saving,
            message: session.status.message.clone(),
            events: session.schedule.events().iter().map(EventResponse::from).collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Only `start`: drag. Any `end`: resize. `name`: rename, applied last.
#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub name: Option<String>,
}
