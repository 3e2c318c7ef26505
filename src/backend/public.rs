//! Wire types for the schedule backend and the todo resource
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct EventsResponse {
    pub status: String,
    #[serde(default)]
    pub events: Vec<RemoteEvent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteEvent {
    pub title: String,
    pub start: String, // ISO-8601, offset optional
    pub end: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddEventsRequest {
    pub time_slots: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}
