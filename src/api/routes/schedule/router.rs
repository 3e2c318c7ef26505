//! Router for the schedule API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};
use chrono::NaiveDateTime;
use http::StatusCode;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::schedule::ScheduleError;
use crate::schedule::clock::snap_to_grid;

type SharedState = Arc<RwLock<AppState>>;

fn snapshot(state: &SharedState) -> public::ScheduleResponse {
    public::ScheduleResponse::from(&state.read().unwrap().session)
}

async fn get_schedule(State(state): State<SharedState>) -> Json<public::ScheduleResponse> {
    Json(snapshot(&state))
}

// The day in the line format
async fn get_text(State(state): State<SharedState>) -> String {
    state.read().unwrap().session.schedule.to_text()
}

// Replace the day with text in the line format
async fn put_text(
    State(state): State<SharedState>,
    body: String,
) -> Json<public::ScheduleResponse> {
    state
        .write()
        .unwrap()
        .session
        .schedule
        .replace_from_text(&body);
    Json(snapshot(&state))
}

async fn create_event(
    State(state): State<SharedState>,
    Json(req): Json<public::CreateEventRequest>,
) -> Result<(StatusCode, Json<public::EventResponse>), ApiError> {
    let mut shared_state = state.write().unwrap();
    let grid = shared_state.config.snap_minutes;
    let event = shared_state.session.schedule.create(
        &req.name,
        snap_to_grid(req.start, grid),
        snap_to_grid(req.end, grid),
    )?;
    Ok((StatusCode::CREATED, Json(public::EventResponse::from(event))))
}

async fn update_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<public::UpdateEventRequest>,
) -> Result<Json<public::EventResponse>, ApiError> {
    let mut shared_state = state.write().unwrap();
    let grid = shared_state.config.snap_minutes;
    let snap = |dt: NaiveDateTime| snap_to_grid(dt, grid);
    let schedule = &mut shared_state.session.schedule;

    let current = schedule
        .get(&id)
        .cloned()
        .ok_or_else(|| ScheduleError::NotFound(id.clone()))?;

    let mut id = id;
    match (req.start, req.end) {
        (Some(start), None) => {
            schedule.move_to(&id, snap(start))?;
        }
        (start, Some(end)) => {
            let start = start.map(snap).unwrap_or(current.start);
            schedule.resize(&id, start, snap(end))?;
        }
        (None, None) => {}
    }
    if let Some(name) = req.name {
        id = schedule.rename(&id, &name)?.id.clone();
    }

    let event = schedule
        .get(&id)
        .ok_or_else(|| ScheduleError::NotFound(id.clone()))?;
    Ok(Json(public::EventResponse::from(event)))
}

async fn delete_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<public::EventResponse>, ApiError> {
    let deleted = state.write().unwrap().session.schedule.delete(&id)?;
    Ok(Json(public::EventResponse::from(&deleted)))
}

// Fetch the day from the backend, discarding local edits
async fn reload(State(state): State<SharedState>) -> Json<public::ScheduleResponse> {
    let (backend, view, date, classifier) = {
        let mut shared_state = state.write().unwrap();
        shared_state.session.begin_reload();
        (
            shared_state.backend.clone(),
            shared_state.session.view,
            shared_state.session.schedule.date(),
            *shared_state.session.schedule.classifier(),
        )
    };

    // Finishes even if the client hangs up so `loading` is always cleared
    let task_state = Arc::clone(&state);
    let task = tokio::spawn(async move {
        let result = view.source(&backend).load(date, &classifier).await;
        task_state.write().unwrap().session.finish_reload(result);
    });
    if let Err(e) = task.await {
        tracing::error!("Reload task failed: {}", e);
    }

    Json(snapshot(&state))
}

// Send the day as it is right now to the backend
async fn save(State(state): State<SharedState>) -> Json<public::ScheduleResponse> {
    let (backend, view, events) = {
        let mut shared_state = state.write().unwrap();
        let events = shared_state.session.begin_save();
        (shared_state.backend.clone(), shared_state.session.view, events)
    };

    let task_state = Arc::clone(&state);
    let task = tokio::spawn(async move {
        let result = view.source(&backend).store(&events).await;
        task_state.write().unwrap().session.finish_save(result);
    });
    if let Err(e) = task.await {
        tracing::error!("Save task failed: {}", e);
    }

    Json(snapshot(&state))
}

/// Create the schedule router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(get_schedule))
        .route("/text", get(get_text).put(put_text))
        .route("/events", post(create_event))
        .route("/events/{id}", patch(update_event).delete(delete_event))
        .route("/reload", post(reload))
        .route("/save", post(save))
}
