//! Router for the todo API. Every mutation answers with the fresh list
//! from the backend.

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::backend::TodoClient;

type SharedState = Arc<RwLock<AppState>>;

fn client(state: &SharedState) -> TodoClient {
    state.read().unwrap().todos.clone()
}

async fn list_todos(
    State(state): State<SharedState>,
) -> Result<Json<Vec<public::Todo>>, ApiError> {
    let todos = client(&state).list().await?;
    Ok(Json(todos))
}

// Blank titles are ignored
async fn create_todo(
    State(state): State<SharedState>,
    Json(req): Json<public::CreateTodoRequest>,
) -> Result<Json<Vec<public::Todo>>, ApiError> {
    let todos = client(&state);
    if !req.title.trim().is_empty() {
        todos.create(&req.title).await?;
    }
    Ok(Json(todos.list().await?))
}

async fn toggle_todo(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<public::Todo>>, ApiError> {
    let todos = client(&state);
    let todo = todos.find(id).await?;
    todos.toggle(&todo).await?;
    Ok(Json(todos.list().await?))
}

async fn delete_todo(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<public::Todo>>, ApiError> {
    let todos = client(&state);
    todos.delete(id).await?;
    Ok(Json(todos.list().await?))
}

/// Create the todo router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_todos).post(create_todo))
        .route("/{id}/toggle", post(toggle_todo))
        .route("/{id}", delete(delete_todo))
}
