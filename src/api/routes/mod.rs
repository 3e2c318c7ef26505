//! API routes module

pub mod schedule;
pub mod todos;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Day schedule routes
        .nest("/schedule", schedule::router())
        // Todo routes
        .nest("/todos", todos::router())
}
