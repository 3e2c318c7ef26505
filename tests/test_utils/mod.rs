//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use chrono::NaiveDate;
use serde_json::Value;

use dayplan::api::AppState;
use dayplan::api::app;
use dayplan::core::AppConfig;
use dayplan::views::ViewMode;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

pub fn test_config(api_base_url: &str, view: ViewMode) -> AppConfig {
    AppConfig {
        api_base_url: api_base_url.to_string(),
        view,
        short_event_minutes: 15,
        snap_minutes: 15,
        day_offset: 1,
    }
}

/// Creates a test application router whose day starts out as `text`
/// (in the line format) and whose backend lives at `api_base_url`.
pub fn test_app(api_base_url: &str, view: ViewMode, text: &str) -> Router {
    let mut app_state = AppState::new(test_config(api_base_url, view), test_date());
    app_state.session.schedule.replace_from_text(text);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}
