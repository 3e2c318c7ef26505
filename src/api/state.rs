use chrono::NaiveDate;

use crate::backend::{BackendClient, TodoClient};
use crate::core::AppConfig;
use crate::session::DaySession;
use crate::views::ViewConfig;

pub struct AppState {
    // The day being edited, shared by every client of the API
    pub session: DaySession,
    pub backend: BackendClient,
    pub todos: TodoClient,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, date: NaiveDate) -> Self {
        let session = DaySession::new(
            date,
            config.classifier(),
            ViewConfig::for_mode(config.view),
        );
        Self {
            session,
            backend: BackendClient::new(&config.api_base_url),
            todos: TodoClient::new(&config.api_base_url),
            config,
        }
    }
}
