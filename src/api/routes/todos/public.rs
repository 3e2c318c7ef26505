//! Public types for the todo API
use serde::Deserialize;

pub use crate::backend::Todo;

#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}
