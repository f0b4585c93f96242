//! API DTOs (Data Transfer Objects)
//!
//! The serialized todo exposes `id` read-only and never the owner; the owner
//! is implicit in the authenticated caller and not settable by any client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::Todo;

/// Request body for POST /todos
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    pub title: String,
    pub notes: Option<String>,
    #[serde(default)]
    pub done: bool,
}

/// Request body for PUT /todos/{id} - the full set of mutable task fields.
/// An absent `notes` clears the stored value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    pub title: String,
    pub notes: Option<String>,
    pub done: bool,
}

/// Serialized todo
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: Uuid,
    pub title: String,
    pub notes: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.into_uuid(),
            title: todo.title,
            notes: todo.notes,
            done: todo.done,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}
