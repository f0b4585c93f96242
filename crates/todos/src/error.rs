//! Todo Error Types
//!
//! This module provides todo-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use serde::Serialize;
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// A single failed validation rule, reported per field
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Todo-specific error variants
///
/// These map to the HTTP statuses of the ownership-scoped CRUD contract and
/// convert to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No valid caller identity on the request
    #[error("Missing or invalid caller identity")]
    Unauthorized,

    /// Payload failed schema validation; carries field-level detail
    #[error("Invalid payload")]
    Validation(Vec<FieldViolation>),

    /// Caller is not the owner of the loaded record (update/delete re-check)
    #[error("Caller does not own this todo")]
    Forbidden,

    /// Identifier does not resolve within the caller's owned set.
    /// Covers both true absence and records owned by someone else.
    #[error("Todo not found")]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Build a validation error from collected violations
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        TodoError::Validation(violations)
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::Unauthorized => StatusCode::UNAUTHORIZED,
            TodoError::Validation(_) => StatusCode::BAD_REQUEST,
            TodoError::Forbidden => StatusCode::FORBIDDEN,
            TodoError::NotFound => StatusCode::NOT_FOUND,
            TodoError::Database(_) | TodoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::Unauthorized => ErrorKind::Unauthorized,
            TodoError::Validation(_) => ErrorKind::BadRequest,
            TodoError::Forbidden => ErrorKind::Forbidden,
            TodoError::NotFound => ErrorKind::NotFound,
            TodoError::Database(_) | TodoError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            TodoError::Forbidden => {
                tracing::warn!("Ownership mismatch on loaded todo");
            }
            _ => {
                tracing::debug!(error = %self, "Todo request rejected");
            }
        }
    }
}

impl From<TodoError> for AppError {
    fn from(err: TodoError) -> Self {
        match err {
            // Let the kernel classify the underlying database failure
            TodoError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();

        // RFC 7807 problem details; validation errors additionally carry
        // per-field violations. Server errors keep their detail out of the
        // body.
        let body = match &self {
            TodoError::Validation(violations) => serde_json::json!({
                "type": format!("https://httpstatuses.io/{}", status.as_u16()),
                "title": self.kind().as_str(),
                "status": status.as_u16(),
                "detail": self.to_string(),
                "violations": violations,
            }),
            TodoError::Database(_) | TodoError::Internal(_) => serde_json::json!({
                "type": format!("https://httpstatuses.io/{}", status.as_u16()),
                "title": self.kind().as_str(),
                "status": status.as_u16(),
                "detail": "Internal server error",
            }),
            _ => serde_json::json!({
                "type": format!("https://httpstatuses.io/{}", status.as_u16()),
                "title": self.kind().as_str(),
                "status": status.as_u16(),
                "detail": self.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
