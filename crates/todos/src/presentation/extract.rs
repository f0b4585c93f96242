//! Request Extractors
//!
//! `Json` wrapper whose rejection speaks the same problem-details dialect as
//! the rest of the error taxonomy: malformed or incomplete bodies are 400
//! validation errors, not axum's default 422 plain-text rejection.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{FieldViolation, TodoError};

/// JSON body extractor with a [`TodoError::Validation`] rejection
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = TodoError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(TodoError::validation(vec![FieldViolation::new(
                "body",
                rejection.body_text(),
            )])),
        }
    }
}
