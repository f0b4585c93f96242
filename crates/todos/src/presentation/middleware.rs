//! Caller Identity Middleware
//!
//! Token verification is an upstream concern: the identity-aware gateway in
//! front of this service authenticates the request and forwards the caller's
//! user id in the `x-user-id` header. This middleware turns that header into
//! a [`Caller`] request extension before any handler runs; requests without a
//! parseable identity are rejected with 401 before any data access.

use axum::extract::{FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::error::app_error::AppError;
use kernel::id::UserId;
use uuid::Uuid;

use crate::error::TodoError;

/// Header carrying the verified caller id, set by the gateway
pub const CALLER_HEADER: &str = "x-user-id";

/// The authenticated caller, resolved by the identity collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub UserId);

impl Caller {
    pub fn user_id(&self) -> UserId {
        self.0
    }
}

/// Middleware that requires a resolvable caller identity
pub async fn require_caller(mut req: Request, next: Next) -> Result<Response, TodoError> {
    let caller = caller_from_headers(req.headers())?;

    req.extensions_mut().insert(caller);

    Ok(next.run(req).await)
}

fn caller_from_headers(headers: &HeaderMap) -> Result<Caller, TodoError> {
    let raw = headers
        .get(CALLER_HEADER)
        .ok_or(TodoError::Unauthorized)?
        .to_str()
        .map_err(|_| TodoError::Unauthorized)?;

    let user_id = Uuid::parse_str(raw).map_err(|_| TodoError::Unauthorized)?;

    Ok(Caller(UserId::from_uuid(user_id)))
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Caller>()
            .copied()
            .ok_or_else(|| AppError::unauthorized("Caller identity missing"))
    }
}
