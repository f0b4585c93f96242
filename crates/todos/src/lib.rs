//! Todos Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entity, value objects, repository trait
//! - `application/` - Use cases, one per operation
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, caller middleware
//!
//! ## Ownership Model
//! - Every todo belongs to exactly one user, fixed at creation
//! - All reads and writes are scoped to the caller's own records
//! - A foreign record is indistinguishable from a missing one on reads (404)
//! - Update and delete re-check ownership after the scoped load (403 on
//!   mismatch), even though the scoped lookup already filters by owner

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TodosConfig;
pub use error::{TodoError, TodoResult};
pub use infra::postgres::PgTodoRepository;
pub use presentation::router::todos_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
