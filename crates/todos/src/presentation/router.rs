//! Todos Router

use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::application::config::TodosConfig;
use crate::domain::repository::TodoRepository;
use crate::infra::postgres::PgTodoRepository;
use crate::presentation::handlers::{self, TodosAppState};
use crate::presentation::middleware::require_caller;

/// Create the todos router with PostgreSQL repository
pub fn todos_router(repo: PgTodoRepository, config: TodosConfig) -> Router {
    todos_router_generic(repo, config)
}

/// Create a generic todos router for any repository implementation
pub fn todos_router_generic<R>(repo: R, config: TodosConfig) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let state = TodosAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/{id}",
            get(handlers::get_todo::<R>)
                .put(handlers::update_todo::<R>)
                .delete(handlers::delete_todo::<R>),
        )
        .layer(middleware::from_fn(require_caller))
        .with_state(state)
}
