//! HTTP Handlers
//!
//! Thin adapters: extract the caller and the payload, delegate to a use
//! case, serialize the result. No authorization logic lives here.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use kernel::id::TodoId;

use crate::application::config::TodosConfig;
use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, GetTodoUseCase, ListTodosUseCase,
    UpdateTodoInput, UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;
use crate::presentation::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};
use crate::presentation::extract::JsonBody;
use crate::presentation::middleware::Caller;

/// Shared state for todo handlers
#[derive(Clone)]
pub struct TodosAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TodosConfig>,
}

/// GET /todos
pub async fn list_todos<R>(
    State(state): State<TodosAppState<R>>,
    caller: Caller,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTodosUseCase::new(state.repo.clone());

    let todos = use_case.execute(caller.user_id()).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todos
pub async fn create_todo<R>(
    State(state): State<TodosAppState<R>>,
    caller: Caller,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateTodoUseCase::new(state.repo.clone(), state.config.clone());

    let input = CreateTodoInput {
        title: req.title,
        notes: req.notes,
        done: req.done,
    };

    let todo = use_case.execute(caller.user_id(), input).await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// GET /todos/{id}
pub async fn get_todo<R>(
    State(state): State<TodosAppState<R>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetTodoUseCase::new(state.repo.clone());

    let todo = use_case
        .execute(caller.user_id(), TodoId::from_uuid(id))
        .await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// PUT /todos/{id}
pub async fn update_todo<R>(
    State(state): State<TodosAppState<R>>,
    caller: Caller,
    Path(id): Path<Uuid>,
    JsonBody(req): JsonBody<UpdateTodoRequest>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateTodoUseCase::new(state.repo.clone(), state.config.clone());

    let input = UpdateTodoInput {
        title: req.title,
        notes: req.notes,
        done: req.done,
    };

    let todo = use_case
        .execute(caller.user_id(), TodoId::from_uuid(id), input)
        .await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodosAppState<R>>,
    caller: Caller,
    Path(id): Path<Uuid>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteTodoUseCase::new(state.repo.clone());

    use_case
        .execute(caller.user_id(), TodoId::from_uuid(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
