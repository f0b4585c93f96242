//! Update Todo Use Case
//!
//! Full replacement of the mutable task fields. Two-step ownership
//! enforcement: the load is owner-scoped, and the loaded record's owner is
//! re-checked against the caller before anything is written. The re-check
//! cannot fire through a correctly scoped store, but it is the authorization
//! contract of this operation and stays.

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::application::config::TodosConfig;
use crate::application::validate::validate_task_fields;
use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Input DTO for update - the complete set of mutable task fields
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    pub title: String,
    pub notes: Option<String>,
    pub done: bool,
}

/// Update todo use case
pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
    config: Arc<TodosConfig>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TodosConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        caller: UserId,
        id: TodoId,
        input: UpdateTodoInput,
    ) -> TodoResult<Todo> {
        // Reject bad payloads before touching the record
        let fields = validate_task_fields(
            &self.config,
            &input.title,
            input.notes.as_deref(),
            input.done,
        )?;

        let mut todo = self
            .repo
            .find_for_owner(id, &caller)
            .await?
            .ok_or(TodoError::NotFound)?;

        if !todo.is_owned_by(&caller) {
            return Err(TodoError::Forbidden);
        }

        todo.replace_fields(fields);

        // Zero rows means the record vanished between load and write
        if !self.repo.update(&todo).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %todo.id, owner = %todo.owner, "Todo updated");

        Ok(todo)
    }
}
