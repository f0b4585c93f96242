//! Create Todo Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::TodosConfig;
use crate::application::validate::validate_task_fields;
use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// Input DTO for create
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub title: String,
    pub notes: Option<String>,
    pub done: bool,
}

/// Create todo use case
///
/// The owner is always the caller. The input carries no owner field, so a
/// client-supplied owner cannot even reach this point.
pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
    config: Arc<TodosConfig>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<TodosConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, caller: UserId, input: CreateTodoInput) -> TodoResult<Todo> {
        let fields = validate_task_fields(
            &self.config,
            &input.title,
            input.notes.as_deref(),
            input.done,
        )?;

        let todo = Todo::new(caller, fields);

        self.repo.insert(&todo).await?;

        tracing::info!(todo_id = %todo.id, owner = %todo.owner, "Todo created");

        Ok(todo)
    }
}
