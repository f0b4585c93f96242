//! List Todos Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// List todos use case - read-only, scoped to the caller
pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId) -> TodoResult<Vec<Todo>> {
        let todos = self.repo.list_for_owner(&caller).await?;

        tracing::debug!(caller = %caller, count = todos.len(), "Listed todos");

        Ok(todos)
    }
}
