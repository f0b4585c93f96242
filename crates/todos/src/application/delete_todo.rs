//! Delete Todo Use Case
//!
//! Same two-step ownership enforcement as update: owner-scoped load, then an
//! explicit owner re-check before the row is removed. Deletion is permanent;
//! a second delete of the same id reports not-found.

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Delete todo use case
pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, id: TodoId) -> TodoResult<()> {
        let todo = self
            .repo
            .find_for_owner(id, &caller)
            .await?
            .ok_or(TodoError::NotFound)?;

        if !todo.is_owned_by(&caller) {
            return Err(TodoError::Forbidden);
        }

        if !self.repo.delete_for_owner(id, &caller).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(todo_id = %id, owner = %caller, "Todo deleted");

        Ok(())
    }
}
