//! Get Todo Use Case

use std::sync::Arc;

use kernel::id::{TodoId, UserId};

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::{TodoError, TodoResult};

/// Get todo use case
///
/// The lookup is owner-scoped, so a record owned by someone else resolves
/// exactly like a missing one. Reads never answer 403.
pub struct GetTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> GetTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, id: TodoId) -> TodoResult<Todo> {
        let todo = self
            .repo
            .find_for_owner(id, &caller)
            .await?
            .ok_or(TodoError::NotFound)?;

        Ok(todo)
    }
}
