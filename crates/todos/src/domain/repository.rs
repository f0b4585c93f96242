//! Repository Traits
//!
//! Interface for data persistence. Implementation is in the infra layer.
//! Every lookup and write is scoped to an owner; there is deliberately no
//! unscoped accessor.

use kernel::id::{TodoId, UserId};

use crate::domain::entity::Todo;
use crate::error::TodoResult;

/// Todo repository trait
#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// List all todos owned by `owner`, in creation order
    async fn list_for_owner(&self, owner: &UserId) -> TodoResult<Vec<Todo>>;

    /// Persist a new todo
    async fn insert(&self, todo: &Todo) -> TodoResult<()>;

    /// Find a todo by id within `owner`'s set. A foreign record yields `None`.
    async fn find_for_owner(&self, id: TodoId, owner: &UserId) -> TodoResult<Option<Todo>>;

    /// Write back the mutable fields of `todo`, still scoped to its owner.
    /// Returns `false` when no row matched (deleted concurrently).
    async fn update(&self, todo: &Todo) -> TodoResult<bool>;

    /// Delete a todo by id within `owner`'s set.
    /// Returns `false` when no row matched.
    async fn delete_for_owner(&self, id: TodoId, owner: &UserId) -> TodoResult<bool>;
}
