//! Application Layer - Use Cases
//!
//! One use case per operation. The authenticated caller is an explicit
//! parameter everywhere; there is no ambient identity.

pub mod config;
pub mod create_todo;
pub mod delete_todo;
pub mod get_todo;
pub mod list_todos;
pub mod update_todo;

mod validate;

pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use get_todo::GetTodoUseCase;
pub use list_todos::ListTodosUseCase;
pub use update_todo::{UpdateTodoInput, UpdateTodoUseCase};
