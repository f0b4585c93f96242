//! Domain Entities
//!
//! The `Todo` entity. A todo has no lifecycle states beyond existing or not;
//! `done` is an ordinary mutable field.

use chrono::{DateTime, Utc};
use kernel::id::{TodoId, UserId};

use crate::domain::value_objects::{TodoNotes, TodoTitle};

/// The validated, mutable task fields of a todo
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: TodoTitle,
    pub notes: Option<TodoNotes>,
    pub done: bool,
}

/// Todo entity - a single task record owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    /// Fixed at creation, never reassigned
    pub owner: UserId,
    pub title: String,
    pub notes: Option<String>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new todo owned by `owner`
    pub fn new(owner: UserId, fields: TaskFields) -> Self {
        let now = Utc::now();
        Self {
            id: TodoId::new(),
            owner,
            title: fields.title.into_string(),
            notes: fields.notes.map(TodoNotes::into_string),
            done: fields.done,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fully replace the mutable task fields. Identity, owner, and
    /// `created_at` are untouched.
    pub fn replace_fields(&mut self, fields: TaskFields) {
        self.title = fields.title.into_string();
        self.notes = fields.notes.map(TodoNotes::into_string);
        self.done = fields.done;
        self.updated_at = Utc::now();
    }

    /// Whether `caller` owns this record
    pub fn is_owned_by(&self, caller: &UserId) -> bool {
        self.owner == *caller
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, done: bool) -> TaskFields {
        TaskFields {
            title: TodoTitle::parse(title, 200).unwrap(),
            notes: None,
            done,
        }
    }

    #[test]
    fn test_new_todo_belongs_to_owner() {
        let owner = UserId::new();
        let todo = Todo::new(owner, fields("Buy milk", false));

        assert!(todo.is_owned_by(&owner));
        assert!(!todo.is_owned_by(&UserId::new()));
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.done);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_replace_fields_keeps_identity_and_owner() {
        let owner = UserId::new();
        let mut todo = Todo::new(owner, fields("Buy milk", false));
        let id = todo.id;
        let created_at = todo.created_at;

        todo.replace_fields(fields("Buy milk", true));

        assert_eq!(todo.id, id);
        assert_eq!(todo.owner, owner);
        assert_eq!(todo.created_at, created_at);
        assert!(todo.done);
        assert!(todo.updated_at >= created_at);
    }

    #[test]
    fn test_replace_fields_clears_absent_notes() {
        let owner = UserId::new();
        let mut todo = Todo::new(
            owner,
            TaskFields {
                title: TodoTitle::parse("Buy milk", 200).unwrap(),
                notes: Some(TodoNotes::parse("2 liters", 2000).unwrap()),
                done: false,
            },
        );
        assert_eq!(todo.notes.as_deref(), Some("2 liters"));

        todo.replace_fields(fields("Buy milk", false));
        assert_eq!(todo.notes, None);
    }
}
