//! PostgreSQL Repository Implementation
//!
//! Every statement carries the `owner_id` predicate; ownership scoping is
//! enforced in SQL, not in memory. Each operation is a single statement, so
//! PostgreSQL's per-statement atomicity is all the transactional machinery
//! this service needs.

use chrono::{DateTime, Utc};
use kernel::id::{TodoId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Todo;
use crate::domain::repository::TodoRepository;
use crate::error::TodoResult;

/// PostgreSQL-backed todo repository
#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for PgTodoRepository {
    async fn list_for_owner(&self, owner: &UserId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                todo_id,
                owner_id,
                title,
                notes,
                done,
                created_at,
                updated_at
            FROM todos
            WHERE owner_id = $1
            ORDER BY created_at, todo_id
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn insert(&self, todo: &Todo) -> TodoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO todos (
                todo_id,
                owner_id,
                title,
                notes,
                done,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(todo.id.as_uuid())
        .bind(todo.owner.as_uuid())
        .bind(&todo.title)
        .bind(&todo.notes)
        .bind(todo.done)
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(todo_id = %todo.id, "Todo row inserted");

        Ok(())
    }

    async fn find_for_owner(&self, id: TodoId, owner: &UserId) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT
                todo_id,
                owner_id,
                title,
                notes,
                done,
                created_at,
                updated_at
            FROM todos
            WHERE todo_id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn update(&self, todo: &Todo) -> TodoResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE todos
            SET title = $3, notes = $4, done = $5, updated_at = $6
            WHERE todo_id = $1 AND owner_id = $2
            "#,
        )
        .bind(todo.id.as_uuid())
        .bind(todo.owner.as_uuid())
        .bind(&todo.title)
        .bind(&todo.notes)
        .bind(todo.done)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_for_owner(&self, id: TodoId, owner: &UserId) -> TodoResult<bool> {
        let affected = sqlx::query(
            r#"
            DELETE FROM todos
            WHERE todo_id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.as_uuid())
        .bind(owner.as_uuid())
        .execute(&self.pool)
        .await?
        .rows_affected();

        if affected > 0 {
            tracing::debug!(todo_id = %id, "Todo row deleted");
        }

        Ok(affected > 0)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct TodoRow {
    todo_id: Uuid,
    owner_id: Uuid,
    title: String,
    notes: Option<String>,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            id: TodoId::from_uuid(self.todo_id),
            owner: UserId::from_uuid(self.owner_id),
            title: self.title,
            notes: self.notes,
            done: self.done,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
