//! `SQLite` implementation of the `TodoRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use todolist_core::domain::{NewTodoItem, TodoItem};
use todolist_core::ports::{TodoRepository, TodoRepositoryError};

/// `SQLite` implementation of the `TodoRepository` trait.
///
/// Holds a connection pool; every operation is a single statement, so each
/// call is its own atomic unit against the store.
pub struct SqliteTodoRepository {
    pool: SqlitePool,
}

impl SqliteTodoRepository {
    /// Create a new `SQLite` task repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: &sqlx::sqlite::SqliteRow) -> TodoItem {
    TodoItem {
        id: row.get("id"),
        name: row.get("name"),
        is_complete: row.get("is_complete"),
        // Intentionally not mapped to storage
        secret: None,
    }
}

fn database_error(e: sqlx::Error) -> TodoRepositoryError {
    TodoRepositoryError::Database(e.to_string())
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn list(&self) -> Result<Vec<TodoItem>, TodoRepositoryError> {
        let rows = sqlx::query("SELECT id, name, is_complete FROM todo_items")
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.iter().map(row_to_item).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TodoItem>, TodoRepositoryError> {
        let row = sqlx::query("SELECT id, name, is_complete FROM todo_items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.as_ref().map(row_to_item))
    }

    async fn add(&self, item: NewTodoItem) -> Result<TodoItem, TodoRepositoryError> {
        let result = sqlx::query("INSERT INTO todo_items (name, is_complete) VALUES (?, ?)")
            .bind(&item.name)
            .bind(item.is_complete)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(TodoItem {
            id: result.last_insert_rowid(),
            name: item.name,
            is_complete: item.is_complete,
            secret: None,
        })
    }

    async fn update(&self, item: &TodoItem) -> Result<(), TodoRepositoryError> {
        let result = sqlx::query("UPDATE todo_items SET name = ?, is_complete = ? WHERE id = ?")
            .bind(&item.name)
            .bind(item.is_complete)
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        // Zero rows means the row vanished between load and write, most
        // likely a concurrent delete. Surface that as NotFound rather
        // than a generic fault.
        if result.rows_affected() == 0 {
            return Err(TodoRepositoryError::NotFound(item.id));
        }

        Ok(())
    }

    async fn delete(&self, item: &TodoItem) -> Result<(), TodoRepositoryError> {
        sqlx::query("DELETE FROM todo_items WHERE id = ?")
            .bind(item.id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
