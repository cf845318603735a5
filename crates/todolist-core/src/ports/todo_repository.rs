//! Task repository port definition.
//!
//! This port defines the interface for persisting and retrieving tasks.
//! Implementations handle the actual storage mechanism (`SQLite`, etc.).

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{NewTodoItem, TodoItem};

/// Errors that can occur in task persistence operations.
#[derive(Debug, Error)]
pub enum TodoRepositoryError {
    /// The targeted row does not exist. Updates surface this instead of a
    /// generic fault when the row was removed by a concurrent delete.
    #[error("Task not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

/// Port for task persistence operations.
///
/// Every call is its own atomic unit against the store; no transactions
/// span multiple operations.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// List all tasks in store order.
    async fn list(&self) -> Result<Vec<TodoItem>, TodoRepositoryError>;

    /// Look up a task by id. Absence is `Ok(None)`, not an error.
    async fn get(&self, id: i64) -> Result<Option<TodoItem>, TodoRepositoryError>;

    /// Insert a new task and return it with the store-assigned id.
    async fn add(&self, item: NewTodoItem) -> Result<TodoItem, TodoRepositoryError>;

    /// Persist in-place changes to an existing task. Returns `NotFound`
    /// when the row no longer exists.
    async fn update(&self, item: &TodoItem) -> Result<(), TodoRepositoryError>;

    /// Remove the row matching the given task.
    async fn delete(&self, item: &TodoItem) -> Result<(), TodoRepositoryError>;
}
