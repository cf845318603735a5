//! Task service - validates input and mediates between the HTTP adapter
//! and the repository port.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{NewTodoItem, TodoItemDto};
use crate::ports::{TodoRepository, TodoRepositoryError};

/// Errors raised at the service boundary.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The task name was empty or whitespace-only.
    #[error("Task name must not be empty")]
    InvalidName,

    /// No task exists for the given id.
    #[error("Task not found: {0}")]
    NotFound(i64),

    /// The store failed; fatal for the current request.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(id) => Self::NotFound(id),
            TodoRepositoryError::Database(msg) => Self::Storage(msg),
        }
    }
}

/// Service for task CRUD operations.
///
/// Owns the entity-to-DTO translation; the repository owns entity
/// lifecycle within the store. No state is cached between calls.
pub struct TodoService {
    repo: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Create a new task service.
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    /// List all tasks.
    pub async fn list_items(&self) -> Result<Vec<TodoItemDto>, TodoServiceError> {
        let items = self.repo.list().await?;
        Ok(items.iter().map(TodoItemDto::from).collect())
    }

    /// Get a task by id. Absence passes through as `None`; reads stay
    /// silent about missing rows, unlike mutations.
    pub async fn get_item(&self, id: i64) -> Result<Option<TodoItemDto>, TodoServiceError> {
        let item = self.repo.get(id).await?;
        Ok(item.as_ref().map(TodoItemDto::from))
    }

    /// Create a task and return its DTO with the store-assigned id.
    pub async fn create_item(
        &self,
        name: String,
        is_complete: bool,
    ) -> Result<TodoItemDto, TodoServiceError> {
        validate_name(&name)?;

        let item = self.repo.add(NewTodoItem { name, is_complete }).await?;
        tracing::debug!(id = item.id, "task created");

        Ok(TodoItemDto::from(&item))
    }

    /// Replace a task's name and completion flag together.
    pub async fn update_item(
        &self,
        id: i64,
        name: String,
        is_complete: bool,
    ) -> Result<(), TodoServiceError> {
        validate_name(&name)?;

        let mut item = self
            .repo
            .get(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))?;

        item.change(name, is_complete);
        self.repo.update(&item).await?;

        Ok(())
    }

    /// Delete a task by id.
    pub async fn delete_item(&self, id: i64) -> Result<(), TodoServiceError> {
        let item = self
            .repo
            .get(id)
            .await?
            .ok_or(TodoServiceError::NotFound(id))?;

        self.repo.delete(&item).await?;
        tracing::debug!(id, "task deleted");

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), TodoServiceError> {
    if name.trim().is_empty() {
        return Err(TodoServiceError::InvalidName);
    }
    Ok(())
}
