//! The task entity and its boundary projection.

use serde::{Deserialize, Serialize};

/// A persisted task.
///
/// The id is a store-assigned surrogate key. `name` is never empty or
/// whitespace-only once the item exists; the service enforces this before
/// anything reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
    /// Internal field, never mapped to storage and never serialized.
    /// Always `None` for items loaded from the store.
    pub secret: Option<String>,
}

impl TodoItem {
    /// Replace name and completion flag together. This is the only
    /// mutation the entity supports.
    pub fn change(&mut self, name: String, is_complete: bool) {
        self.name = name;
        self.is_complete = is_complete;
    }
}

/// Data for a task that has not been inserted yet (no id).
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    pub name: String,
    pub is_complete: bool,
}

/// Boundary-facing projection of a task, used for requests and responses.
///
/// Serializes as `{"id": ..., "name": ..., "isComplete": ...}`. The
/// entity's internal `secret` field has no counterpart here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            is_complete: item.is_complete,
        }
    }
}
