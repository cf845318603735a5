//! Task handlers - CRUD operations for todo items.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};

use crate::error::HttpError;
use crate::state::AppState;
use todolist_core::TodoItemDto;

/// Request body for creating or replacing a task.
///
/// `name` defaults to empty when the field is missing so that absent and
/// blank names take the same validation path in the service.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// List all tasks.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TodoItemDto>>, HttpError> {
    Ok(Json(state.todos.list_items().await?))
}

/// Get a single task by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemDto>, HttpError> {
    match state.todos.get_item(id).await? {
        Some(dto) => Ok(Json(dto)),
        None => Err(HttpError::NotFound(format!("Task not found: {id}"))),
    }
}

/// Create a new task. Responds 201 with a Location header pointing at
/// the created resource.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<TodoItemData>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<TodoItemDto>), HttpError> {
    let dto = state.todos.create_item(req.name, req.is_complete).await?;
    let location = format!("/api/todoitems/{}", dto.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Replace a task's name and completion flag.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<TodoItemData>,
) -> Result<StatusCode, HttpError> {
    state.todos.update_item(id, req.name, req.is_complete).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a task.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.todos.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
