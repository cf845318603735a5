//! Axum-specific error types and mappings.
//!
//! This module provides the adapter's error type and the explicit
//! error-kind to status-code table for service errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use todolist_core::TodoServiceError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<TodoServiceError> for HttpError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::InvalidName => Self::BadRequest(err.to_string()),
            TodoServiceError::NotFound(id) => Self::NotFound(format!("Task not found: {id}")),
            TodoServiceError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
        }
    }
}
