//! Core domain types and port definitions for the todolist backend.
//!
//! This crate holds the task entity, the repository port, and the task
//! service. Adapters (`SQLite`, axum) live in sibling crates and depend on
//! this one, never the other way around.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewTodoItem, TodoItem, TodoItemDto};
pub use ports::{TodoRepository, TodoRepositoryError};
pub use services::{TodoService, TodoServiceError};
