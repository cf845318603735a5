//! Services - orchestration logic over the ports.

pub mod todo_service;

pub use todo_service::{TodoService, TodoServiceError};
