//! Port definitions for the todolist backend.

pub mod todo_repository;

pub use todo_repository::{TodoRepository, TodoRepositoryError};
