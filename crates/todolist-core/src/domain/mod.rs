//! Domain types for the todolist backend.

pub mod todo;

pub use todo::{NewTodoItem, TodoItem, TodoItemDto};
