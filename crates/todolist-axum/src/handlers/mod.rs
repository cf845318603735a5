//! HTTP handlers, one module per API area.

pub mod todo_items;
