//! `SQLite` repository implementation for the todolist backend.
//!
//! Entry points call [`setup_database`] with the resolved database path and
//! hand the resulting pool to [`SqliteTodoRepository`].

#![deny(unsafe_code)]

pub mod repositories;
pub mod setup;

// Re-export repository implementation
pub use repositories::SqliteTodoRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
