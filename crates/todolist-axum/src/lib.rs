//! Axum web adapter for the todolist backend.
//!
//! Routes HTTP requests to the task service and translates service errors
//! to status codes. All infrastructure wiring happens in [`bootstrap`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the server binary only
use clap as _;
use tracing_subscriber as _;

// Silence unused dev-dependency warnings for the integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
