//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use todolist_core::TodoService;
use todolist_db::{SqliteTodoRepository, setup_database};

use crate::routes::create_router;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            database_path: PathBuf::from("todolist.db"),
            cors: CorsConfig::default(),
        }
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services needed by the handlers.
pub struct AxumContext {
    /// The task service.
    pub todos: Arc<TodoService>,
}

/// Bootstrap the web adapter: database pool, repository, task service.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        database_path = %config.database_path.display(),
        "bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let repo = Arc::new(SqliteTodoRepository::new(pool));
    let todos = Arc::new(TodoService::new(repo));

    Ok(AxumContext { todos })
}

/// Bootstrap and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config).await?;
    let router = create_router(ctx, &config.cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "todolist server listening");

    axum::serve(listener, router).await?;

    Ok(())
}
