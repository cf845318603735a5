//! Server entry point - parses arguments, initializes tracing, and starts
//! the Axum server via the bootstrap composition root.

use clap::Parser;
use std::path::PathBuf;

use todolist_axum::{ServerConfig, start_server};

#[derive(Parser)]
#[command(name = "todolist-server", about = "Task-tracking HTTP backend")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Path to the SQLite database file
    #[arg(long, default_value = "todolist.db")]
    db: PathBuf,

    /// Allowed CORS origin (repeatable; all origins allowed when omitted)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::with_defaults();
    config.port = args.port;
    config.database_path = args.db;
    if !args.cors_origins.is_empty() {
        config = config.with_allowed_origins(args.cors_origins);
    }

    start_server(config).await
}
