//! Code Tracker Server: stores editor file snapshots per API key.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use codetrack_core::config::{AppConfig, DatabaseProvider, LoggingConfig};
use codetrack_core::error::AppError;
use codetrack_database::store::SnapshotStore;
use codetrack_database::{DatabasePool, MemorySnapshotStore, SnapshotRepository};

#[tokio::main]
async fn main() {
    let env = std::env::var("CODETRACK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Loaded configuration (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing with a console sink and an append-only log file.
fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    std::fs::create_dir_all(&config.dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.file_path())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_lowercase()));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file));

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .init(),
        _ => registry.with(fmt::layer().pretty().with_target(true)).init(),
    }

    Ok(())
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Code Tracker v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Snapshot store ───────────────────────────────────
    let (store, db_pool): (Arc<dyn SnapshotStore>, Option<DatabasePool>) =
        match config.database.provider {
            DatabaseProvider::Postgres => {
                tracing::info!("Initializing database schema...");
                let db = codetrack_database::migration::initialize(&config.database).await?;
                tracing::info!("Database schema ready");
                let repo = SnapshotRepository::new(db.pool().clone());
                (Arc::new(repo), Some(db))
            }
            DatabaseProvider::Memory => {
                tracing::warn!("Using in-memory snapshot store; data is lost on restart");
                (Arc::new(MemorySnapshotStore::new()), None)
            }
        };

    // ── Step 2: Build and start HTTP server ─────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app_state = codetrack_api::AppState::new(config, store);
    let app = codetrack_api::build_app(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Code Tracker listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    // ── Step 3: Release the pool ─────────────────────────────────
    if let Some(db) = db_pool {
        if tokio::time::timeout(grace, db.close()).await.is_err() {
            tracing::warn!("Timed out closing database pool");
        }
    }

    tracing::info!("Code Tracker shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
