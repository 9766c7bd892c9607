//! Fitlink server: gym discovery and membership backend.
//!
//! Main entry point: loads configuration, initializes logging, connects
//! to PostgreSQL, applies migrations and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use fitlink_core::config::AppConfig;
use fitlink_core::error::AppError;
use fitlink_database::DatabasePool;

#[tokio::main]
async fn main() {
    let env = std::env::var("FITLINK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing; `RUST_LOG` overrides the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Fitlink v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    fitlink_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Serve until shutdown ─────────────────────────────
    let pool = db.pool().clone();
    let result = fitlink_api::run_server(config, pool).await;

    db.close().await;
    tracing::info!("Fitlink server shut down gracefully");
    result
}
