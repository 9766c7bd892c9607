//! Database migration command.

use anyhow::Context;

use fitlink_core::config::AppConfig;

use crate::output;

/// Apply every pending migration
pub async fn execute(config: &AppConfig) -> anyhow::Result<()> {
    let pool = super::create_db_pool(config).await?;

    println!("Running database migrations...");
    fitlink_database::migration::run_migrations(&pool)
        .await
        .context("Migration failed")?;
    output::print_success("All migrations applied successfully.");

    pool.close().await;
    Ok(())
}
