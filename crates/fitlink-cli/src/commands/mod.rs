//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod gym;
pub mod migrate;
pub mod subscription;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sqlx::PgPool;

use fitlink_core::config::AppConfig;
use fitlink_database::connection::DatabasePool;

use crate::output::OutputFormat;

/// Fitlink operator tooling
#[derive(Debug, Parser)]
#[command(name = "fitlink-cli", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (`config/{env}.toml`)
    #[arg(short, long, env = "FITLINK_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Admin account management
    Admin(admin::AdminArgs),
    /// Gym moderation
    Gym(gym::GymArgs),
    /// Subscription maintenance
    Subscriptions(subscription::SubscriptionArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> anyhow::Result<()> {
        let config = load_config(&self.env)?;
        match &self.command {
            Commands::Migrate => migrate::execute(&config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::Gym(args) => gym::execute(args, &config, self.format).await,
            Commands::Subscriptions(args) => {
                subscription::execute(args, &config, self.format).await
            }
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Load configuration for the selected environment
pub fn load_config(env: &str) -> anyhow::Result<AppConfig> {
    AppConfig::load(env).with_context(|| format!("Failed to load config for '{env}'"))
}

/// Connect to the configured database
pub async fn create_db_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    let pool = DatabasePool::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    Ok(pool.into_pool())
}
