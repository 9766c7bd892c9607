//! Subscription maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use fitlink_core::config::AppConfig;
use fitlink_database::repositories::{GymRepository, SubscriptionRepository};
use fitlink_entity::subscription::Subscription;
use fitlink_service::SubscriptionService;

use crate::output::{self, OutputFormat};

/// Arguments for subscription commands
#[derive(Debug, Args)]
pub struct SubscriptionArgs {
    /// Subscription subcommand
    #[command(subcommand)]
    pub command: SubscriptionCommand,
}

/// Subscription subcommands
#[derive(Debug, Subcommand)]
pub enum SubscriptionCommand {
    /// Move active subscriptions past their end date to expired
    Expire {
        /// List the overdue subscriptions without changing them
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Debug, Serialize, Tabled)]
struct OverdueRow {
    id: String,
    user_id: String,
    gym_id: String,
    plan: String,
    end_date: String,
}

impl From<&Subscription> for OverdueRow {
    fn from(s: &Subscription) -> Self {
        Self {
            id: s.id.to_string(),
            user_id: s.user_id.to_string(),
            gym_id: s.gym_id.to_string(),
            plan: s.plan_type.to_string(),
            end_date: s.end_date.to_string(),
        }
    }
}

/// Execute subscription commands
pub async fn execute(
    args: &SubscriptionArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let pool = super::create_db_pool(config).await?;
    let subscription_repo = Arc::new(SubscriptionRepository::new(pool.clone()));
    let today = chrono::Utc::now().date_naive();

    match &args.command {
        SubscriptionCommand::Expire { dry_run: true } => {
            let overdue = subscription_repo.list_overdue(today).await?;
            let rows: Vec<OverdueRow> = overdue.iter().map(OverdueRow::from).collect();
            output::print_list(&rows, format);
        }
        SubscriptionCommand::Expire { dry_run: false } => {
            let service = SubscriptionService::new(
                subscription_repo,
                Arc::new(GymRepository::new(pool.clone())),
                config.plans.clone(),
            );
            let expired = service.expire_overdue(today).await?;
            output::print_success(&format!("{expired} subscription(s) expired"));
        }
    }

    pool.close().await;
    Ok(())
}
