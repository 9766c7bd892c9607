//! Gym moderation commands.

use anyhow::Context;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use fitlink_core::config::AppConfig;
use fitlink_core::traits::Lifecycle;
use fitlink_database::repositories::GymRepository;
use fitlink_entity::gym::{Gym, GymStatus};

use crate::output::{self, OutputFormat};

/// Arguments for gym commands
#[derive(Debug, Args)]
pub struct GymArgs {
    /// Gym subcommand
    #[command(subcommand)]
    pub command: GymCommand,
}

/// Gym subcommands
#[derive(Debug, Subcommand)]
pub enum GymCommand {
    /// Mark a gym as verified
    Verify {
        /// Gym ID
        id: Uuid,
        /// Also approve the gym if it is pending
        #[arg(long)]
        approve: bool,
    },
}

/// Gym display row for table output
#[derive(Debug, Serialize, Tabled)]
struct GymRow {
    id: String,
    name: String,
    city: String,
    status: String,
    verified: bool,
}

impl From<&Gym> for GymRow {
    fn from(gym: &Gym) -> Self {
        Self {
            id: gym.id.to_string(),
            name: gym.name.clone(),
            city: gym.city.clone(),
            status: gym.status.to_string(),
            verified: gym.is_verified,
        }
    }
}

/// Execute gym commands
pub async fn execute(
    args: &GymArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let pool = super::create_db_pool(config).await?;
    let gym_repo = GymRepository::new(pool.clone());

    match &args.command {
        GymCommand::Verify { id, approve } => {
            let gym = gym_repo
                .find_by_id(*id)
                .await?
                .with_context(|| format!("Gym '{id}' not found"))?;

            if *approve && gym.status == GymStatus::Pending {
                let status = gym.status.transition_to(GymStatus::Approved)?;
                gym_repo.set_status(gym.id, status).await?;
            } else if gym.status != GymStatus::Approved {
                output::print_warning(&format!(
                    "Gym is '{}'; it stays hidden from discovery until approved",
                    gym.status
                ));
            }

            let gym = gym_repo.set_verified(gym.id, true).await?;
            tracing::info!(gym_id = %gym.id, "Gym verified from CLI");

            output::print_list(&[GymRow::from(&gym)], format);
            if gym.is_publicly_visible() {
                output::print_success(&format!("Gym '{}' verified and listed", gym.name));
            } else {
                output::print_success(&format!("Gym '{}' verified", gym.name));
            }
        }
    }

    pool.close().await;
    Ok(())
}
