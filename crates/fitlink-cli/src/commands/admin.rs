//! Admin account management commands.

use anyhow::Context;
use clap::{Args, Subcommand};

use fitlink_auth::{PasswordHasher, PasswordValidator};
use fitlink_core::config::AppConfig;
use fitlink_database::repositories::UserRepository;
use fitlink_entity::user::{CreateUser, UserRole};

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> anyhow::Result<()> {
    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
        } => create_admin(config, name.clone(), email.clone(), password.clone()).await,
    }
}

async fn create_admin(
    config: &AppConfig,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let name = match name {
        Some(n) => n,
        None => dialoguer::Input::new()
            .with_prompt("Admin name")
            .interact_text()
            .context("Input error")?,
    };

    let email = match email {
        Some(e) => e,
        None => dialoguer::Input::new()
            .with_prompt("Admin email")
            .interact_text()
            .context("Input error")?,
    };
    let email = email.trim().to_lowercase();

    let password = match password {
        Some(p) => p,
        None => dialoguer::Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .context("Input error")?,
    };

    PasswordValidator::new(&config.auth).validate(&password, &[&name, &email])?;
    let password_hash = PasswordHasher::new().hash(&password)?;

    let pool = super::create_db_pool(config).await?;
    let user_repo = UserRepository::new(pool.clone());

    if user_repo.find_by_email(&email).await?.is_some() {
        anyhow::bail!("A user with email '{email}' already exists");
    }

    let user = user_repo
        .create(&CreateUser {
            name,
            email: email.clone(),
            password_hash,
            role: UserRole::Admin,
            phone: None,
            location: None,
        })
        .await
        .context("Failed to create admin")?;

    output::print_success(&format!("Admin '{email}' created (id: {})", user.id));
    pool.close().await;
    Ok(())
}
