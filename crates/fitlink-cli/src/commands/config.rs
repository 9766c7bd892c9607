//! Configuration inspection commands.

use clap::{Args, Subcommand};

use fitlink_core::config::AppConfig;
use fitlink_core::config::database::REDACTED_PASSWORD as REDACTED;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration with secrets masked
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommand::Show => {
            let masked = masked(config);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&masked)?),
                OutputFormat::Table => print_summary(&masked),
            }
        }
    }
    Ok(())
}

fn masked(config: &AppConfig) -> AppConfig {
    let mut config = config.clone();
    config.database.url = config.database.redacted_url();
    if !config.auth.jwt_secret.is_empty() {
        config.auth.jwt_secret = REDACTED.to_string();
    }
    config
}

fn print_summary(config: &AppConfig) {
    println!("Server");
    output::print_kv("bind", &config.server.bind_address());
    output::print_kv(
        "request timeout (s)",
        &config.server.request_timeout_seconds.to_string(),
    );
    output::print_kv("cors origins", &config.server.cors.allowed_origins.join(", "));
    println!("Database");
    output::print_kv("url", &config.database.url);
    output::print_kv(
        "connections",
        &format!(
            "{}..{}",
            config.database.min_connections, config.database.max_connections
        ),
    );
    println!("Auth");
    output::print_kv("jwt secret", &config.auth.jwt_secret);
    output::print_kv("token ttl (h)", &config.auth.token_ttl_hours.to_string());
    output::print_kv(
        "password min length",
        &config.auth.password_min_length.to_string(),
    );
    println!("Logging");
    output::print_kv("level", &config.logging.level);
    output::print_kv("format", &config.logging.format);
    println!("Discovery");
    output::print_kv(
        "page size",
        &format!(
            "{} (max {})",
            config.discovery.default_page_size, config.discovery.max_page_size
        ),
    );
    println!("Plans ({})", config.plans.currency);
    for (name, terms) in [
        ("daily", &config.plans.daily),
        ("weekly", &config.plans.weekly),
        ("bi_weekly", &config.plans.bi_weekly),
        ("monthly", &config.plans.monthly),
        ("quarterly", &config.plans.quarterly),
        ("half_year", &config.plans.half_year),
        ("yearly", &config.plans.yearly),
    ] {
        output::print_kv(name, &format!("{} days, {}", terms.days, terms.price));
    }
    println!("Bookings");
    output::print_kv(
        "default hourly rate",
        &config.bookings.default_hourly_rate.to_string(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_secrets() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = "super-secret".into();
        config.database.url = "postgres://fitlink:s3cret@db/fitlink".into();
        let shown = masked(&config);
        assert_eq!(shown.auth.jwt_secret, REDACTED);
        assert_eq!(shown.database.url, "postgres://fitlink:********@db/fitlink");
    }
}
