//! telugu-tutor CLI entry point.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use telugu_tutor::cli::{commands, Cli, Commands};
use telugu_tutor::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let settings = match &cli.command {
        Commands::Config { .. } => commands::config_settings(config_path.as_deref()),
        _ => Settings::load_from(config_path.as_deref())?,
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("telugu_tutor={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Execute command
    match &cli.command {
        Commands::Score {
            expected,
            actual,
            confidence,
            json,
        } => {
            commands::run_score(expected, actual, *confidence, *json, &settings)?;
        }

        Commands::Reorder { words, classes } => {
            commands::run_reorder(words, *classes)?;
        }

        Commands::Video { input, json } => {
            commands::run_video(input, *json)?;
        }

        Commands::Serve { host, port } => {
            commands::run_serve(host.clone(), *port, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &settings, config_path)?;
        }
    }

    Ok(())
}
