//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictactoe_tui::{Cli, Command, Config, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play { player_x, player_o } => {
            let config = Config::load_or_default(&cli.config)?.override_with(
                cli.log_file.clone(),
                player_x,
                player_o,
            );
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Replay {
            player_x,
            player_o,
            cells,
        } => {
            let config = Config::load_or_default(&cli.config)?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::io::stderr)
                .init();
            let report = replay(&player_x, &player_o, &cells)?;
            print!("{}", report);
            Ok(())
        }
    }
}

/// Sends tracing output to a file so it cannot corrupt the alternate screen.
fn init_file_logging(config: &Config) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    info!(log_file = %config.log_file().display(), "Logging initialized");
    Ok(())
}
