//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one keyboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Pre-fill the name for player X
        #[arg(long)]
        player_x: Option<String>,

        /// Pre-fill the name for player O
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Play a fixed sequence of cells and print the result
    Replay {
        /// Name for player X
        #[arg(long)]
        player_x: String,

        /// Name for player O
        #[arg(long)]
        player_o: String,

        /// Cells to play in order, row-major 0-8
        cells: Vec<usize>,
    },
}

impl Cli {
    /// The requested command, `play` with no pre-filled names if omitted.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            player_x: None,
            player_o: None,
        })
    }
}
