//! Terminal front end for two-player tic-tac-toe.
//!
//! The [`Controller`] owns one [`GameEngine`](tictactoe_engine::GameEngine)
//! and forwards key presses to it through the active [`Screen`]. Rendering
//! only reads engine state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod replay;
mod screen;
mod screens;
mod ui;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

pub use cli::{Cli, Command};
pub use config::{Config, ConfigError};
pub use controller::{Controller, View};
pub use replay::replay;
pub use screen::{Screen, ScreenTransition};
pub use screens::{BoardScreen, CelebrationScreen, SetupScreen, move_cursor};
pub use ui::{headline, matchup};

/// Takes over the terminal and plays until the user quits.
#[instrument(skip(config))]
pub fn run_tui(config: &Config) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut controller = Controller::new(config);
    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}
