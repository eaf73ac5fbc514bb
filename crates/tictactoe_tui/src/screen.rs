//! Screen trait and transition type for the front-end state machine.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tictactoe_engine::GameEngine;

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] to drive the
/// [`Controller`](crate::Controller) state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Show the name-entry form.
    GoToSetup,
    /// Show the board.
    GoToBoard,
    /// Show the winner screen.
    GoToCelebration,
    /// Exit cleanly.
    Quit,
}

/// Trait implemented by each screen.
///
/// Screens own their view state (text input, cursor) and reach the game
/// only through the engine's intents.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, engine: &GameEngine);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition;
}

/// True for Ctrl+C, which quits from every screen.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// True when Ctrl or Alt is held; screens treat such keys as no-ops
/// rather than as their single-letter shortcuts.
pub fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
