//! Controller: owns the engine and drives screen transitions.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Duration;
use tictactoe_engine::GameEngine;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::screen::{self, Screen, ScreenTransition};
use crate::screens::{BoardScreen, CelebrationScreen, SetupScreen};

/// Active screen in the state machine.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Board(BoardScreen),
    Celebration(CelebrationScreen),
}

/// Which screen is showing, for callers that only need to know the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Name-entry form.
    Setup,
    /// Board and scoreboard.
    Board,
    /// Winner screen.
    Celebration,
}

/// Owns the single [`GameEngine`] and the screen showing it.
///
/// Call [`Controller::run`] to start the event loop, or feed keys with
/// [`Controller::handle_key`] directly.
#[derive(Debug)]
pub struct Controller {
    engine: GameEngine,
    screen: ActiveScreen,
    default_x: Option<String>,
    default_o: Option<String>,
}

impl Controller {
    /// Creates a controller on the setup screen, pre-filled from `config`.
    #[instrument(skip(config))]
    pub fn new(config: &Config) -> Self {
        let default_x = config.player_x().clone();
        let default_o = config.player_o().clone();
        Self {
            engine: GameEngine::new(),
            screen: ActiveScreen::Setup(SetupScreen::new(default_x.clone(), default_o.clone())),
            default_x,
            default_o,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Which screen is showing.
    pub fn view(&self) -> View {
        match self.screen {
            ActiveScreen::Setup(_) => View::Setup,
            ActiveScreen::Board(_) => View::Board,
            ActiveScreen::Celebration(_) => View::Celebration,
        }
    }

    /// Advances cosmetic animation by one frame.
    pub fn tick(&mut self) {
        if let ActiveScreen::Celebration(s) = &mut self.screen {
            s.tick();
        }
    }

    /// Renders the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match &self.screen {
            ActiveScreen::Setup(s) => s.render(frame, &self.engine),
            ActiveScreen::Board(s) => s.render(frame, &self.engine),
            ActiveScreen::Celebration(s) => s.render(frame, &self.engine),
        }
    }

    /// Routes one key to the active screen. Returns `false` once the user quits.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return true;
        }
        if screen::is_interrupt(&key) {
            return self.apply_transition(ScreenTransition::Quit);
        }
        let transition = match &mut self.screen {
            ActiveScreen::Setup(s) => s.handle_key(key, &mut self.engine),
            ActiveScreen::Board(s) => s.handle_key(key, &mut self.engine),
            ActiveScreen::Celebration(s) => s.handle_key(key, &mut self.engine),
        };
        self.apply_transition(transition)
    }

    /// Applies a screen transition. Returns `false` on quit.
    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        debug!(?transition, "Applying screen transition");
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::GoToSetup => {
                info!("Navigating to Setup");
                self.screen = ActiveScreen::Setup(SetupScreen::new(
                    self.default_x.clone(),
                    self.default_o.clone(),
                ));
            }
            ScreenTransition::GoToBoard => {
                info!("Navigating to Board");
                self.screen = ActiveScreen::Board(BoardScreen::new());
            }
            ScreenTransition::GoToCelebration => {
                info!(winner = ?self.engine.celebration(), "Navigating to Celebration");
                self.screen = ActiveScreen::Celebration(CelebrationScreen::new());
            }
            ScreenTransition::Quit => {
                info!("Quitting");
                return false;
            }
        }
        true
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        loop {
            terminal.draw(|f| self.render(f))?;

            // Poll with a short timeout so the celebration keeps animating.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && !self.handle_key(key)
            {
                return Ok(());
            }
            self.tick();
        }
    }
}
