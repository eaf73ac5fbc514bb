//! Name-entry form shown before a match.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameEngine, Mark, NameError};
use tracing::{debug, info, instrument};

use crate::screen::{self, Screen, ScreenTransition};
use crate::ui;

/// State for the setup screen: two text inputs and a validation message.
#[derive(Debug, Clone, Default)]
pub struct SetupScreen {
    name_x: String,
    name_o: String,
    focus: Mark,
    error_message: Option<String>,
}

impl SetupScreen {
    /// Creates the form, optionally pre-filled.
    #[instrument]
    pub fn new(name_x: Option<String>, name_o: Option<String>) -> Self {
        Self {
            name_x: name_x.unwrap_or_default(),
            name_o: name_o.unwrap_or_default(),
            focus: Mark::X,
            error_message: None,
        }
    }

    /// Text typed for `mark`.
    pub fn input(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.name_x,
            Mark::O => &self.name_o,
        }
    }

    /// Field receiving keystrokes.
    pub fn focus(&self) -> Mark {
        self.focus
    }

    /// Message from the last rejected submit.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Mark::X => &mut self.name_x,
            Mark::O => &mut self.name_o,
        }
    }

    /// Submits both names to the engine.
    #[instrument(skip(self, engine))]
    fn submit(&mut self, engine: &mut GameEngine) -> ScreenTransition {
        match engine.start_match(&self.name_x, &self.name_o) {
            Ok(()) => {
                info!("Setup complete");
                self.error_message = None;
                ScreenTransition::GoToBoard
            }
            Err(NameError::Blank(mark)) => {
                debug!(%mark, "Blank name on submit");
                self.focus = mark;
                self.error_message = Some(format!("Player {} needs a name", mark));
                ScreenTransition::Stay
            }
        }
    }

    fn input_widget(&self, mark: Mark) -> Paragraph<'_> {
        let focused = self.focus == mark;
        let border = if focused {
            ui::mark_style(mark)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text = if focused {
            format!("{}_", self.input(mark))
        } else {
            self.input(mark).to_string()
        };
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("Player {} Name", mark)),
            )
    }
}

impl Screen for SetupScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _engine: &GameEngine) {
        let area = ui::center_rect(frame.area(), 50, 18);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        frame.render_widget(ui::title("Tic Tac Toe"), chunks[0]);

        let prompt = Paragraph::new("Enter player names to begin")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[1]);

        frame.render_widget(self.input_widget(Mark::X), chunks[2]);
        frame.render_widget(self.input_widget(Mark::O), chunks[3]);

        let error = Paragraph::new(self.error_message.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(error, chunks[4]);

        frame.render_widget(
            ui::help("Tab: Switch field | Enter: Start Game | Esc: Quit"),
            chunks[5],
        );
    }

    #[instrument(skip(self, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        if screen::is_chord(&key) {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.focused_input().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.opponent();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(engine),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut SetupScreen, engine: &mut GameEngine, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)), engine);
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut engine = GameEngine::new();
        let mut screen = SetupScreen::new(None, None);
        type_text(&mut screen, &mut engine, "Alicx");
        screen.handle_key(key(KeyCode::Backspace), &mut engine);
        type_text(&mut screen, &mut engine, "e");
        screen.handle_key(key(KeyCode::Tab), &mut engine);
        type_text(&mut screen, &mut engine, "Bob");
        assert_eq!(screen.input(Mark::X), "Alice");
        assert_eq!(screen.input(Mark::O), "Bob");
    }

    #[test]
    fn test_blank_name_stays_and_focuses_field() {
        let mut engine = GameEngine::new();
        let mut screen = SetupScreen::new(Some("Alice".into()), Some("   ".into()));
        let transition = screen.handle_key(key(KeyCode::Enter), &mut engine);
        assert_eq!(transition, ScreenTransition::Stay);
        assert_eq!(screen.focus(), Mark::O);
        assert_eq!(screen.error_message(), Some("Player O needs a name"));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_submit_starts_match() {
        let mut engine = GameEngine::new();
        let mut screen = SetupScreen::new(Some("Alice".into()), Some("Bob".into()));
        let transition = screen.handle_key(key(KeyCode::Enter), &mut engine);
        assert_eq!(transition, ScreenTransition::GoToBoard);
        assert_eq!(engine.current_player_name(), Some("Alice"));
    }

    #[test]
    fn test_q_is_typed_not_quit() {
        let mut engine = GameEngine::new();
        let mut screen = SetupScreen::new(None, None);
        assert_eq!(
            screen.handle_key(key(KeyCode::Char('q')), &mut engine),
            ScreenTransition::Stay
        );
        assert_eq!(screen.input(Mark::X), "q");
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &mut engine),
            ScreenTransition::Quit
        );
    }
}
