//! Winner screen shown after a won round.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tictactoe_engine::GameEngine;
use tracing::instrument;

use crate::screen::{self, Screen, ScreenTransition};
use crate::ui;

const SPARKLES: [&str; 5] = ["*", "+", "✦", "✧", "·"];

const TROPHY: [&str; 5] = [
    r"  ___________  ",
    r" '._==_==_=_.' ",
    r"  .-\:      /-.",
    r"    '::.  .'   ",
    r"     _|__|_    ",
];

/// State for the celebration screen.
#[derive(Debug, Clone, Default)]
pub struct CelebrationScreen {
    tick: u64,
}

impl CelebrationScreen {
    /// Creates the screen.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the sparkle animation by one frame.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Sparkle glyph for a cell at frame `tick`, or `None` to leave it blank.
    ///
    /// A cheap hash keeps the pattern stable between frames while shifting
    /// a few sparkles each tick.
    fn sparkle(x: u16, y: u16, tick: u64) -> Option<&'static str> {
        let h = (u64::from(x).wrapping_mul(73_856_093) ^ u64::from(y).wrapping_mul(19_349_663))
            .wrapping_add(tick / 4);
        (h % 23 == 0).then(|| SPARKLES[(h % SPARKLES.len() as u64) as usize])
    }

    fn render_sparkles(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = (0..area.height)
            .map(|y| {
                let row: String = (0..area.width)
                    .map(|x| Self::sparkle(x, y, self.tick).unwrap_or(" "))
                    .collect();
                Line::from(row)
            })
            .collect();
        let palette = [Color::Yellow, Color::Magenta, Color::LightBlue];
        let color = palette[(self.tick / 8 % palette.len() as u64) as usize];
        frame.render_widget(Paragraph::new(lines).style(Style::default().fg(color)), area);
    }
}

impl Screen for CelebrationScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, engine: &GameEngine) {
        let area = frame.area();
        self.render_sparkles(frame, area);

        let card = ui::center_rect(area, 44, 17);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(card);
        frame.render_widget(ratatui::widgets::Clear, card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(inner);

        let trophy: Vec<Line> = TROPHY.iter().map(|l| Line::from(*l)).collect();
        frame.render_widget(
            Paragraph::new(trophy)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let banner = Paragraph::new("Winner!")
            .style(
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[1]);

        let name = engine.celebration().unwrap_or_default();
        let style = engine
            .winner()
            .map(ui::mark_style)
            .unwrap_or_default()
            .add_modifier(Modifier::BOLD);
        frame.render_widget(
            Paragraph::new(name).style(style).alignment(Alignment::Center),
            chunks[2],
        );

        frame.render_widget(
            ui::help("Enter/p: Play Again | c: New Players | b: Board | q: Quit"),
            chunks[4],
        );
    }

    #[instrument(skip(self, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        if screen::is_chord(&key) {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => {
                engine.reset_round();
                ScreenTransition::GoToBoard
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                engine.reset_match();
                ScreenTransition::GoToSetup
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                engine.dismiss_celebration();
                ScreenTransition::GoToBoard
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
