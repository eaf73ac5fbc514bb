//! The playing screen: scoreboard, grid and cursor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameEngine, Outcome, PlaceOutcome, Position, Square, rules};
use tracing::{debug, info, instrument};

use crate::screen::{self, Screen, ScreenTransition};
use crate::ui;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        _ => None,
    };
    target.unwrap_or(cursor)
}

/// State for the board screen.
#[derive(Debug, Clone)]
pub struct BoardScreen {
    cursor: Position,
    notice: Option<String>,
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardScreen {
    /// Creates the screen with the cursor on the center cell.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
            notice: None,
        }
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback from the last key, e.g. an ignored placement.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[instrument(skip(self, engine))]
    fn place(&mut self, position: Position, engine: &mut GameEngine) -> ScreenTransition {
        self.cursor = position;
        match engine.place(position.to_index()) {
            PlaceOutcome::Ignored(reason) => {
                debug!(%reason, "Placement ignored");
                self.notice = Some(reason.to_string());
                ScreenTransition::Stay
            }
            PlaceOutcome::Placed(mv) => {
                self.notice = Some(mv.to_string());
                ScreenTransition::Stay
            }
            PlaceOutcome::Decided(mv, outcome) => {
                info!(%mv, %outcome, "Round over");
                self.notice = None;
                match outcome {
                    Outcome::Winner(_) => ScreenTransition::GoToCelebration,
                    Outcome::Draw => ScreenTransition::Stay,
                }
            }
        }
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, engine: &GameEngine) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(ui::matchup(engine).unwrap_or_default())
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let headline = Paragraph::new(ui::headline(engine))
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(headline, rows[0]);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(34),
                Constraint::Percentage(33),
            ])
            .split(rows[2]);

        let scores = engine.scores();
        let (name_x, name_o) = engine
            .names()
            .map(|n| (n.x().to_string(), n.o().to_string()))
            .unwrap_or_default();
        let columns = [
            (scores.x(), name_x, Color::Blue),
            (scores.draws(), "Draws".to_string(), Color::Gray),
            (scores.o(), name_o, Color::Cyan),
        ];
        for ((count, label, color), col) in columns.into_iter().zip(cols.iter()) {
            let line = Line::from(vec![
                Span::styled(
                    count.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::raw(label),
            ]);
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), *col);
        }
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect, engine: &GameEngine) {
        let grid = ui::center_rect(area, 29, 11);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(grid);

        let line = rules::winning_line(engine.board()).map(|(_, cells)| cells);
        let decided = engine.phase().is_decided();

        for row in 0..3 {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(9),
                    Constraint::Length(1),
                    Constraint::Length(9),
                    Constraint::Length(1),
                    Constraint::Length(9),
                ])
                .split(rows[row * 2]);
            for col in 0..3 {
                if let Some(pos) = Position::from_row_col(row, col) {
                    let highlight = line.is_some_and(|cells| cells.contains(&pos));
                    self.render_cell(frame, cols[col * 2], engine, pos, highlight, decided);
                }
                if col < 2 {
                    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
                    frame.render_widget(sep, cols[col * 2 + 1]);
                }
            }
            if row < 2 {
                let sep = Paragraph::new("─".repeat(29)).style(Style::default().fg(Color::DarkGray));
                frame.render_widget(sep, rows[row * 2 + 1]);
            }
        }
    }

    fn render_cell(
        &self,
        frame: &mut Frame,
        area: Rect,
        engine: &GameEngine,
        pos: Position,
        highlight: bool,
        decided: bool,
    ) {
        let (symbol, mut style) = match engine.board().get(pos) {
            Square::Empty => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(mark) => (mark.to_string(), ui::mark_style(mark)),
        };
        if highlight {
            style = style.fg(Color::Yellow);
        } else if decided {
            style = style.add_modifier(Modifier::DIM);
        }
        if pos == self.cursor && !decided {
            style = style.bg(Color::White).fg(Color::Black);
        }

        let text = vec![Line::from(""), Line::from(Span::styled(symbol, style))];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }
}

impl Screen for BoardScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, engine: &GameEngine) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(11),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(ui::title("Tic Tac Toe"), chunks[0]);
        self.render_status(frame, chunks[1], engine);
        self.render_grid(frame, chunks[2], engine);

        let notice = Paragraph::new(self.notice.as_deref().unwrap_or(""))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(notice, chunks[3]);

        frame.render_widget(
            ui::help("Arrows/1-9: Move | Enter: Place | n: New Game | c: Change Players | q: Quit"),
            chunks[4],
        );
    }

    #[instrument(skip(self, engine))]
    fn handle_key(&mut self, key: KeyEvent, engine: &mut GameEngine) -> ScreenTransition {
        if screen::is_chord(&key) {
            return ScreenTransition::Stay;
        }
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, engine),
            KeyCode::Char(c @ '1'..='9') => {
                let cell = c as usize - '1' as usize;
                match Position::from_index(cell) {
                    Some(pos) => self.place(pos, engine),
                    None => ScreenTransition::Stay,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                engine.reset_round();
                self.notice = None;
                ScreenTransition::Stay
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                engine.reset_match();
                ScreenTransition::GoToSetup
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}
