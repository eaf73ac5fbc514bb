//! Shared rendering helpers and status text.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameEngine, Mark, Phase};

/// The status line above the board.
pub fn headline(engine: &GameEngine) -> String {
    match engine.phase() {
        Phase::NotStarted => "Enter player names to begin".to_string(),
        Phase::InProgress(_) => match engine.current_player_name() {
            Some(name) => format!("{}'s Turn", name),
            None => "Waiting for players".to_string(),
        },
        Phase::RoundWon(mark) => match engine.winner_name() {
            Some(name) => format!("{} Wins!", name),
            None => format!("{} Wins!", mark),
        },
        Phase::RoundDrawn => "It's a Draw!".to_string(),
    }
}

/// "Alice (X) vs Bob (O)", once names are bound.
pub fn matchup(engine: &GameEngine) -> Option<String> {
    engine
        .names()
        .map(|names| format!("{} (X) vs {} (O)", names.x(), names.o()))
}

/// Colour used for a mark everywhere it appears.
pub fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Centered bold title with a border.
pub fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// Dim one-line key help.
pub fn help(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_follows_phase() {
        let mut engine = GameEngine::new();
        assert_eq!(headline(&engine), "Enter player names to begin");

        engine.start_match("Alice", "Bob").unwrap();
        assert_eq!(headline(&engine), "Alice's Turn");
        engine.place(0);
        assert_eq!(headline(&engine), "Bob's Turn");

        for cell in [3, 1, 4, 2] {
            engine.place(cell);
        }
        assert_eq!(headline(&engine), "Alice Wins!");

        engine.reset_round();
        for cell in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            engine.place(cell);
        }
        assert_eq!(headline(&engine), "It's a Draw!");
    }

    #[test]
    fn test_matchup() {
        let mut engine = GameEngine::new();
        assert_eq!(matchup(&engine), None);
        engine.start_match("Alice", "Bob").unwrap();
        assert_eq!(matchup(&engine).as_deref(), Some("Alice (X) vs Bob (O)"));
    }

    #[test]
    fn test_center_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let inner = center_rect(area, 40, 12);
        assert_eq!((inner.width, inner.height), (40, 12));
        assert_eq!((inner.x, inner.y), (20, 6));
    }
}
