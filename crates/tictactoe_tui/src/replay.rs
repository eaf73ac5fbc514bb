//! Headless play-through of a fixed move list.

use tictactoe_engine::{GameEngine, NameError, PlaceOutcome};
use tracing::{info, instrument, warn};

use crate::ui;

/// Plays `cells` in order for the named players and describes the result.
///
/// Ignored placements are listed rather than aborting the run, matching how
/// the engine treats them.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(player_x: &str, player_o: &str, cells: &[usize]) -> Result<String, NameError> {
    let mut engine = GameEngine::new();
    engine.start_match(player_x, player_o)?;

    let mut report = String::new();
    for (step, &cell) in cells.iter().enumerate() {
        match engine.place(cell) {
            PlaceOutcome::Ignored(reason) => {
                warn!(step, cell, %reason, "Move ignored");
                report.push_str(&format!("move {} ignored: {}\n", step + 1, reason));
            }
            PlaceOutcome::Placed(_) | PlaceOutcome::Decided(..) => {}
        }
    }

    let scores = engine.scores();
    let names = engine.names();
    let (name_x, name_o) = names.map(|n| (n.x(), n.o())).unwrap_or_default();
    report.push_str(&engine.board().display());
    report.push_str("\n\n");
    report.push_str(&ui::headline(&engine));
    report.push('\n');
    report.push_str(&format!(
        "{} {} - draws {} - {} {}\n",
        name_x,
        scores.x(),
        scores.draws(),
        name_o,
        scores.o()
    ));
    info!(phase = ?engine.phase(), "Replay finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Mark;

    #[test]
    fn test_replay_win() {
        let report = replay("Alice", "Bob", &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(
            report,
            "X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nAlice Wins!\nAlice 1 - draws 0 - Bob 0\n"
        );
    }

    #[test]
    fn test_replay_lists_ignored_moves() {
        let report = replay("Alice", "Bob", &[4, 4, 12]).unwrap();
        assert!(report.starts_with(
            "move 2 ignored: Center is already occupied\nmove 3 ignored: Cell 12 is off the board\n"
        ));
        assert!(report.contains("Bob's Turn"));
    }

    #[test]
    fn test_replay_needs_names() {
        assert_eq!(replay("Alice", " ", &[0]), Err(NameError::Blank(Mark::O)));
    }
}
