//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by one mark, with that mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let mark = board.get(a).mark()?;
        (board.get(b).mark() == Some(mark) && board.get(c).mark() == Some(mark))
            .then_some((mark, [a, b, c]))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if that mark holds three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::board_from;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from("XXX OO. ...");
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_each_column() {
        assert_eq!(check_winner(&board_from("O.. O.. O..")), Some(Mark::O));
        assert_eq!(check_winner(&board_from(".X. .X. .X.")), Some(Mark::X));
        assert_eq!(check_winner(&board_from("..O ..O ..O")), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonals() {
        assert_eq!(check_winner(&board_from("O.. .O. ..O")), Some(Mark::O));
        assert_eq!(check_winner(&board_from("..X .X. X..")), Some(Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board_from("XXO ... ...")), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board_from("XX. ... ...")), None);
    }

    #[test]
    fn test_winning_line_reports_cells() {
        let board = board_from("... OOO X.X");
        assert_eq!(
            winning_line(&board),
            Some((
                Mark::O,
                [Position::MiddleLeft, Position::Center, Position::MiddleRight]
            ))
        );
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut picture = ['.'; 9];
            for pos in line {
                picture[pos.to_index()] = 'X';
            }
            let board = board_from(&picture.iter().collect::<String>());
            assert_eq!(winning_line(&board), Some((Mark::X, line)));
        }
    }
}
