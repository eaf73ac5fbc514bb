//! Placement events and rejection reasons.
//!
//! A placement is reported as an event rather than applied silently, so the
//! caller can tell "mark placed" apart from "round decided" without
//! re-deriving either from the board.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// How a decided round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three in a row for this mark.
    Winner(Mark),
    /// Full board, no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// No round is being played: no match, or the round is already decided.
    #[display("No round in progress")]
    NotInProgress,
    /// The square already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
}

/// Result of a placement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Nothing changed.
    Ignored(Rejection),
    /// The mark was placed and the round goes on.
    Placed(Move),
    /// The mark was placed and ended the round.
    Decided(Move, Outcome),
}

impl PlaceOutcome {
    /// Returns true if the board changed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PlaceOutcome::Ignored(_))
    }
}

/// Rejection of a match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NameError {
    /// The name for this mark was empty after trimming.
    #[display("Player {} needs a name", _0)]
    Blank(#[error(not(source))] Mark),
}
