//! Match phase as seen by a renderer.

use crate::Mark;
use serde::{Deserialize, Serialize};

/// Current stage of the match.
///
/// Always derived from the engine's board and names, never stored, so it
/// cannot drift from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No players bound yet.
    NotStarted,
    /// Round running; the mark to move.
    InProgress(Mark),
    /// Round ended with three in a row.
    RoundWon(Mark),
    /// Round ended on a full board.
    RoundDrawn,
}

impl Phase {
    /// True while placements are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Phase::InProgress(_))
    }

    /// True once the round has an outcome.
    pub fn is_decided(&self) -> bool {
        matches!(self, Phase::RoundWon(_) | Phase::RoundDrawn)
    }
}
