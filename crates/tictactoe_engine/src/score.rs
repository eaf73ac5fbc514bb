//! Cumulative tally for a match.

use crate::{Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per mark plus draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    x: u32,
    o: u32,
    draws: u32,
}

impl Scores {
    /// A zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Rounds won by O.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds decided so far.
    pub fn rounds(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.draws)
    }

    /// Counts one decided round.
    #[instrument]
    pub(crate) fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Mark::X) => &mut self.x,
            Outcome::Winner(Mark::O) => &mut self.o,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - O {} - draws {}", self.x, self.o, self.draws)
    }
}
