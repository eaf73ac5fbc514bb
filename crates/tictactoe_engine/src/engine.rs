//! The match engine: one owned value holding every piece of game state.
//!
//! All mutation goes through the intent methods (`start_match`, `place`,
//! `reset_round`, `reset_match`, `dismiss_celebration`). Everything else is a
//! pure query, so a renderer can call any of them on every frame.

use crate::action::{Move, NameError, Outcome, PlaceOutcome, Rejection};
use crate::names::PlayerNames;
use crate::phase::Phase;
use crate::rules;
use crate::score::Scores;
use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Two-player tic-tac-toe match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    scores: Scores,
    names: Option<PlayerNames>,
    celebration_acknowledged: bool,
}

impl GameEngine {
    /// Creates an engine with no match started.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Intents
    // ─────────────────────────────────────────────────────────────

    /// Binds the two players and begins a fresh match.
    ///
    /// Both names must be non-empty once trimmed. On rejection nothing
    /// changes and the caller should keep asking for names.
    #[instrument(skip(self))]
    pub fn start_match(&mut self, name_x: &str, name_o: &str) -> Result<(), NameError> {
        let names = PlayerNames::new(name_x, name_o)?;
        info!(x = %names.x(), o = %names.o(), "Match started");
        *self = Self {
            names: Some(names),
            ..Self::default()
        };
        Ok(())
    }

    /// Places the current mark at `cell` (row-major 0-8).
    ///
    /// Ignored, with nothing mutated, when no round is running, the cell is
    /// taken, or the index is off the board.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, cell: usize) -> PlaceOutcome {
        if !self.phase().is_in_progress() {
            debug!("Placement ignored, no round in progress");
            return PlaceOutcome::Ignored(Rejection::NotInProgress);
        }
        let Some(position) = Position::from_index(cell) else {
            debug!("Placement ignored, cell off the board");
            return PlaceOutcome::Ignored(Rejection::OutOfBounds(cell));
        };
        if !self.board.is_empty(position) {
            debug!(%position, "Placement ignored, square occupied");
            return PlaceOutcome::Ignored(Rejection::Occupied(position));
        }

        let mv = Move::new(self.turn, position);
        self.board.set(position, Square::Occupied(mv.mark));
        self.turn = self.turn.opponent();

        let outcome = if let Some(winner) = rules::check_winner(&self.board) {
            Outcome::Winner(winner)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            debug!(%mv, "Mark placed");
            return PlaceOutcome::Placed(mv);
        };

        self.scores.record(outcome);
        info!(%mv, %outcome, scores = %self.scores, "Round decided");
        PlaceOutcome::Decided(mv, outcome)
    }

    /// Clears the board for another round between the same players.
    ///
    /// Scores and names are kept. Legal in every phase.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        info!("Round reset");
        self.board = Board::new();
        self.turn = Mark::X;
        self.celebration_acknowledged = false;
    }

    /// Forgets the players and the tally.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        info!("Match reset");
        *self = Self::default();
    }

    /// Marks the current win as celebrated so the board can be shown.
    #[instrument(skip(self))]
    pub fn dismiss_celebration(&mut self) {
        if matches!(self.phase(), Phase::RoundWon(_)) {
            debug!("Celebration dismissed");
            self.celebration_acknowledged = true;
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Current phase, derived from names and board.
    pub fn phase(&self) -> Phase {
        if self.names.is_none() {
            return Phase::NotStarted;
        }
        match rules::check_winner(&self.board) {
            Some(winner) => Phase::RoundWon(winner),
            None if rules::is_full(&self.board) => Phase::RoundDrawn,
            None => Phase::InProgress(self.turn),
        }
    }

    /// Mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Full board with no line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Name bound to the mark whose turn it is; `None` before a match starts.
    pub fn current_player_name(&self) -> Option<&str> {
        self.names.as_ref().map(|names| names.of(self.turn))
    }

    /// Name of the round's winner.
    pub fn winner_name(&self) -> Option<&str> {
        let winner = self.winner()?;
        self.names.as_ref().map(|names| names.of(winner))
    }

    /// Winner's name while a win is waiting to be celebrated.
    pub fn celebration(&self) -> Option<&str> {
        if self.celebration_acknowledged {
            return None;
        }
        match self.phase() {
            Phase::RoundWon(_) => self.winner_name(),
            _ => None,
        }
    }

    /// Cells a placement would currently be accepted on.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase().is_in_progress() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Match tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Bound player names, if a match is running.
    pub fn names(&self) -> Option<&PlayerNames> {
        self.names.as_ref()
    }
}
