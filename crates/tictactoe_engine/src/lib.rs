//! Two-player tic-tac-toe rules engine.
//!
//! [`GameEngine`] owns the board, the turn marker, the player names and the
//! match tally. A front end drives it through intents and renders from its
//! queries; see [`Phase`] for the states it can be in.
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Phase};
//!
//! let mut engine = GameEngine::new();
//! engine.start_match("Alice", "Bob").unwrap();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.place(cell);
//! }
//! assert_eq!(engine.phase(), Phase::RoundWon(Mark::X));
//! assert_eq!(engine.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod names;
mod phase;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::{Move, NameError, Outcome, PlaceOutcome, Rejection};
pub use engine::GameEngine;
pub use names::PlayerNames;
pub use phase::Phase;
pub use position::Position;
pub use score::Scores;
pub use types::{Board, Mark, Square};
