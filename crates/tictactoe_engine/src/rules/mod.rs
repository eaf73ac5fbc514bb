//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates state, so the
//! engine and the front end can both ask the same questions of any board.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, LINES};
