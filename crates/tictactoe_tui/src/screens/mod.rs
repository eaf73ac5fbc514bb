//! Concrete screens of the front end.

mod board;
mod celebration;
mod setup;

pub use board::{BoardScreen, move_cursor};
pub use celebration::CelebrationScreen;
pub use setup::SetupScreen;
