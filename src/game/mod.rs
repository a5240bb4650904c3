//! Kalah rules engine: board operations and move orchestration.

mod board;
mod engine;
mod error;
mod types;

pub use board::{BOARD_SIZE, Board, STARTING_STONES, TOTAL_STONES};
pub use engine::Game;
pub use error::MoveError;
pub use types::{GameStatus, Player};
