//! Move validation errors.

use derive_more::{Display, Error};

/// Reasons the engine rejects a move.
///
/// Validation runs before any board mutation, so a rejected move leaves
/// the game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0-12, or a store index. Stores cannot be sown from.
    #[display("Invalid pit index: {_0}")]
    PitOutOfRange(#[error(not(source))] usize),
    /// The pit belongs to the opponent.
    #[display("Invalid move. You must select a pit on your side.")]
    WrongSide,
    /// The selected pit holds no stones.
    #[display("Invalid move. You cannot select an empty pit.")]
    EmptyPit,
    /// The game has already finished; reset it to play again.
    #[display("The game is already over.")]
    GameFinished,
}
