//! Core domain types for Kalah.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// One of the two players, identified by seat index.
///
/// Serializes as `0` or `1`, matching the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Player one (seat 0): sowing pits 0-5, store 6. Moves first.
    One,
    /// Player two (seat 1): sowing pits 7-12, store 13.
    Two,
}

impl Player {
    /// Seat index, 0 or 1.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Board index of this player's store.
    pub fn store(self) -> usize {
        match self {
            Player::One => 6,
            Player::Two => 13,
        }
    }

    /// Board indices of this player's sowing pits.
    pub fn pits(self) -> RangeInclusive<usize> {
        match self {
            Player::One => 0..=5,
            Player::Two => 7..=12,
        }
    }

    /// Whether `pit_index` falls in this player's half of the board.
    ///
    /// Uses the 7-wide partition (`pit_index / 7`): it covers the sowing
    /// pits plus the player's own store, so callers that mean a sowing
    /// pit must exclude the store index separately.
    pub fn owns_side(self, pit_index: usize) -> bool {
        pit_index / 7 == self.index()
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.index() as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::One),
            1 => Ok(Player::Two),
            other => Err(format!("invalid player index: {other}")),
        }
    }
}

/// Whether a game is still accepting moves.
///
/// `Finished` is a one-way transition; only a reset returns a game to
/// `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is ongoing.
    InProgress,
    /// A terminal board was reached and remaining stones were allocated.
    Finished,
}
