//! The Kalah board and its pure state transitions.

use serde::{Deserialize, Serialize};

use super::types::Player;

/// Number of slots on the board: 12 sowing pits plus 2 stores.
pub const BOARD_SIZE: usize = 14;

/// Stones in each sowing pit at the start of a game.
pub const STARTING_STONES: u32 = 6;

/// Total stones in play. Conserved by every operation except `reset`.
pub const TOTAL_STONES: u32 = 48;

/// The board: an index-addressed array of stone counts.
///
/// Layout: indices 0-5 are player one's sowing pits, 6 is player one's
/// store, 7-12 are player two's sowing pits, 13 is player two's store.
/// Operations here know nothing about sessions or turn order; the
/// [`Game`](super::Game) orchestrator sequences them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; BOARD_SIZE],
}

impl Board {
    /// Creates a fresh board: 6 stones in every sowing pit, empty stores.
    pub fn new() -> Self {
        let mut pits = [STARTING_STONES; BOARD_SIZE];
        pits[Player::One.store()] = 0;
        pits[Player::Two.store()] = 0;
        Self { pits }
    }

    /// Builds a board from explicit pit counts, e.g. when rehydrating a
    /// persisted game.
    pub fn from_pits(pits: [u32; BOARD_SIZE]) -> Self {
        Self { pits }
    }

    /// All pit counts, store slots included.
    pub fn pits(&self) -> &[u32; BOARD_SIZE] {
        &self.pits
    }

    /// Stone count in the given slot.
    pub fn stones(&self, index: usize) -> u32 {
        self.pits[index]
    }

    /// Total stones currently on the board.
    pub fn total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Picks up every stone in `start_index` and sows them one per slot
    /// counter-clockwise, skipping the opponent's store. The skip does
    /// not consume a stone. Returns the index that received the final
    /// stone, which may be the mover's own store.
    ///
    /// Callers must ensure `start_index` is a non-empty sowing pit.
    pub fn sow(&mut self, start_index: usize, player: Player) -> usize {
        debug_assert!(start_index < BOARD_SIZE - 1);
        debug_assert!(self.pits[start_index] > 0);

        let skip = player.opponent().store();
        let mut stones = self.pits[start_index];
        self.pits[start_index] = 0;

        let mut index = start_index;
        while stones > 0 {
            index = (index + 1) % BOARD_SIZE;
            if index == skip {
                continue;
            }
            self.pits[index] += 1;
            stones -= 1;
        }
        index
    }

    /// Moves the contents of `last_index` and the pit opposite it into
    /// the mover's store, emptying both. Callers decide eligibility; the
    /// board just executes the transfer.
    pub fn capture(&mut self, last_index: usize, player: Player) {
        let opposite = 12 - last_index;
        self.pits[player.store()] += self.pits[opposite] + self.pits[last_index];
        self.pits[opposite] = 0;
        self.pits[last_index] = 0;
    }

    /// True when either side's sowing pits are all empty. Either side
    /// emptying ends the game.
    pub fn is_game_over(&self) -> bool {
        self.side_empty(Player::One) || self.side_empty(Player::Two)
    }

    fn side_empty(&self, player: Player) -> bool {
        player.pits().all(|i| self.pits[i] == 0)
    }

    /// Sweeps each side's remaining sowing-pit stones into that side's
    /// own store. Applied exactly once, when a game first ends.
    pub fn allocate_remaining_stones(&mut self) {
        for player in [Player::One, Player::Two] {
            let store = player.store();
            for i in player.pits() {
                self.pits[store] += self.pits[i];
                self.pits[i] = 0;
            }
        }
    }

    /// Returns the board to its initial configuration.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
