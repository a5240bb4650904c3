//! Per-game state and the move orchestration sequence.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::board::Board;
use super::error::MoveError;
use super::types::{GameStatus, Player};

/// A single Kalah game: the board plus turn and lifecycle state.
///
/// `make_move` runs the full rule sequence for one turn: validate, sow,
/// capture check, game-over check, turn switch. All mutation is confined
/// to this value; callers own the question of who may mutate it when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with a fresh board. Player one moves first.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Builds a game from an explicit board and player to move, e.g.
    /// when rehydrating persisted state. The game starts in progress.
    pub fn from_state(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            status: GameStatus::InProgress,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Lifecycle status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game is still accepting moves.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Plays the current player's turn from `pit_index`.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the game unmodified when the
    /// index is out of range or a store, the pit is on the opponent's
    /// side or empty, or the game has already finished.
    #[instrument(skip(self), fields(player = self.current_player.index()))]
    pub fn make_move(&mut self, pit_index: usize) -> Result<(), MoveError> {
        self.validate(pit_index)?;
        let player = self.current_player;

        let last = self.board.sow(pit_index, player);
        debug!(last, "Last stone placed");

        if self.is_capture(last, player) {
            info!(last, opposite = 12 - last, "Capture condition met");
            self.board.capture(last, player);
        }

        if self.board.is_game_over() {
            self.board.allocate_remaining_stones();
            self.status = GameStatus::Finished;
            info!(
                store_one = self.board.stones(Player::One.store()),
                store_two = self.board.stones(Player::Two.store()),
                "Game over, remaining stones allocated"
            );
            return Ok(());
        }

        // Landing in the own store grants an extra turn.
        if last != player.store() {
            self.current_player = player.opponent();
            debug!(next = self.current_player.index(), "Turn passes");
        }
        Ok(())
    }

    fn validate(&self, pit_index: usize) -> Result<(), MoveError> {
        if self.status == GameStatus::Finished {
            return Err(MoveError::GameFinished);
        }
        // Both stores are rejected here, so the side check below only
        // ever sees sowing pits.
        if pit_index > 12 || pit_index == Player::One.store() {
            return Err(MoveError::PitOutOfRange(pit_index));
        }
        if !self.current_player.owns_side(pit_index) {
            return Err(MoveError::WrongSide);
        }
        if self.board.stones(pit_index) == 0 {
            return Err(MoveError::EmptyPit);
        }
        Ok(())
    }

    /// Capture triggers when the final stone lands alone in a sowing pit
    /// on the mover's own side. A count of one after sowing means the
    /// pit was empty before this stone arrived.
    fn is_capture(&self, last: usize, player: Player) -> bool {
        last <= 12
            && last != player.store()
            && player.owns_side(last)
            && self.board.stones(last) == 1
    }

    /// Returns the game to its initial form: fresh board, player one to
    /// move, in progress. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!("Game reset to initial state");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
