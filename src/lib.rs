//! Kalah game server library.
//!
//! A two-player Kalah (6-pit Mancala) rules engine behind a REST API.
//!
//! # Architecture
//!
//! - **Game**: pure rules engine — board, sowing, capture, game-over
//!   detection, turn alternation ([`Game`], [`Board`])
//! - **Session**: independently addressable game instances keyed by
//!   opaque id ([`SessionManager`])
//! - **Server**: axum routes translating HTTP into engine calls
//!   ([`router`])
//!
//! # Example
//!
//! ```
//! use kalah_server::Game;
//!
//! let mut game = Game::new();
//! // Player one sows pit 0; the last stone lands in their own store,
//! // so they keep the turn.
//! game.make_move(0)?;
//! assert_eq!(game.current_player().index(), 0);
//! # Ok::<(), kalah_server::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
mod server;
mod session;

pub use cli::Cli;
pub use game::{BOARD_SIZE, Board, Game, GameStatus, MoveError, Player, STARTING_STONES, TOTAL_STONES};
pub use server::{
    ApiError, BoardResponse, ErrorResponse, GameStateResponse, SessionListResponse, router,
};
pub use session::{GameSession, SessionError, SessionId, SessionManager};
