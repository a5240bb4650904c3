//! Game session management for the HTTP API.

use crate::game::{Game, MoveError};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session. Opaque to callers, never
/// reused.
pub type SessionId = String;

/// Errors surfaced by the session layer.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// No session exists for the given id.
    #[display("Game not found: {id}")]
    NotFound {
        /// The id that failed to resolve.
        #[error(not(source))]
        id: SessionId,
    },
    /// The move was rejected by the rules engine.
    #[from]
    Move(MoveError),
}

/// One independently addressable game instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Session id.
    pub id: SessionId,
    /// The game state, owned exclusively by this session.
    pub game: Game,
}

impl GameSession {
    /// Creates a new session with a fresh game.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }
}

/// Manages all game sessions.
///
/// A cheap-to-clone handle over shared in-memory state. Mutating
/// operations run entirely under the map lock, so concurrent requests
/// against the same session serialize into atomic read-modify-writes;
/// the engine itself performs no locking.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// A poisoned lock only means another request panicked mid-move;
    /// the map itself is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Creates a new game session under a freshly generated id.
    #[instrument(skip(self))]
    pub fn create_session(&self) -> GameSession {
        let mut sessions = self.lock();

        let mut id = generate_id();
        while sessions.contains_key(&id) {
            id = generate_id();
        }

        let session = GameSession::new(id.clone());
        sessions.insert(id, session.clone());
        info!(session_id = %session.id, "Created new session");
        session
    }

    /// Gets a snapshot of the session with the given id.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let sessions = self.lock();
        sessions.get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound { id: id.to_string() }
        })
    }

    /// Applies a move to the session with the given id and returns the
    /// updated state.
    ///
    /// Validation happens before mutation, so a rejected move leaves the
    /// stored session untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&self, id: &str, pit_index: usize) -> Result<GameSession, SessionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound { id: id.to_string() })?;

        session.game.make_move(pit_index).map_err(|e| {
            warn!(session_id = id, pit_index, error = %e, "Move rejected");
            e
        })?;

        info!(
            session_id = id,
            pit_index,
            current_player = session.game.current_player().index(),
            active = session.game.is_active(),
            "Move applied"
        );
        Ok(session.clone())
    }

    /// Returns the session with the given id to its initial form,
    /// keeping the same id.
    #[instrument(skip(self))]
    pub fn reset_session(&self, id: &str) -> Result<GameSession, SessionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound { id: id.to_string() })?;

        session.game.reset();
        info!(session_id = id, "Session reset");
        Ok(session.clone())
    }

    /// Lists all active session ids.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.lock();
        sessions.keys().cloned().collect()
    }
}

/// 128-bit random hex id.
fn generate_id() -> SessionId {
    format!(
        "{:016x}{:016x}",
        rand::random::<u64>(),
        rand::random::<u64>()
    )
}
