//! REST API over the session layer.
//!
//! Routes are a thin adapter: they translate HTTP input into engine
//! calls and typed failures into status codes. No game logic lives here.

use crate::game::Player;
use crate::session::{GameSession, SessionError, SessionId, SessionManager};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Wire representation of a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    /// Session id.
    pub id: SessionId,
    /// The board.
    pub board: BoardResponse,
    /// Player to move, 0 or 1.
    pub current_player: Player,
    /// False once the game has finished.
    pub active: bool,
}

/// Wire representation of the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardResponse {
    /// All 14 stone counts: pits 0-5, store 6, pits 7-12, store 13.
    pub pits: Vec<u32>,
}

impl From<GameSession> for GameStateResponse {
    fn from(session: GameSession) -> Self {
        Self {
            id: session.id,
            board: BoardResponse {
                pits: session.game.board().pits().to_vec(),
            },
            current_player: session.game.current_player(),
            active: session.game.is_active(),
        }
    }
}

/// Wire representation of the session listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    /// Ids of all active sessions.
    pub sessions: Vec<SessionId>,
}

/// JSON error body returned for every failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Errors returned to HTTP clients.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ApiError {
    /// Session lookup or move failure from the session layer.
    #[from]
    Session(SessionError),
    /// The `pitIndex` query parameter was absent.
    #[display("Missing required parameter: pitIndex")]
    MissingPitIndex,
    /// The `pitIndex` query parameter was not an integer in range.
    #[display("Invalid pit index: {_0}")]
    InvalidPitIndex(#[error(not(source))] String),
    /// Unexpected internal failure. Details are logged, never leaked.
    #[display("An unexpected error occurred.")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Session(SessionError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Session(SessionError::Move(_))
            | ApiError::MissingPitIndex
            | ApiError::InvalidPitIndex(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Internal error");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Query parameters for the move endpoint. `pitIndex` stays a raw
/// string so missing and non-integer input map to distinct errors.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveQuery {
    /// Pit to sow from, 0-12.
    #[serde(rename = "pitIndex")]
    pub pit_index: Option<String>,
}

fn parse_pit_index(query: &MoveQuery) -> Result<usize, ApiError> {
    let raw = query.pit_index.as_deref().ok_or(ApiError::MissingPitIndex)?;
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::InvalidPitIndex(raw.to_string()))?;
    usize::try_from(value).map_err(|_| ApiError::InvalidPitIndex(raw.to_string()))
}

/// Builds the application router over a shared session manager.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/game/create", post(create_game))
        .route("/game/state/{id}", get(get_game_state))
        .route("/game/move/{id}", post(make_move))
        .route("/game/reset/{id}", post(reset_game))
        .route("/game/sessions", get(list_sessions))
        .with_state(sessions)
}

#[instrument(skip(sessions))]
async fn create_game(State(sessions): State<SessionManager>) -> Json<GameStateResponse> {
    info!("Received request to create a new game");
    let session = sessions.create_session();
    Json(session.into())
}

#[instrument(skip(sessions))]
async fn get_game_state(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let session = sessions.get_session(&id)?;
    Ok(Json(session.into()))
}

#[instrument(skip(sessions, query))]
async fn make_move(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
    Query(query): Query<MoveQuery>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let pit_index = parse_pit_index(&query)?;
    info!(session_id = %id, pit_index, "Received move request");
    let session = sessions.apply_move(&id, pit_index)?;
    Ok(Json(session.into()))
}

#[instrument(skip(sessions))]
async fn reset_game(
    State(sessions): State<SessionManager>,
    Path(id): Path<String>,
) -> Result<Json<GameStateResponse>, ApiError> {
    info!(session_id = %id, "Received reset request");
    let session = sessions.reset_session(&id)?;
    Ok(Json(session.into()))
}

#[instrument(skip(sessions))]
async fn list_sessions(State(sessions): State<SessionManager>) -> Json<SessionListResponse> {
    Json(SessionListResponse {
        sessions: sessions.list_sessions(),
    })
}
