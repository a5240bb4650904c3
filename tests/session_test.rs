//! Tests for session management.

use kalah_server::{GameStatus, MoveError, Player, SessionError, SessionManager};

#[test]
fn created_sessions_get_unique_ids() {
    let manager = SessionManager::new();

    let a = manager.create_session();
    let b = manager.create_session();

    assert_ne!(a.id, b.id);
    assert_eq!(manager.list_sessions().len(), 2);
}

#[test]
fn new_session_starts_fresh() {
    let manager = SessionManager::new();
    let session = manager.create_session();

    assert_eq!(session.game.current_player(), Player::One);
    assert_eq!(session.game.status(), GameStatus::InProgress);
    assert_eq!(session.game.board().stones(0), 6);
    assert_eq!(session.game.board().stones(6), 0);
}

#[test]
fn unknown_id_is_not_found() {
    let manager = SessionManager::new();

    assert!(matches!(
        manager.get_session("missing"),
        Err(SessionError::NotFound { .. })
    ));
    assert!(matches!(
        manager.apply_move("missing", 0),
        Err(SessionError::NotFound { .. })
    ));
    assert!(matches!(
        manager.reset_session("missing"),
        Err(SessionError::NotFound { .. })
    ));
}

#[test]
fn apply_move_updates_the_stored_session() {
    let manager = SessionManager::new();
    let session = manager.create_session();

    let updated = manager.apply_move(&session.id, 1).expect("Valid move");
    assert_eq!(updated.game.current_player(), Player::Two);

    // The stored copy reflects the move.
    let stored = manager.get_session(&session.id).expect("Session exists");
    assert_eq!(stored.game, updated.game);
}

#[test]
fn rejected_move_leaves_the_stored_session_untouched() {
    let manager = SessionManager::new();
    let session = manager.create_session();

    let err = manager.apply_move(&session.id, 9).unwrap_err();
    assert!(matches!(err, SessionError::Move(MoveError::WrongSide)));

    let stored = manager.get_session(&session.id).expect("Session exists");
    assert_eq!(stored.game, session.game);
}

#[test]
fn reset_restores_initial_state_keeping_the_id() {
    let manager = SessionManager::new();
    let session = manager.create_session();
    manager.apply_move(&session.id, 2).expect("Valid move");

    let reset = manager.reset_session(&session.id).expect("Session exists");

    assert_eq!(reset.id, session.id);
    assert_eq!(reset.game, session.game);
}

#[test]
fn sessions_are_independent() {
    let manager = SessionManager::new();
    let a = manager.create_session();
    let b = manager.create_session();

    manager.apply_move(&a.id, 1).expect("Valid move");

    let stored_b = manager.get_session(&b.id).expect("Session exists");
    assert_eq!(stored_b.game, b.game);
}
