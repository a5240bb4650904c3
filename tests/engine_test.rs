//! Tests for the move orchestration sequence.

use kalah_server::{
    BOARD_SIZE, Board, Game, GameStatus, MoveError, Player, TOTAL_STONES,
};

fn board(pits: [u32; BOARD_SIZE]) -> Board {
    Board::from_pits(pits)
}

#[test]
fn opening_move_from_pit_zero_grants_extra_turn() {
    let mut game = Game::new();

    game.make_move(0).expect("Valid move");

    // Six stones from pit 0 end exactly in player one's store.
    assert_eq!(game.current_player(), Player::One);
    assert_eq!(game.board().stones(6), 1);
    assert_eq!(game.board().stones(0), 0);
}

#[test]
fn move_not_ending_in_store_passes_the_turn() {
    let mut game = Game::new();

    game.make_move(1).expect("Valid move");

    // Last stone lands in pit 7, not the store.
    assert_eq!(game.current_player(), Player::Two);
    assert_eq!(game.board().stones(7), 7);
}

#[test]
fn landing_in_empty_own_pit_captures_opposite_stones() {
    let mut pits = [0; BOARD_SIZE];
    pits[1] = 1;
    pits[4] = 5;
    pits[6] = 10;
    pits[10] = 9;
    pits[13] = 10;
    let mut game = Game::from_state(board(pits), Player::One);

    game.make_move(1).expect("Valid move");

    // The stone lands in empty pit 2; the opposite pit is 10. Its nine
    // stones plus the sown stone move into player one's store.
    assert_eq!(game.board().stones(2), 0);
    assert_eq!(game.board().stones(10), 0);
    assert_eq!(game.board().stones(6), 20);
    assert_eq!(game.current_player(), Player::Two);
    assert!(game.is_active());
}

#[test]
fn capture_into_own_side_only() {
    // Last stone lands in an empty pit on the opponent's side: no capture.
    let mut pits = [0; BOARD_SIZE];
    pits[5] = 2;
    pits[3] = 1;
    pits[12] = 4;
    let mut game = Game::from_state(board(pits), Player::One);

    game.make_move(5).expect("Valid move");

    // Pit 7 keeping its single stone proves no capture fired.
    assert_eq!(game.board().stones(7), 1);
    assert_eq!(game.board().stones(6), 1);
    assert_eq!(game.board().stones(5), 0);
}

#[test]
fn finishing_move_allocates_remaining_stones() {
    // Player one: [1, 2, 0, 0, 3, 6], store 25. Player two: empty side,
    // store 20. Sowing pit 0 keeps player two's side empty, so the game
    // ends and each side's remainder sweeps into its own store.
    let pits = [1, 2, 0, 0, 3, 6, 25, 0, 0, 0, 0, 0, 0, 20];
    let mut game = Game::from_state(board(pits), Player::One);

    game.make_move(0).expect("Valid move");

    assert_eq!(game.status(), GameStatus::Finished);
    assert!(!game.is_active());
    assert_eq!(game.board().stones(6), 25 + 1 + 2 + 3 + 6);
    assert_eq!(game.board().stones(13), 20);
    for i in Player::One.pits().chain(Player::Two.pits()) {
        assert_eq!(game.board().stones(i), 0);
    }
}

#[test]
fn finished_game_rejects_further_moves() {
    let mut pits = [0; BOARD_SIZE];
    pits[5] = 1;
    pits[8] = 2;
    let mut game = Game::from_state(board(pits), Player::One);

    game.make_move(5).expect("Valid move");
    assert_eq!(game.status(), GameStatus::Finished);

    assert_eq!(game.make_move(8), Err(MoveError::GameFinished));
}

#[test]
fn out_of_range_and_store_indices_are_rejected() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.make_move(13), Err(MoveError::PitOutOfRange(13)));
    assert_eq!(game.make_move(14), Err(MoveError::PitOutOfRange(14)));
    assert_eq!(game.make_move(6), Err(MoveError::PitOutOfRange(6)));
    assert_eq!(game, before);
}

#[test]
fn opponents_pit_is_rejected() {
    let mut game = Game::new();
    let before = game.clone();

    assert_eq!(game.make_move(7), Err(MoveError::WrongSide));
    assert_eq!(game, before);
}

#[test]
fn empty_pit_is_rejected() {
    let mut pits = [6; BOARD_SIZE];
    pits[2] = 0;
    pits[6] = 0;
    pits[13] = 0;
    let mut game = Game::from_state(board(pits), Player::One);
    let before = game.clone();

    assert_eq!(game.make_move(2), Err(MoveError::EmptyPit));
    assert_eq!(game, before);
}

#[test]
fn stones_are_conserved_across_a_full_scripted_game() {
    let mut game = Game::new();

    // Alternating legal moves; pick the first legal pit each turn.
    for _ in 0..200 {
        if !game.is_active() {
            break;
        }
        let player = game.current_player();
        let pit = player
            .pits()
            .find(|&i| game.board().stones(i) > 0)
            .expect("Active game has a legal move");
        game.make_move(pit).expect("Chosen pit is legal");
        assert_eq!(game.board().total(), TOTAL_STONES);
        assert!(game.board().pits().iter().all(|&n| n <= TOTAL_STONES));
    }
}

#[test]
fn reset_restores_the_initial_game() {
    let mut game = Game::new();
    game.make_move(2).expect("Valid move");
    game.reset();

    assert_eq!(game, Game::new());

    // Idempotent.
    game.reset();
    assert_eq!(game, Game::new());
}
