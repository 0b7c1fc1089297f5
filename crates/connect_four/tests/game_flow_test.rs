//! Tests for game flow through the public API.

use connect_four::{Cell, Game, GameConfig, GameError, GameState, GameStatus, Player};

/// A 6x7 game that fills every cell without anyone lining up four.
const DRAW_6X7: [usize; 42] = [
    4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6, 5, 2,
    0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
];

/// A 6x7 game where the 42nd piece both fills the grid and wins for Player 2.
const FILL_AND_WIN_6X7: [usize; 42] = [
    4, 5, 6, 4, 4, 4, 3, 4, 1, 2, 3, 2, 5, 3, 0, 6, 1, 1, 4, 6, 0, 2, 2, 3, 0, 5, 6, 0, 3, 1, 1,
    0, 0, 5, 3, 6, 1, 2, 6, 2, 5, 5,
];

fn play(game: &mut GameState, columns: &[usize]) {
    for &column in columns {
        game.apply_move(column).expect("legal move");
    }
}

#[test]
fn test_vertical_stack_wins() {
    let mut game = Game::default();

    for _ in 0..3 {
        assert_eq!(game.attempt_move(0).unwrap().status, GameStatus::InProgress);
        assert_eq!(game.attempt_move(1).unwrap().status, GameStatus::InProgress);
    }
    let outcome = game.attempt_move(0).unwrap();

    assert_eq!(outcome.row, 2);
    assert_eq!(outcome.column, 0);
    assert_eq!(outcome.player, Player::Player1);
    assert_eq!(outcome.status, GameStatus::Won(Player::Player1));
    assert_eq!(game.state().status(), GameStatus::Won(Player::Player1));
}

#[test]
fn test_column_seven_is_out_of_range() {
    let mut game = Game::default();
    assert_eq!(
        game.attempt_move(7),
        Err(GameError::OutOfRange {
            column: 7,
            width: 7
        })
    );
}

#[test]
fn test_turns_alternate() {
    let mut game = GameState::default();
    for (n, column) in [3, 3, 2, 4, 4, 1, 0, 6].into_iter().enumerate() {
        let expected = if n % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        };
        assert_eq!(game.current_player(), expected);
        assert_eq!(game.apply_move(column).unwrap().player, expected);
    }
    assert_eq!(game.current_player(), Player::Player1);
}

#[test]
fn test_full_grid_without_line_is_draw() {
    let mut game = GameState::default();
    play(&mut game, &DRAW_6X7[..41]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let outcome = game.apply_move(DRAW_6X7[41]).unwrap();
    assert_eq!(outcome.status, GameStatus::Draw);
    assert_eq!(game.move_count(), 42);
    assert!(game.legal_columns().is_empty());
}

#[test]
fn test_win_beats_draw_on_last_cell() {
    let mut game = GameState::default();
    play(&mut game, &FILL_AND_WIN_6X7[..41]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let outcome = game.apply_move(FILL_AND_WIN_6X7[41]).unwrap();
    assert_eq!(game.move_count(), 42);
    assert_eq!(outcome.player, Player::Player2);
    assert_eq!(outcome.status, GameStatus::Won(Player::Player2));
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut game = GameState::default();
    play(&mut game, &DRAW_6X7);
    let finished = game.clone();

    for column in 0..7 {
        assert_eq!(
            game.apply_move(column),
            Err(GameError::GameAlreadyOver {
                status: GameStatus::Draw
            })
        );
    }
    assert_eq!(game, finished);
}

#[test]
fn test_full_column_rejected() {
    let mut game = Game::default();
    for _ in 0..6 {
        game.attempt_move(5).unwrap();
    }
    let before = game.state().clone();

    assert_eq!(game.state().legal_drop_row(5), Ok(None));
    assert_eq!(game.attempt_move(5), Err(GameError::IllegalMove { column: 5 }));
    assert_eq!(game.state(), &before);

    // The rejected move does not consume a turn.
    assert_eq!(game.attempt_move(4).unwrap().player, Player::Player1);
}

#[test]
fn test_small_and_wide_boards() {
    let mut game = Game::new(&GameConfig::new(4, 10).unwrap()).unwrap();
    for column in [9, 0, 8, 0, 7, 0] {
        game.attempt_move(column).unwrap();
    }
    let outcome = game.attempt_move(6).unwrap();
    assert_eq!(outcome.status, GameStatus::Won(Player::Player1));
    assert_eq!(outcome.row, 3);

    assert_eq!(
        GameState::new(4, 3),
        Err(GameError::Configuration {
            height: 4,
            width: 3
        })
    );
}

#[test]
fn test_pieces_land_bottom_up() {
    let mut game = GameState::default();
    let rows: Vec<usize> = (0..6).map(|_| game.apply_move(2).unwrap().row).collect();
    assert_eq!(rows, vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(game.grid().get(0, 2), Some(Cell::Occupied(Player::Player2)));
}

#[test]
fn test_state_serializes_to_json() {
    let mut game = GameState::new(4, 4).unwrap();
    let outcome = game.apply_move(1).unwrap();

    let value = serde_json::to_value(outcome).unwrap();
    assert_eq!(value["row"], 3);
    assert_eq!(value["player"], "Player1");
    assert_eq!(value["status"], "InProgress");

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["current_player"], "Player2");
    assert_eq!(value["grid"]["height"], 4);
    assert_eq!(value["grid"]["cells"][13], serde_json::json!({ "Occupied": "Player1" }));
    assert_eq!(value["grid"]["cells"][0], "Empty");
}
