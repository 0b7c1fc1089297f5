//! Status consistency invariant: the recorded status matches the grid.

use super::super::rules::{is_full, winning_window};
use super::super::{GameState, GameStatus, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: The status agrees with what the rules say about the grid.
///
/// - `InProgress`: nobody has a line and the grid has room.
/// - `Won(p)`: `p` has a line and the opponent does not.
/// - `Draw`: the grid is full and nobody has a line.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let grid = game.grid();
        let has_line = |player: Player| winning_window(grid, player).is_some();

        match game.status() {
            GameStatus::InProgress => !is_full(grid) && !Player::iter().any(has_line),
            GameStatus::Won(winner) => has_line(winner) && !has_line(winner.opponent()),
            GameStatus::Draw => is_full(grid) && !Player::iter().any(has_line),
        }
    }

    fn description() -> &'static str {
        "Game status matches the lines on the grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Grid};

    #[test]
    fn test_new_game_holds() {
        assert!(StatusConsistentInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_won_game_holds() {
        let mut game = GameState::default();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            game.apply_move(column).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Won(Player::Player1));
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_line_violates() {
        let mut grid = Grid::default();
        for col in 0..4 {
            grid.set(5, col, Cell::Occupied(Player::Player1)).unwrap();
        }
        let game = GameState::from_parts(grid, Player::Player2, GameStatus::InProgress);
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
