//! Gravity invariant: no piece floats above an empty cell.

use super::super::{GameState, Grid};
use super::Invariant;

/// Invariant: Occupied cells in each column form a block anchored at the bottom.
///
/// Reading a column from top to bottom, once an occupied cell is seen every
/// cell below it must be occupied too.
pub struct GravityInvariant;

impl GravityInvariant {
    /// Checks the property on a bare grid.
    pub fn holds_for(grid: &Grid) -> bool {
        (0..grid.width()).all(|col| {
            let mut seen_piece = false;
            grid.column(col).all(|cell| {
                if cell.is_empty() {
                    !seen_piece
                } else {
                    seen_piece = true;
                    true
                }
            })
        })
    }
}

impl Invariant<GameState> for GravityInvariant {
    fn holds(game: &GameState) -> bool {
        Self::holds_for(game.grid())
    }

    fn description() -> &'static str {
        "Pieces rest on the bottom row or on another piece"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_empty_grid_holds() {
        assert!(GravityInvariant::holds_for(&Grid::default()));
    }

    #[test]
    fn test_stacked_pieces_hold() {
        let mut game = GameState::default();
        for column in [2, 2, 2, 5] {
            game.apply_move(column).unwrap();
        }
        assert!(GravityInvariant::holds(&game));
    }

    #[test]
    fn test_floating_piece_violates() {
        let mut grid = Grid::default();
        grid.set(5, 1, Cell::Occupied(Player::Player1)).unwrap();
        grid.set(3, 1, Cell::Occupied(Player::Player2)).unwrap();
        assert!(!GravityInvariant::holds_for(&grid));
    }
}
