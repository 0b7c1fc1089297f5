//! Game rules for Connect Four.
//!
//! This module contains pure functions for evaluating a grid according to
//! Connect Four rules. Rules are separated from game state so they can be
//! composed into contracts and invariants.

pub mod draw;
pub mod drop;
pub mod win;

pub use draw::{is_draw, is_full};
pub use drop::{drop_row, open_columns};
pub use win::{Axis, Window, has_win, has_win_through, winning_window};

use super::{GameStatus, Grid, Player};
use tracing::instrument;

/// Status after `mover` placed a piece at `(row, col)`.
///
/// A win takes precedence over a draw.
#[instrument(skip(grid))]
pub fn evaluate(grid: &Grid, mover: Player, row: usize, col: usize) -> GameStatus {
    if has_win(grid, mover, row, col) {
        GameStatus::Won(mover)
    } else if is_draw(grid) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
