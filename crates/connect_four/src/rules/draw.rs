//! Draw detection logic for Connect Four.

use super::super::Grid;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks if the grid is drawn.
///
/// Only meaningful after the mover has been checked for a win: a final
/// move that both fills the grid and completes a line is a win.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid)
}
