//! Win detection logic for Connect Four.

use super::super::{Cell, Grid, Player, WINDOW_LEN};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Direction a window extends from its starting cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Axis {
    /// Left to right along a row.
    Horizontal,
    /// Downward along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Axis {
    /// `(row, column)` step between consecutive cells of a window.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDownRight => (1, 1),
            Axis::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four grid coordinates checked together for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Window {
    /// Direction of the line.
    pub axis: Axis,
    /// `(row, column)` of each cell, starting cell first.
    pub cells: [(usize, usize); WINDOW_LEN],
}

impl Window {
    /// Builds the window starting at `(row, col)` along `axis`.
    ///
    /// Returns `None` if any of its cells falls off the grid.
    pub fn at(grid: &Grid, row: isize, col: isize, axis: Axis) -> Option<Self> {
        let (dy, dx) = axis.step();
        let mut cells = [(0, 0); WINDOW_LEN];
        for (i, slot) in cells.iter_mut().enumerate() {
            let r = row + dy * i as isize;
            let c = col + dx * i as isize;
            if !grid.contains(r, c) {
                return None;
            }
            *slot = (r as usize, c as usize);
        }
        Some(Self { axis, cells })
    }

    /// True if every cell of the window holds a piece of `player`.
    pub fn owned_by(&self, grid: &Grid, player: Player) -> bool {
        self.cells
            .iter()
            .all(|&(row, col)| grid.get(row, col) == Some(Cell::Occupied(player)))
    }

    /// True if the window covers `(row, col)`.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Returns the first window fully owned by `player`.
///
/// Every cell is tried as a window start on every axis, top row first.
#[instrument(skip(grid))]
pub fn winning_window(grid: &Grid, player: Player) -> Option<Window> {
    for row in 0..grid.height() as isize {
        for col in 0..grid.width() as isize {
            for axis in Axis::iter() {
                if let Some(window) = Window::at(grid, row, col, axis)
                    && window.owned_by(grid, player)
                {
                    trace!(?window, "Winning window found");
                    return Some(window);
                }
            }
        }
    }
    None
}

/// Checks whether `player` has four in a row anywhere on the grid.
///
/// The whole grid is scanned; `last_row` and `last_col` identify the piece
/// that was just placed but do not narrow the search. See
/// [`has_win_through`] for the narrowed check.
#[instrument(skip(grid))]
pub fn has_win(grid: &Grid, player: Player, last_row: usize, last_col: usize) -> bool {
    winning_window(grid, player).is_some()
}

/// Checks only the windows that cover `(row, col)`.
///
/// Agrees with [`has_win`] as long as `player` had no line on the grid
/// before the piece at `(row, col)` was placed, which holds for every move
/// accepted by [`GameState::apply_move`](crate::GameState::apply_move).
#[instrument(skip(grid))]
pub fn has_win_through(grid: &Grid, player: Player, row: usize, col: usize) -> bool {
    if grid.get(row, col) != Some(Cell::Occupied(player)) {
        return false;
    }

    Axis::iter().any(|axis| {
        let (dy, dx) = axis.step();
        (0..WINDOW_LEN as isize).any(|offset| {
            let start_row = row as isize - dy * offset;
            let start_col = col as isize - dx * offset;
            Window::at(grid, start_row, start_col, axis)
                .is_some_and(|window| window.owned_by(grid, player))
        })
    })
}
