//! Column drop resolution.

use super::super::{GameError, Grid};
use tracing::instrument;

/// Finds the row a piece dropped into `column` would land on.
///
/// Scans from the bottom row upward and returns the first empty row, or
/// `None` when the column is full.
///
/// # Errors
///
/// Returns [`GameError::OutOfRange`] if `column` is not on the grid.
#[instrument(skip(grid), fields(width = grid.width()))]
pub fn drop_row(grid: &Grid, column: usize) -> Result<Option<usize>, GameError> {
    if !grid.has_column(column) {
        return Err(GameError::OutOfRange {
            column,
            width: grid.width(),
        });
    }

    Ok((0..grid.height())
        .rev()
        .find(|&row| grid.get(row, column).is_some_and(|cell| cell.is_empty())))
}

/// Columns that can still accept a piece, left to right.
#[instrument(skip(grid))]
pub fn open_columns(grid: &Grid) -> Vec<usize> {
    (0..grid.width())
        .filter(|&col| grid.get(0, col).is_some_and(|cell| cell.is_empty()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cell, Player};
    use super::*;

    #[test]
    fn test_empty_column_lands_on_bottom() {
        let grid = Grid::default();
        assert_eq!(drop_row(&grid, 3), Ok(Some(5)));
    }

    #[test]
    fn test_stacks_on_top() {
        let mut grid = Grid::default();
        grid.set(5, 3, Cell::Occupied(Player::Player1)).unwrap();
        grid.set(4, 3, Cell::Occupied(Player::Player2)).unwrap();
        assert_eq!(drop_row(&grid, 3), Ok(Some(3)));
    }

    #[test]
    fn test_full_column() {
        let mut grid = Grid::default();
        for row in 0..6 {
            grid.set(row, 0, Cell::Occupied(Player::Player1)).unwrap();
        }
        assert_eq!(drop_row(&grid, 0), Ok(None));
        assert_eq!(open_columns(&grid), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_out_of_range() {
        let grid = Grid::default();
        assert_eq!(
            drop_row(&grid, 7),
            Err(GameError::OutOfRange {
                column: 7,
                width: 7
            })
        );
    }
}
