//! Core domain types for Connect Four.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of rows.
pub const DEFAULT_HEIGHT: usize = 6;

/// Default number of columns.
pub const DEFAULT_WIDTH: usize = 7;

/// Pieces in a winning line. Also the smallest legal board dimension.
pub const WINDOW_LEN: usize = 4;

/// True if a `height` x `width` grid can hold a line of four and its cell
/// count fits in signed coordinate space.
pub(crate) fn dimensions_fit(height: usize, width: usize) -> bool {
    height >= WINDOW_LEN
        && width >= WINDOW_LEN
        && height
            .checked_mul(width)
            .is_some_and(|cells| cells <= isize::MAX as usize)
}

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player (always moves first).
    Player1,
    /// Second player.
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Player number as shown to people (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }

    /// Symbol used when rendering the grid as text.
    pub fn symbol(self) -> char {
        match self {
            Player::Player1 => 'X',
            Player::Player2 => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece.
    Empty,
    /// Cell holds a piece of the given player.
    Occupied(Player),
}

impl Cell {
    /// True if no piece occupies the cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Owner of the piece, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Rectangular Connect Four grid.
///
/// Row 0 is the top row and row `height - 1` is the bottom row, so pieces
/// fall toward larger row indices. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] unless both dimensions are at
    /// least [`WINDOW_LEN`] and their product does not overflow.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        if !dimensions_fit(height, width) {
            return Err(GameError::Configuration { height, width });
        }
        Ok(Self::empty(height, width))
    }

    pub(crate) fn empty(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, col)`, or `None` when off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// No gravity is applied; this is for building positions directly.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CellOutOfBounds`] when `(row, col)` is off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GameError> {
        if row >= self.height || col >= self.width {
            return Err(GameError::CellOutOfBounds { row, column: col });
        }
        self.cells[row * self.width + col] = cell;
        Ok(())
    }

    /// True if the signed coordinate lies on the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// True if `col` is a valid column index.
    pub fn has_column(&self, col: usize) -> bool {
        col < self.width
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Cells of one column from top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).filter_map(move |row| self.get(row, col))
    }

    /// Number of pieces `player` has on the grid.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the grid reflected left to right.
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::empty(self.height, self.width);
        for (row, cells) in self.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                mirrored.cells[row * self.width + (self.width - 1 - col)] = *cell;
            }
        }
        mirrored
    }

    /// Formats the grid as text, top row first, with column indices below.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        let footer: Vec<String> = (0..self.width).map(|col| (col % 10).to_string()).collect();
        out.push_str(&footer.join(" "));
        out
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed four in a row.
    Won(Player),
    /// The grid filled with no winner.
    Draw,
}

impl GameStatus {
    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} won!"),
            GameStatus::Draw => write!(f, "It's a tie!"),
        }
    }
}
