//! Game state: the grid, whose turn it is, and the game status.

use super::contracts::{Contract, MoveContract};
use super::rules::{drop_row, evaluate, open_columns};
use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GameError, GameStatus, Grid, Player};
use derive_new::new;
use serde::Serialize;
use tracing::{debug, instrument};

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct MoveOutcome {
    /// Row the piece landed on.
    pub row: usize,
    /// Column the piece was dropped into.
    pub column: usize,
    /// Player who made the move.
    pub player: Player,
    /// Game status after the move.
    pub status: GameStatus,
}

/// Complete game state.
///
/// Created once per game. Only [`GameState::apply_move`] mutates it, and
/// nothing changes once the status is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    grid: Grid,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a new game on an empty `height` x `width` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Configuration`] unless both dimensions are at
    /// least 4 and the cell count fits in memory addressing.
    #[instrument]
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let grid = Grid::new(height, width)?;
        debug!("Created game");
        Ok(Self {
            grid,
            current_player: Player::Player1,
            status: GameStatus::InProgress,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_parts(grid: Grid, current_player: Player, status: GameStatus) -> Self {
        Self {
            grid,
            current_player,
            status,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player to move, or the final mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of pieces on the grid.
    pub fn move_count(&self) -> usize {
        self.grid.occupied()
    }

    /// Columns that accept a piece. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        open_columns(&self.grid)
    }

    /// Row a piece dropped into `column` would land on, or `None` if the
    /// column is full.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfRange`] if `column` is not on the board.
    #[instrument(skip(self))]
    pub fn legal_drop_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        drop_row(&self.grid, column)
    }

    /// Drops the current player's piece into `column`.
    ///
    /// The move is evaluated for the player who made it: a completed line
    /// wins, otherwise a full grid draws, otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] if the game has ended
    /// - [`GameError::OutOfRange`] if `column` is not on the board
    /// - [`GameError::IllegalMove`] if `column` is full
    ///
    /// The state is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(player = %self.current_player, status = %self.status))]
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        let row = MoveContract::pre(self, &column)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        self.grid.set(row, column, super::Cell::Occupied(mover))?;
        self.status = evaluate(&self.grid, mover, row, column);
        if !self.status.is_terminal() {
            self.current_player = mover.opponent();
        }

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            *self = before;
            return Err(err);
        }

        debug!(row, status = %self.status, "Piece placed");
        Ok(MoveOutcome::new(row, column, mover, self.status))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            grid: Grid::empty(DEFAULT_HEIGHT, DEFAULT_WIDTH),
            current_player: Player::Player1,
            status: GameStatus::InProgress,
        }
    }
}
