//! Error types.

use super::types::GameStatus;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned by game operations.
///
/// Every operation that returns this error leaves the game unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// Board dimensions are too small to hold a line of four.
    #[display("Invalid board dimensions {height}x{width} (both must be at least 4)")]
    Configuration {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// Column index is not on the board.
    #[display("Column {column} is out of range (board has {width} columns)")]
    OutOfRange {
        /// Requested column.
        column: usize,
        /// Board width.
        width: usize,
    },

    /// Column is already full.
    #[display("Column {column} is full")]
    IllegalMove {
        /// Requested column.
        column: usize,
    },

    /// The game has already ended.
    #[display("Game is already over ({status})")]
    GameAlreadyOver {
        /// Terminal status of the game.
        status: GameStatus,
    },

    /// Direct grid write outside the grid.
    #[display("Cell ({row}, {column}) is off the grid")]
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// A move broke an engine invariant (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GameError> for ConfigError {
    #[track_caller]
    fn from(err: GameError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::OutOfRange {
                column: 7,
                width: 7
            }
            .to_string(),
            "Column 7 is out of range (board has 7 columns)"
        );
        assert_eq!(
            GameError::GameAlreadyOver {
                status: GameStatus::Won(Player::Player1)
            }
            .to_string(),
            "Game is already over (Player 1 won!)"
        );
    }

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("bad");
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Config error: bad at "));
    }
}
