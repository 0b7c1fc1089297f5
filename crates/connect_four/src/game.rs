//! Entry point for hosting shells.

use super::{GameConfig, GameError, GameState, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// Connect Four game session.
///
/// A shell translates user input into column indices and calls
/// [`Game::attempt_move`]; rendering the result is left to the shell.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a game with the configured board dimensions.
    #[instrument]
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(*config.height(), *config.width())?,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drops the current player's piece into `column`.
    ///
    /// Out-of-range columns and full columns are rejected with no change,
    /// and the shell is expected to ignore them. A move after the game has
    /// ended is rejected too; shells should stop sending moves once the
    /// returned status is terminal.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn attempt_move(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        match self.state.apply_move(column) {
            Ok(outcome) => {
                if outcome.status.is_terminal() {
                    info!(
                        row = outcome.row,
                        column,
                        status = %outcome.status,
                        moves = self.state.move_count(),
                        "Game over"
                    );
                } else {
                    debug!(row = outcome.row, column, "Move accepted");
                }
                Ok(outcome)
            }
            Err(err @ GameError::IllegalMove { .. }) => {
                debug!(%err, "Column full, move ignored");
                Err(err)
            }
            Err(err) => {
                warn!(%err, "Move rejected");
                Err(err)
            }
        }
    }
}
