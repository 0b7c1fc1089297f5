//! Contract-based validation for Connect Four moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::invariants::{ConnectFourInvariants, InvariantSet};
use super::rules::drop_row;
use super::{GameError, GameState};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a passing precondition resolves, handed on to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not ended.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`GameError::GameAlreadyOver`] once the status is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), GameError> {
        if game.is_terminal() {
            Err(GameError::GameAlreadyOver {
                status: game.status(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: The column exists and has room for another piece.
pub struct ColumnOpen;

impl ColumnOpen {
    /// Returns the row the piece would land on.
    ///
    /// Fails with [`GameError::OutOfRange`] or [`GameError::IllegalMove`].
    #[instrument(skip(game))]
    pub fn check(column: usize, game: &GameState) -> Result<usize, GameError> {
        drop_row(game.grid(), column)?.ok_or(GameError::IllegalMove { column })
    }
}

/// Composite precondition: the game is running and the column is open.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move and returns its landing row.
    #[instrument(skip(game))]
    pub fn check(column: usize, game: &GameState) -> Result<usize, GameError> {
        GameInProgress::check(game)?;
        ColumnOpen::check(column, game)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for column drops.
///
/// Preconditions:
/// - Game is in progress
/// - Column is on the board and not full (resolves to the landing row)
///
/// Postconditions:
/// - Exactly one piece was added and no existing piece changed
/// - All [`ConnectFourInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = usize;

    fn pre(game: &GameState, column: &usize) -> Result<usize, GameError> {
        LegalMove::check(*column, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        let kept = before
            .grid()
            .cells()
            .iter()
            .zip(after.grid().cells())
            .all(|(old, new)| old.is_empty() || old == new);
        let added = after.move_count() == before.move_count() + 1;
        if !kept || !added {
            warn!(kept, added, "Move did not add exactly one piece");
            return Err(GameError::InvariantViolation(
                "Postcondition failed: move must add exactly one piece".to_string(),
            ));
        }

        ConnectFourInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
