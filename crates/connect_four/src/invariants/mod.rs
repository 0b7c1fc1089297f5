//! Properties every reachable [`GameState`](crate::GameState) satisfies.
//!
//! [`MoveContract`](crate::contracts::MoveContract) checks the whole
//! [`ConnectFourInvariants`] set after each move in debug builds.

/// A property of `S` that no sequence of legal moves can break.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Names the property in violation reports.
    fn description() -> &'static str;
}

/// A failed [`Invariant`], identified by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// The [`Invariant::description`] of the property that failed.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Returns every failed property, in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod gravity;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use gravity::GravityInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// Gravity, turn order, and status agreement, checked after every move.
pub type ConnectFourInvariants = (
    GravityInvariant,
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, Grid};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let game = GameState::default();
        assert!(ConnectFourInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = GameState::default();
        for column in [3, 3, 4, 2, 0, 6] {
            game.apply_move(column).unwrap();
        }
        assert!(ConnectFourInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut grid = Grid::default();
        // Floating piece owned by Player 2 with Player 1 to move.
        grid.set(0, 0, crate::Cell::Occupied(crate::Player::Player2))
            .unwrap();
        let game = GameState::from_parts(grid, crate::Player::Player1, crate::GameStatus::InProgress);

        let violations = ConnectFourInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, GravityInvariant::description());
        assert_eq!(
            violations[1].description,
            AlternatingTurnInvariant::description()
        );
    }
}
