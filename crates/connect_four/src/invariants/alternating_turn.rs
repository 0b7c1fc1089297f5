//! Alternating turn invariant: Player 1, Player 2, Player 1, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns, Player 1 first.
///
/// Player 1 has either as many pieces as Player 2 or exactly one more.
/// While the game is in progress the player to move is Player 1 exactly when
/// the counts are equal. Once the game is over the current player is frozen
/// at the player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let ones = game.grid().count(Player::Player1);
        let twos = game.grid().count(Player::Player2);

        let last_mover = if ones == twos {
            Player::Player2
        } else if ones == twos + 1 {
            Player::Player1
        } else {
            return false;
        };

        if game.is_terminal() {
            game.current_player() == last_mover
        } else {
            game.current_player() == last_mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Player 1, Player 2, Player 1, ...)"
    }
}
