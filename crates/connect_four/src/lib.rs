//! Connect Four rules engine.
//!
//! Pieces drop into the columns of a grid; the first player to line up four
//! pieces horizontally, vertically, or diagonally wins, and a full grid with
//! no line is a draw.
//!
//! # Architecture
//!
//! - **Types**: grid, cells, players, status
//! - **Rules**: pure functions for column drops, win and draw detection
//! - **State**: [`GameState`], the only mutable data, changed one move at a time
//! - **Contracts/Invariants**: pre- and postconditions checked on every move
//! - **Game**: [`Game::attempt_move`], the entry point for hosting shells
//!
//! # Example
//!
//! ```
//! use connect_four::{Game, GameStatus, Player};
//!
//! let mut game = Game::default();
//! for column in [0, 1, 0, 1, 0, 1] {
//!     game.attempt_move(column)?;
//! }
//! let outcome = game.attempt_move(0)?;
//! assert_eq!(outcome.status, GameStatus::Won(Player::Player1));
//! # Ok::<(), connect_four::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, ConnectFourInvariants, GravityInvariant, Invariant,
    InvariantSet, InvariantViolation, StatusConsistentInvariant,
};
pub use rules::{Axis, Window, has_win, has_win_through, is_draw, winning_window};
pub use state::{GameState, MoveOutcome};
pub use types::{Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, GameStatus, Grid, Player, WINDOW_LEN};
