//! Line-oriented game loop.
//!
//! Reads one column per line, forwards it to the engine, and writes the
//! board (or a JSON line) after every accepted move. Rejected input gets a
//! plain message in text mode and a JSON error line in JSON mode.

use connect_four::{Game, GameError, GameState, MoveOutcome};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Board drawing and plain messages.
    Text,
    /// One JSON object per line.
    Json,
}

/// JSON line written after each accepted move.
#[derive(Debug, Serialize)]
struct MoveReport<'a> {
    #[serde(flatten)]
    outcome: &'a MoveOutcome,
    state: &'a GameState,
}

/// JSON line written for input the engine did not accept.
#[derive(Debug, Serialize)]
struct RejectionReport<'a> {
    error: &'static str,
    message: &'a str,
}

/// Runs the game until it ends, input runs out, or the user types `q`.
///
/// Returns the final game so callers can inspect the outcome.
#[instrument(skip_all, fields(mode = ?mode))]
pub fn run<R: BufRead, W: Write>(
    mut game: Game,
    input: R,
    mut output: W,
    mode: OutputMode,
) -> anyhow::Result<Game> {
    if mode == OutputMode::Text {
        writeln!(output, "{}", game.state().grid())?;
        prompt(&game, &mut output)?;
    }

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("q") {
            info!("Quit requested");
            break;
        }

        let Ok(column) = entry.parse::<usize>() else {
            debug!(entry, "Ignoring non-numeric input");
            reject(&mut output, mode, "NotAColumn", &format!("Not a column: {entry}"))?;
            continue;
        };

        match game.attempt_move(column) {
            Ok(outcome) => {
                report(&game, &outcome, &mut output, mode)?;
                if outcome.status.is_terminal() {
                    if mode == OutputMode::Text {
                        writeln!(output, "{}", outcome.status)?;
                    }
                    return Ok(game);
                }
            }
            Err(err @ GameError::OutOfRange { .. }) => {
                reject(&mut output, mode, "OutOfRange", &err.to_string())?;
            }
            Err(err @ GameError::IllegalMove { .. }) => {
                reject(&mut output, mode, "IllegalMove", &err.to_string())?;
            }
            Err(err) => return Err(err.into()),
        }

        if mode == OutputMode::Text {
            prompt(&game, &mut output)?;
        }
    }

    warn!(moves = game.state().move_count(), "Input ended before the game finished");
    Ok(game)
}

fn report<W: Write>(
    game: &Game,
    outcome: &MoveOutcome,
    output: &mut W,
    mode: OutputMode,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Text => writeln!(output, "{}", game.state().grid())?,
        OutputMode::Json => {
            let report = MoveReport {
                outcome,
                state: game.state(),
            };
            writeln!(output, "{}", serde_json::to_string(&report)?)?;
        }
    }
    Ok(())
}

fn reject<W: Write>(
    output: &mut W,
    mode: OutputMode,
    error: &'static str,
    message: &str,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::Text => writeln!(output, "{message}")?,
        OutputMode::Json => {
            let report = RejectionReport { error, message };
            writeln!(output, "{}", serde_json::to_string(&report)?)?;
        }
    }
    Ok(())
}

fn prompt<W: Write>(game: &Game, output: &mut W) -> std::io::Result<()> {
    writeln!(
        output,
        "{} ({}), pick a column 0-{}:",
        game.state().current_player(),
        game.state().current_player().symbol(),
        game.state().width() - 1
    )
}
