//! Connect Four - terminal shell
//!
//! Reads column choices from stdin and plays them against the rules engine.

#![warn(missing_docs)]

mod cli;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use connect_four::{Game, GameConfig};
use shell::OutputMode;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let game = Game::new(&config).context("Failed to create game")?;

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };

    info!(height = *config.height(), width = *config.width(), "Starting game");
    let stdin = std::io::stdin();
    let game = shell::run(game, stdin.lock(), std::io::stdout().lock(), mode)?;
    info!(status = %game.state().status(), "Shell finished");

    Ok(())
}

/// Builds the board configuration from the optional file and CLI overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let config = base.with_overrides(cli.height, cli.width);
    config.validate()?;
    Ok(config)
}
