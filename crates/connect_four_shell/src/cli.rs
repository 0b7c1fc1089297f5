//! Command-line interface for the Connect Four shell.

use clap::Parser;

/// Connect Four - play in the terminal, one column per line
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Two-player Connect Four in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with `height` and `width`
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Number of rows (overrides the config file)
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of columns (overrides the config file)
    #[arg(long)]
    pub width: Option<usize>,

    /// Print each move result as a JSON line instead of drawing the board
    #[arg(long)]
    pub json: bool,
}
