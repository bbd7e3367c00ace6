//! Command-line interface for darts_counter.

use clap::{Parser, Subcommand};
use darts_counter::InputMode;

/// Darts Counter - scoreboard for two-player darts matches
#[derive(Parser, Debug)]
#[command(name = "darts_counter")]
#[command(about = "Score a two-player darts match from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a match interactively (type `mode` to toggle input, `quit` to leave)
    Play {
        /// Path to match config (TOML). Defaults are used if it doesn't exist.
        #[arg(short, long, default_value = "darts.toml")]
        config: std::path::PathBuf,

        /// Name of the player who throws first
        #[arg(long)]
        player1: Option<String>,

        /// Name of the second player
        #[arg(long)]
        player2: Option<String>,

        /// Starting score for each leg
        #[arg(short, long)]
        target: Option<u32>,

        /// Legs needed to win a set
        #[arg(short, long)]
        legs: Option<u32>,

        /// Sets needed to win the match
        #[arg(short, long)]
        sets: Option<u32>,

        /// Input mode to start in
        #[arg(short, long, value_enum)]
        mode: Option<InputMode>,

        /// Emit one JSON frame per action instead of the text board
        #[arg(long)]
        json: bool,
    },

    /// Print the suggested finish for a remaining score
    Checkout {
        /// Remaining score
        #[arg(allow_negative_numbers = true)]
        score: i64,
    },
}
