//! Darts Counter - Unified CLI
//!
//! Terminal scoreboard for two-player darts matches.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use darts_counter::{AppConfig, OutputStyle, Overrides, Scoreboard, repl};
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            player1,
            player2,
            target,
            legs,
            sets,
            mode,
            json,
        } => {
            let overrides = Overrides {
                player1,
                player2,
                target,
                legs,
                sets,
                mode,
            };
            run_play(config, overrides, json)
        }
        Command::Checkout { score } => run_checkout(score),
    }
}

/// Run the interactive scoreboard
#[instrument(skip_all, fields(config_path = %config.display()))]
fn run_play(config: std::path::PathBuf, overrides: Overrides, json: bool) -> Result<()> {
    let config = AppConfig::load(&config)?.with_overrides(overrides)?;
    info!(
        player1 = %config.player1(),
        player2 = %config.player2(),
        format = %config.format().describe(),
        "Starting match"
    );

    let mut board = Scoreboard::from_config(&config);
    let style = if json {
        OutputStyle::Json
    } else {
        OutputStyle::Text
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut board, stdin.lock(), stdout.lock(), style)
}

/// Print a checkout suggestion
#[instrument]
fn run_checkout(score: i64) -> Result<()> {
    let route = darts_core::suggest(score);
    if route.is_empty() {
        println!("No checkout");
    } else {
        println!("{}", route);
    }
    Ok(())
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,darts_counter=info,darts_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
