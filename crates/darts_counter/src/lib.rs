//! Darts counter - terminal scoreboard for two-player darts matches.
//!
//! This crate is the presentation layer over [`darts_core`]: it reads
//! configuration, takes throws from a terminal and renders the board.
//!
//! # Architecture
//!
//! - **Config**: TOML match setup with command-line overrides
//! - **Session**: input modes, entry screening and per-turn dart list
//! - **Render**: text and JSON scoreboard views
//! - **Repl**: the read-throw-render loop
//!
//! # Example
//!
//! ```
//! use darts_counter::{AppConfig, OutputStyle, Scoreboard, repl};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut board = Scoreboard::from_config(&AppConfig::default());
//! let input = "180\n140\nquit\n".as_bytes();
//! let mut output = Vec::new();
//! repl::run(&mut board, input, &mut output, OutputStyle::Text)?;
//! assert_eq!(board.engine().player1().current_score(), 321);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod render;
mod session;

/// Read-throw-render loop.
pub mod repl;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, Overrides};

// Crate-level exports - Rendering
pub use render::{Frame, render_feedback, render_json, render_text};

// Crate-level exports - Scoreboard session
pub use session::{
    Feedback, INVALID_TOTAL, InputMode, MATCH_OVER, MODE_LOCKED, Scoreboard, Tone,
};

// Crate-level exports - Loop output
pub use repl::OutputStyle;
