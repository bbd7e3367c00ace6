//! Darts core - scoring logic for two-player x01 matches.
//!
//! This crate holds everything with real rules in it and nothing that
//! touches a screen or a file.
//!
//! # Architecture
//!
//! - **Checkout**: fixed table of finishing routes for scores 2-170
//! - **Dart**: per-dart entry grammar (`t20`, `d16`, `25`, `50`)
//! - **Player**: remaining score, turn bookkeeping, legs, sets, averages
//! - **Engine**: turn, leg, set and match transitions for two players
//!
//! # Example
//!
//! ```
//! use darts_core::{MatchEngine, MatchFormat, ThrowOutcome};
//!
//! let mut engine = MatchEngine::new("Phil", "Michael", MatchFormat::default());
//! assert_eq!(engine.throw_dart("t20"), ThrowOutcome::Continue);
//! assert_eq!(engine.throw_total(100), ThrowOutcome::Switch);
//! assert_eq!(engine.player1().current_score(), 341);
//! assert_eq!(engine.checkout_suggestion(100), "T20 D20");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod checkout;
mod dart;
mod engine;
mod outcome;
mod player;
mod snapshot;
mod types;

// Crate-level exports - Checkout table
pub use checkout::{CHECKOUTS, MAX_CHECKOUT, MIN_CHECKOUT, NO_CHECKOUT, has_checkout, suggest};

// Crate-level exports - Dart entry
pub use dart::{Dart, DartParseError, MAX_SEGMENT, MIN_SEGMENT, Multiplier, parse_dart};

// Crate-level exports - Engine
pub use engine::{IMPOSSIBLE_THREE_DART_SCORES, MAX_TURN_SCORE, MatchEngine};

// Crate-level exports - Outcomes
pub use outcome::{ScoreRejection, ThrowOutcome};

// Crate-level exports - Player state
pub use player::{DARTS_PER_TURN, Player};

// Crate-level exports - Views
pub use snapshot::{MatchSnapshot, PlayerSnapshot};

// Crate-level exports - Domain types
pub use types::{FormatError, MatchFormat, Seat};
