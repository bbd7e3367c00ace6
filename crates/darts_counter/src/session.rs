//! Scoreboard controller.
//!
//! Sits between raw keyboard input and the engine: chooses the input mode,
//! pre-screens entries, keeps the list of darts thrown this turn and turns
//! engine outcomes into messages for the screen.

use crate::config::AppConfig;
use darts_core::{Dart, MatchEngine, ThrowOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a turn is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// One dart at a time (`t20`, `d16`, `25`).
    PerDart,
    /// The whole turn as a single total.
    #[default]
    Total,
}

impl InputMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::PerDart => "Per-Dart Mode",
            Self::Total => "Total Mode",
        }
    }

    /// Toggles between `PerDart` and `Total`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::PerDart => Self::Total,
            Self::Total => Self::PerDart,
        }
    }
}

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Neutral status, e.g. a mode change.
    Info,
    /// Turn or leg progress.
    Success,
    /// Request refused, nothing wrong with the entry itself.
    Warning,
    /// Entry rejected or turn busted.
    Error,
}

/// Message for the player after an action.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, derive_new::new)]
pub struct Feedback {
    /// Text to show; empty while a turn simply continues.
    message: String,
    /// How to present the text.
    tone: Tone,
}

impl Feedback {
    #[instrument]
    fn from_outcome(outcome: &ThrowOutcome) -> Self {
        let tone = match outcome {
            ThrowOutcome::Continue => Tone::Info,
            ThrowOutcome::InvalidDart | ThrowOutcome::InvalidScore(_) | ThrowOutcome::Bust => {
                Tone::Error
            }
            ThrowOutcome::Switch
            | ThrowOutcome::LegWon(_)
            | ThrowOutcome::SetWon(_)
            | ThrowOutcome::MatchWon(_) => Tone::Success,
        };
        Self::new(outcome.to_string(), tone)
    }
}

/// Message shown when a total cannot be read as a number.
pub const INVALID_TOTAL: &str = "Enter a valid total (number only).";

/// Message shown when the mode is toggled with darts already thrown.
pub const MODE_LOCKED: &str = "Can't switch mode mid-turn!";

/// Message shown for input after the match has been decided.
pub const MATCH_OVER: &str = "Match is over";

/// A match being scored from the keyboard.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    engine: MatchEngine,
    mode: InputMode,
    turn_darts: Vec<Dart>,
}

impl Scoreboard {
    /// Creates a scoreboard around `engine`.
    #[instrument(skip(engine))]
    pub fn new(engine: MatchEngine, mode: InputMode) -> Self {
        Self {
            engine,
            mode,
            turn_darts: Vec::new(),
        }
    }

    /// Starts a fresh match from configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &AppConfig) -> Self {
        let engine = MatchEngine::new(config.player1(), config.player2(), *config.format());
        Self::new(engine, *config.input_mode())
    }

    /// The match being scored.
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Darts entered so far this turn in per-dart mode.
    pub fn turn_darts(&self) -> &[Dart] {
        &self.turn_darts
    }

    /// This turn's darts as shown on the board, e.g. `T20  T20  D10`.
    pub fn turn_darts_label(&self) -> String {
        self.turn_darts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Switches input mode, refused once a dart of the turn has been entered.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn toggle_mode(&mut self) -> Feedback {
        if self.engine.darts_thrown() > 0 {
            warn!("Mode toggle refused mid-turn");
            return Feedback::new(MODE_LOCKED.to_string(), Tone::Warning);
        }

        self.mode = self.mode.toggle();
        info!(mode = ?self.mode, "Input mode changed");
        Feedback::new(self.mode.label().to_string(), Tone::Info)
    }

    /// Handles one line of input in the current mode.
    ///
    /// Blank input is ignored and returns `None`.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn submit(&mut self, input: &str) -> Option<Feedback> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if self.engine.is_finished() {
            debug!("Input after match end ignored");
            return Some(Feedback::new(MATCH_OVER.to_string(), Tone::Warning));
        }

        let outcome = match self.mode {
            InputMode::PerDart => match input.parse::<Dart>() {
                Ok(dart) => {
                    self.turn_darts.push(dart);
                    self.engine.throw_dart(input)
                }
                Err(error) => {
                    debug!(%error, "Dart entry rejected before reaching the engine");
                    ThrowOutcome::InvalidDart
                }
            },
            InputMode::Total => match input.parse::<i64>() {
                Ok(total) => self.engine.throw_total(total),
                Err(_) => return Some(Feedback::new(INVALID_TOTAL.to_string(), Tone::Error)),
            },
        };

        if outcome.ends_turn() {
            self.turn_darts.clear();
        }

        Some(Feedback::from_outcome(&outcome))
    }
}
