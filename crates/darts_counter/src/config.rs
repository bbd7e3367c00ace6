//! Scoreboard configuration: player names, match format and input mode.

use crate::session::InputMode;
use darts_core::MatchFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a scoreboard session, usually read from `darts.toml`.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name shown for the player who throws first.
    #[serde(default = "default_player1")]
    player1: String,

    /// Name shown for the second player.
    #[serde(default = "default_player2")]
    player2: String,

    /// Starting score, legs per set and sets to win.
    #[serde(default)]
    format: MatchFormat,

    /// Input mode the scoreboard opens in.
    #[serde(default)]
    input_mode: InputMode,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
            format: MatchFormat::default(),
            input_mode: InputMode::default(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replacement name for player one.
    pub player1: Option<String>,
    /// Replacement name for player two.
    pub player2: Option<String>,
    /// Replacement starting score.
    pub target: Option<u32>,
    /// Replacement legs per set.
    pub legs: Option<u32>,
    /// Replacement sets to win.
    pub sets: Option<u32>,
    /// Replacement input mode.
    pub mode: Option<InputMode>,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .format
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid match format: {}", e)))?;

        info!(player1 = %config.player1, player2 = %config.player2, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides, re-validating the match format.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, ConfigError> {
        if let Some(name) = overrides.player1 {
            self.player1 = name;
        }
        if let Some(name) = overrides.player2 {
            self.player2 = name;
        }
        if let Some(mode) = overrides.mode {
            self.input_mode = mode;
        }

        self.format = MatchFormat::new(
            overrides.target.unwrap_or(self.format.target_score()),
            overrides.legs.unwrap_or(self.format.legs_per_set()),
            overrides.sets.unwrap_or(self.format.sets_to_win()),
        )
        .map_err(|e| ConfigError::new(format!("Invalid match format: {}", e)))?;

        debug!(format = %self.format.describe(), "Overrides applied");
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
