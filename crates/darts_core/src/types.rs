//! Core domain types shared by the engine and its callers.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two places at the oche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Seat {
    /// First player named when the match was created; throws first.
    One,
    /// Second player.
    Two,
}

impl Seat {
    /// Returns the opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// Index into a two-element player array.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// Starting score, set length and match length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFormat {
    /// Score each leg counts down from (e.g. 501).
    target_score: u32,
    /// Legs needed to win a set.
    legs_per_set: u32,
    /// Sets needed to win the match.
    sets_to_win: u32,
}

impl MatchFormat {
    /// Creates a validated match format.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the target score is below 2 or either
    /// count is zero.
    #[instrument]
    pub fn new(target_score: u32, legs_per_set: u32, sets_to_win: u32) -> Result<Self, FormatError> {
        let format = Self {
            target_score,
            legs_per_set,
            sets_to_win,
        };
        format.validate()?;
        Ok(format)
    }

    /// Checks a format that bypassed [`MatchFormat::new`], e.g. one read from a file.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.target_score < 2 {
            return Err(FormatError::TargetTooLow(self.target_score));
        }
        if self.legs_per_set == 0 {
            return Err(FormatError::NoLegs);
        }
        if self.sets_to_win == 0 {
            return Err(FormatError::NoSets);
        }
        Ok(())
    }

    /// Score each leg counts down from.
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Legs needed to win a set.
    pub fn legs_per_set(&self) -> u32 {
        self.legs_per_set
    }

    /// Sets needed to win the match.
    pub fn sets_to_win(&self) -> u32 {
        self.sets_to_win
    }

    /// Human-readable summary, e.g. `First to 3 Legs, 3 Sets`.
    pub fn describe(&self) -> String {
        format!(
            "First to {} Legs, {} Sets",
            self.legs_per_set, self.sets_to_win
        )
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self {
            target_score: 501,
            legs_per_set: 3,
            sets_to_win: 3,
        }
    }
}

/// Invalid match format.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum FormatError {
    /// A leg has to start on a score that can be checked out.
    #[display("Target score {} is below 2", _0)]
    TargetTooLow(u32),

    /// A set needs at least one leg.
    #[display("Legs per set must be at least 1")]
    NoLegs,

    /// A match needs at least one set.
    #[display("Sets to win must be at least 1")]
    NoSets,
}

impl std::error::Error for FormatError {}
