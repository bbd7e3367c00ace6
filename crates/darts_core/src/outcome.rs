//! Results of applying a throw to the match.
//!
//! Outcomes are values, not errors: invalid input and busts are ordinary
//! results the presentation layer reports. `Display` yields the scoreboard
//! wording.

use serde::{Deserialize, Serialize};

/// Why a turn total was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ScoreRejection {
    /// Total below zero.
    #[display("Invalid score: cannot be negative!")]
    Negative,
    /// Total above 180.
    #[display("Invalid score: cannot exceed 180!")]
    AboveMaximum,
    /// Total that no three darts add up to.
    #[display("Invalid score: not possible in 3 darts!")]
    Impossible,
}

/// What happened when a dart or a turn total was entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", content = "detail")]
pub enum ThrowOutcome {
    /// Dart recorded; the same player throws again.
    #[display("")]
    Continue,
    /// Dart entry could not be parsed; nothing changed.
    #[display("Invalid dart entry!")]
    InvalidDart,
    /// Turn would have left an unfinishable score; reverted and passed on.
    #[display("Bust!")]
    Bust,
    /// Turn complete; the other player is up.
    #[display("Switch")]
    Switch,
    /// Named player won the leg.
    #[display("{} wins the LEG!", _0)]
    LegWon(String),
    /// Named player's leg completed a set.
    #[display("{} wins the SET!", _0)]
    SetWon(String),
    /// Named player's set completed the match.
    #[display("{} wins the MATCH!", _0)]
    MatchWon(String),
    /// Turn total was refused; nothing changed.
    #[display("{}", _0)]
    InvalidScore(ScoreRejection),
}

impl ThrowOutcome {
    /// True if the throwing player's turn is over.
    pub fn ends_turn(&self) -> bool {
        matches!(
            self,
            ThrowOutcome::Bust
                | ThrowOutcome::Switch
                | ThrowOutcome::LegWon(_)
                | ThrowOutcome::SetWon(_)
                | ThrowOutcome::MatchWon(_)
        )
    }

    /// True if the input was refused and state is unchanged.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ThrowOutcome::InvalidDart | ThrowOutcome::InvalidScore(_))
    }

    /// Name of the leg, set or match winner, if this outcome has one.
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            ThrowOutcome::LegWon(name) | ThrowOutcome::SetWon(name) | ThrowOutcome::MatchWon(name) => {
                Some(name)
            }
            _ => None,
        }
    }
}
