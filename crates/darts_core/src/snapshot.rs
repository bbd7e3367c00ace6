//! Serializable scoreboard views.
//!
//! Snapshots are what a presentation layer renders: plain data copied out
//! of the engine, so nothing outside the engine can mutate match state.

use super::checkout;
use super::player::Player;
use super::types::{MatchFormat, Seat};
use serde::{Deserialize, Serialize};

/// One player's scoreboard line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Player's name.
    pub name: String,
    /// Points still needed in the current leg.
    pub score: u32,
    /// Points scored in the last completed turn.
    pub last_turn_scored: u32,
    /// Legs won in the current set.
    pub legs_won: u32,
    /// Sets won in the match.
    pub sets_won: u32,
    /// Three-dart average over the match.
    pub three_dart_average: f64,
    /// Suggested finish for the current score, if there is one.
    pub checkout: Option<String>,
}

impl PlayerSnapshot {
    /// Copies the displayable state out of a player.
    pub fn from_player(player: &Player) -> Self {
        let route = checkout::suggest(i64::from(player.current_score()));
        Self {
            name: player.name().to_string(),
            score: player.current_score(),
            last_turn_scored: player.last_turn_scored(),
            legs_won: player.legs_won(),
            sets_won: player.sets_won(),
            three_dart_average: player.three_dart_average(),
            checkout: (!route.is_empty()).then(|| route.to_string()),
        }
    }
}

/// Whole-match scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Both players, seat one first.
    pub players: [PlayerSnapshot; 2],
    /// Seat at the oche.
    pub current: Seat,
    /// Match configuration.
    pub format: MatchFormat,
    /// Darts thrown so far this turn.
    pub darts_thrown: u32,
    /// Match winner, once decided.
    pub winner: Option<Seat>,
}

impl MatchSnapshot {
    /// Returns the line for `seat`.
    pub fn player(&self, seat: Seat) -> &PlayerSnapshot {
        &self.players[seat.index()]
    }

    /// Returns the line for the player at the oche.
    pub fn current_player(&self) -> &PlayerSnapshot {
        self.player(self.current)
    }
}
