//! Per-competitor scoring state.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Darts credited to every completed turn for averaging, however many were thrown.
pub const DARTS_PER_TURN: u32 = 3;

/// A competitor's remaining score, turn bookkeeping, leg/set counts and statistics.
///
/// A player knows nothing about its opponent or the match rules; the engine
/// decides when turns start and end and when legs and sets are awarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    current_score: u32,
    turn_start_score: u32,
    last_turn_scored: u32,
    legs_won: u32,
    sets_won: u32,
    total_darts_thrown: u32,
    total_points_scored: u32,
}

impl Player {
    /// Creates a player standing on `start_score`.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, start_score: u32) -> Self {
        Self {
            name: name.as_ref().to_string(),
            current_score: start_score,
            turn_start_score: start_score,
            last_turn_scored: 0,
            legs_won: 0,
            sets_won: 0,
            total_darts_thrown: 0,
            total_points_scored: 0,
        }
    }

    /// Player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points still needed in the current leg.
    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    /// Score when the current turn began.
    pub fn turn_start_score(&self) -> u32 {
        self.turn_start_score
    }

    /// Points scored in the most recently completed turn (0 after a bust).
    pub fn last_turn_scored(&self) -> u32 {
        self.last_turn_scored
    }

    /// Legs won in the current set.
    pub fn legs_won(&self) -> u32 {
        self.legs_won
    }

    /// Sets won in the match.
    pub fn sets_won(&self) -> u32 {
        self.sets_won
    }

    /// Darts credited for averaging.
    pub fn total_darts_thrown(&self) -> u32 {
        self.total_darts_thrown
    }

    /// Points credited for averaging.
    pub fn total_points_scored(&self) -> u32 {
        self.total_points_scored
    }

    pub(crate) fn set_current_score(&mut self, score: u32) {
        self.current_score = score;
    }

    /// Snapshots the current score as the start of a new turn.
    #[instrument(skip(self), fields(name = %self.name, score = self.current_score))]
    pub fn start_turn(&mut self) {
        self.turn_start_score = self.current_score;
    }

    /// Closes the current turn and folds it into the statistics.
    ///
    /// Every turn is credited with [`DARTS_PER_TURN`] darts regardless of
    /// `darts_thrown_this_turn`, so a two-dart finish averages the same as a
    /// three-dart one. A bust scores nothing.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn end_turn(&mut self, darts_thrown_this_turn: u32, bust: bool) {
        let scored = if bust {
            0
        } else {
            self.turn_start_score.saturating_sub(self.current_score)
        };
        self.last_turn_scored = scored;

        self.total_darts_thrown += DARTS_PER_TURN;
        self.total_points_scored += scored;

        debug!(
            scored,
            total_points = self.total_points_scored,
            total_darts = self.total_darts_thrown,
            "Turn ended"
        );
    }

    /// Puts the player back on `target_score` for a new leg.
    ///
    /// Leg and set counts and the lifetime statistics are kept.
    pub fn reset_for_new_leg(&mut self, target_score: u32) {
        self.current_score = target_score;
        self.turn_start_score = target_score;
        self.last_turn_scored = 0;
    }

    /// Records a leg win.
    pub fn add_leg(&mut self) {
        self.legs_won += 1;
    }

    /// Records a set win.
    pub fn add_set(&mut self) {
        self.sets_won += 1;
    }

    /// Clears the leg count at the end of a set.
    pub fn reset_legs(&mut self) {
        self.legs_won = 0;
    }

    /// Average points per three darts, or `0.0` before any turn is recorded.
    pub fn three_dart_average(&self) -> f64 {
        if self.total_darts_thrown == 0 {
            return 0.0;
        }
        let per_dart = f64::from(self.total_points_scored) / f64::from(self.total_darts_thrown);
        per_dart * f64::from(DARTS_PER_TURN)
    }
}
