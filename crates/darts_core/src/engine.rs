//! Match engine for two-player x01 darts.
//!
//! The engine owns both players and drives four nested state machines:
//! the turn (up to three darts), the leg (first to exactly zero), the set
//! (first to `legs_per_set` legs) and the match (first to `sets_to_win`
//! sets). Every input is validated before anything is mutated, so a
//! rejected throw leaves the match exactly as it was.

use super::checkout;
use super::dart::{DartParseError, parse_dart};
use super::outcome::{ScoreRejection, ThrowOutcome};
use super::player::{DARTS_PER_TURN, Player};
use super::snapshot::{MatchSnapshot, PlayerSnapshot};
use super::types::{MatchFormat, Seat};
use tracing::{debug, info, instrument, warn};

/// Highest total three darts can score.
pub const MAX_TURN_SCORE: i64 = 180;

/// Totals up to 180 that no combination of three darts produces.
pub const IMPOSSIBLE_THREE_DART_SCORES: [i64; 12] =
    [179, 178, 176, 175, 173, 172, 169, 168, 166, 165, 163, 162];

/// Lowest score a player may be left on; 1 cannot be finished on a double.
const MIN_REMAINING: u32 = 2;

/// Two-player darts match.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    players: [Player; 2],
    current: Seat,
    set_starter: Seat,
    leg_starter: Seat,
    format: MatchFormat,
    darts_thrown: u32,
    winner: Option<Seat>,
}

// ─────────────────────────────────────────────────────────────
//  Construction and accessors
// ─────────────────────────────────────────────────────────────

impl MatchEngine {
    /// Creates a match with both players on the target score and player one to throw.
    #[instrument(skip(player1, player2), fields(player1 = %player1.as_ref(), player2 = %player2.as_ref()))]
    pub fn new(player1: impl AsRef<str>, player2: impl AsRef<str>, format: MatchFormat) -> Self {
        let target = format.target_score();
        let mut players = [Player::new(player1, target), Player::new(player2, target)];
        players[Seat::One.index()].start_turn();

        info!(format = %format.describe(), target, "Match created");

        Self {
            players,
            current: Seat::One,
            set_starter: Seat::One,
            leg_starter: Seat::One,
            format,
            darts_thrown: 0,
            winner: None,
        }
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns player one.
    pub fn player1(&self) -> &Player {
        self.player(Seat::One)
    }

    /// Returns player two.
    pub fn player2(&self) -> &Player {
        self.player(Seat::Two)
    }

    /// Seat of the player at the oche.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    /// Player at the oche.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    /// Match configuration.
    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    /// Darts thrown so far this turn in per-dart mode (0 to 2 between calls).
    pub fn darts_thrown(&self) -> u32 {
        self.darts_thrown
    }

    /// Seat that opened the current leg.
    pub fn leg_starter(&self) -> Seat {
        self.leg_starter
    }

    /// Seat that opened the current set.
    pub fn set_starter(&self) -> Seat {
        self.set_starter
    }

    /// Seat that won the match, once it has been won.
    ///
    /// The engine keeps accepting throws after this is set; callers are
    /// expected to stop.
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    /// True once a match win has been returned.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Suggested finish for `score`, or `""`.
    pub fn checkout_suggestion(&self, score: i64) -> &'static str {
        checkout::suggest(score)
    }

    /// Parses a per-dart entry into its points without applying it.
    pub fn parse_dart(&self, input: &str) -> Result<u32, DartParseError> {
        parse_dart(input)
    }

    /// Read-only view of the scoreboard.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: [
                PlayerSnapshot::from_player(self.player1()),
                PlayerSnapshot::from_player(self.player2()),
            ],
            current: self.current,
            format: self.format,
            darts_thrown: self.darts_thrown,
            winner: self.winner,
        }
    }

    fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current.index()]
    }
}

// ─────────────────────────────────────────────────────────────
//  Throws
// ─────────────────────────────────────────────────────────────

impl MatchEngine {
    /// Applies one dart entered as text (`t20`, `d16`, `25`, ...).
    ///
    /// A turn ends after the third dart, on a bust, or when the player
    /// reaches exactly zero.
    #[instrument(skip(self), fields(player = %self.current_player().name(), darts = self.darts_thrown))]
    pub fn throw_dart(&mut self, input: &str) -> ThrowOutcome {
        let value = match parse_dart(input) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "Rejected dart entry");
                return ThrowOutcome::InvalidDart;
            }
        };

        let seat = self.current;
        match self.current_player().current_score().checked_sub(value) {
            Some(0) => {
                self.current_player_mut().set_current_score(0);
                self.darts_thrown += 1;
                let darts = self.darts_thrown;
                self.current_player_mut().end_turn(darts, false);
                self.award_checkout(seat)
            }
            Some(remaining) if remaining >= MIN_REMAINING => {
                self.current_player_mut().set_current_score(remaining);
                self.darts_thrown += 1;
                debug!(value, remaining, "Dart scored");

                if self.darts_thrown == DARTS_PER_TURN {
                    self.current_player_mut().end_turn(DARTS_PER_TURN, false);
                    self.switch_player();
                    ThrowOutcome::Switch
                } else {
                    ThrowOutcome::Continue
                }
            }
            _ => self.bust(),
        }
    }

    /// Applies a whole turn entered as its total.
    ///
    /// Totals below 0, above 180, or not reachable with three darts are
    /// refused without changing anything.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn throw_total(&mut self, total: i64) -> ThrowOutcome {
        if let Some(rejection) = Self::check_total(total) {
            warn!(%rejection, "Rejected turn total");
            return ThrowOutcome::InvalidScore(rejection);
        }
        // 0..=180 after the check above.
        let points = total as u32;

        let seat = self.current;
        match self.current_player().current_score().checked_sub(points) {
            Some(0) => {
                self.current_player_mut().set_current_score(0);
                self.current_player_mut().end_turn(DARTS_PER_TURN, false);
                self.award_checkout(seat)
            }
            Some(remaining) if remaining >= MIN_REMAINING => {
                self.current_player_mut().set_current_score(remaining);
                self.current_player_mut().end_turn(DARTS_PER_TURN, false);
                self.switch_player();
                ThrowOutcome::Switch
            }
            _ => self.bust(),
        }
    }

    fn check_total(total: i64) -> Option<ScoreRejection> {
        if total < 0 {
            Some(ScoreRejection::Negative)
        } else if total > MAX_TURN_SCORE {
            Some(ScoreRejection::AboveMaximum)
        } else if IMPOSSIBLE_THREE_DART_SCORES.contains(&total) {
            Some(ScoreRejection::Impossible)
        } else {
            None
        }
    }

    /// Reverts the turn, credits it as three scoreless darts and passes the oche.
    fn bust(&mut self) -> ThrowOutcome {
        let player = self.current_player_mut();
        let restored = player.turn_start_score();
        player.set_current_score(restored);
        player.end_turn(DARTS_PER_TURN, true);
        info!(player = %player.name(), restored, "Bust");

        self.switch_player();
        ThrowOutcome::Bust
    }

    fn switch_player(&mut self) {
        self.darts_thrown = 0;
        self.current = self.current.other();
        self.current_player_mut().start_turn();
    }

    fn reset_scores(&mut self) {
        let target = self.format.target_score();
        for player in &mut self.players {
            player.reset_for_new_leg(target);
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Leg, set and match transitions
// ─────────────────────────────────────────────────────────────

impl MatchEngine {
    /// Awards the leg `winner` just checked out, rolling it up into a set or
    /// the match when it completes one.
    #[instrument(skip(self))]
    fn award_checkout(&mut self, winner: Seat) -> ThrowOutcome {
        let name = self.player(winner).name().to_string();
        self.darts_thrown = 0;

        if self.player(winner).legs_won() + 1 == self.format.legs_per_set() {
            self.players[winner.index()].add_set();
            for player in &mut self.players {
                player.reset_legs();
            }

            if self.player(winner).sets_won() == self.format.sets_to_win() {
                self.reset_scores();
                self.winner = Some(winner);
                info!(winner = %name, "Match won");
                return ThrowOutcome::MatchWon(name);
            }

            self.set_starter = self.set_starter.other();
            self.leg_starter = self.set_starter;
            self.current = self.leg_starter;
            self.reset_scores();
            self.current_player_mut().start_turn();
            info!(winner = %name, sets = self.player(winner).sets_won(), "Set won");
            return ThrowOutcome::SetWon(name);
        }

        self.players[winner.index()].add_leg();
        self.reset_scores();
        self.leg_starter = self.leg_starter.other();
        self.current = self.leg_starter;
        self.current_player_mut().start_turn();
        info!(winner = %name, legs = self.player(winner).legs_won(), "Leg won");
        ThrowOutcome::LegWon(name)
    }
}
