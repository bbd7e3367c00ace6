//! Tests for the match engine's turn, leg, set and match transitions.

use darts_core::{MatchEngine, MatchFormat, ScoreRejection, Seat, ThrowOutcome};

fn engine(target: u32, legs_per_set: u32, sets_to_win: u32) -> MatchEngine {
    let format = MatchFormat::new(target, legs_per_set, sets_to_win).expect("valid format");
    MatchEngine::new("Anna", "Bert", format)
}

#[test]
fn test_new_match_state() {
    let engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());

    assert_eq!(engine.current_seat(), Seat::One);
    assert_eq!(engine.leg_starter(), Seat::One);
    assert_eq!(engine.set_starter(), Seat::One);
    assert_eq!(engine.player1().name(), "Anna");
    assert_eq!(engine.player2().name(), "Bert");
    assert_eq!(engine.player1().current_score(), 501);
    assert_eq!(engine.player1().turn_start_score(), 501);
    assert_eq!(engine.player2().current_score(), 501);
    assert_eq!(engine.darts_thrown(), 0);
    assert!(!engine.is_finished());
}

#[test]
fn test_three_treble_twenties() {
    let mut engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());

    assert_eq!(engine.throw_dart("t20"), ThrowOutcome::Continue);
    assert_eq!(engine.player1().current_score(), 441);
    assert_eq!(engine.throw_dart("T20"), ThrowOutcome::Continue);
    assert_eq!(engine.player1().current_score(), 381);
    assert_eq!(engine.darts_thrown(), 2);
    assert_eq!(engine.throw_dart(" t20 "), ThrowOutcome::Switch);

    assert_eq!(engine.player1().current_score(), 321);
    assert_eq!(engine.player1().last_turn_scored(), 180);
    assert_eq!(engine.player1().three_dart_average(), 180.0);
    assert_eq!(engine.current_seat(), Seat::Two);
    assert_eq!(engine.darts_thrown(), 0);
    assert_eq!(engine.player2().turn_start_score(), 501);
}

#[test]
fn test_average_accumulates_across_turns() {
    let mut engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());

    for _ in 0..3 {
        engine.throw_dart("t20");
    }
    assert_eq!(engine.throw_total(60), ThrowOutcome::Switch);
    for dart in ["s20", "s20", "s20"] {
        engine.throw_dart(dart);
    }

    // 180 + 60 over two turns.
    assert_eq!(engine.player1().current_score(), 261);
    assert_eq!(engine.player1().total_darts_thrown(), 6);
    assert_eq!(engine.player1().three_dart_average(), 120.0);
    assert_eq!(engine.player2().three_dart_average(), 60.0);
}

#[test]
fn test_invalid_dart_leaves_state_unchanged() {
    let mut engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());
    engine.throw_dart("t20");
    let before = engine.snapshot();

    for entry in ["", "x20", "t21", "s0", "t", "20", "bull"] {
        assert_eq!(engine.throw_dart(entry), ThrowOutcome::InvalidDart, "{entry:?}");
    }

    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.darts_thrown(), 1);
}

#[test]
fn test_double_out_wins_leg() {
    let mut engine = engine(40, 3, 3);

    let outcome = engine.throw_dart("d20");

    assert_eq!(outcome, ThrowOutcome::LegWon("Anna".to_string()));
    assert_eq!(outcome.to_string(), "Anna wins the LEG!");
    assert_eq!(engine.player1().legs_won(), 1);
    assert_eq!(engine.player1().current_score(), 40);
    assert_eq!(engine.player2().current_score(), 40);
    assert_eq!(engine.leg_starter(), Seat::Two);
    assert_eq!(engine.current_seat(), Seat::Two);
    assert_eq!(engine.darts_thrown(), 0);
}

#[test]
fn test_overshoot_busts_and_restores_score() {
    let mut engine = engine(20, 3, 3);

    let outcome = engine.throw_dart("t20");

    assert_eq!(outcome, ThrowOutcome::Bust);
    assert_eq!(outcome.to_string(), "Bust!");
    assert_eq!(engine.player1().current_score(), 20);
    assert_eq!(engine.player1().last_turn_scored(), 0);
    assert_eq!(engine.player1().total_darts_thrown(), 3);
    assert_eq!(engine.player1().three_dart_average(), 0.0);
    assert_eq!(engine.current_seat(), Seat::Two);
}

#[test]
fn test_leaving_one_is_a_bust() {
    let mut engine = engine(21, 3, 3);

    assert_eq!(engine.throw_dart("s20"), ThrowOutcome::Bust);
    assert_eq!(engine.player1().current_score(), 21);
}

#[test]
fn test_bust_reverts_earlier_darts_in_turn() {
    let mut engine = engine(100, 3, 3);

    assert_eq!(engine.throw_dart("t20"), ThrowOutcome::Continue);
    assert_eq!(engine.player1().current_score(), 40);
    assert_eq!(engine.throw_dart("t20"), ThrowOutcome::Bust);

    assert_eq!(engine.player1().current_score(), 100);
    assert_eq!(engine.darts_thrown(), 0);
    assert_eq!(engine.current_seat(), Seat::Two);
}

#[test]
fn test_two_dart_finish_counts_three_darts() {
    let mut engine = engine(100, 3, 3);

    assert_eq!(engine.throw_dart("t20"), ThrowOutcome::Continue);
    assert_eq!(
        engine.throw_dart("d20"),
        ThrowOutcome::LegWon("Anna".to_string())
    );

    assert_eq!(engine.player1().total_darts_thrown(), 3);
    assert_eq!(engine.player1().total_points_scored(), 100);
    assert_eq!(engine.player1().three_dart_average(), 100.0);
}

#[test]
fn test_total_mode_rejections() {
    let mut engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());
    let before = engine.snapshot();

    let outcome = engine.throw_total(181);
    assert_eq!(outcome, ThrowOutcome::InvalidScore(ScoreRejection::AboveMaximum));
    assert_eq!(outcome.to_string(), "Invalid score: cannot exceed 180!");

    let outcome = engine.throw_total(-1);
    assert_eq!(outcome.to_string(), "Invalid score: cannot be negative!");

    let outcome = engine.throw_total(162);
    assert_eq!(outcome.to_string(), "Invalid score: not possible in 3 darts!");

    for total in [179, 178, 176, 175, 173, 172, 169, 168, 166, 165, 163] {
        assert_eq!(
            engine.throw_total(total),
            ThrowOutcome::InvalidScore(ScoreRejection::Impossible)
        );
    }

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_total_mode_switch_and_checkout() {
    let mut engine = engine(100, 3, 3);

    assert_eq!(engine.throw_total(60), ThrowOutcome::Switch);
    assert_eq!(engine.player1().current_score(), 40);
    assert_eq!(engine.player1().last_turn_scored(), 60);
    assert_eq!(engine.current_seat(), Seat::Two);

    assert_eq!(engine.throw_total(0), ThrowOutcome::Switch);
    assert_eq!(engine.player2().current_score(), 100);
    assert_eq!(engine.current_seat(), Seat::One);

    assert_eq!(engine.throw_total(40), ThrowOutcome::LegWon("Anna".to_string()));
    assert_eq!(engine.player1().total_points_scored(), 100);
    assert_eq!(engine.player1().total_darts_thrown(), 6);
}

#[test]
fn test_total_mode_bust() {
    let mut engine = engine(100, 3, 3);

    assert_eq!(engine.throw_total(99), ThrowOutcome::Bust);
    assert_eq!(engine.player1().current_score(), 100);
    assert_eq!(engine.current_seat(), Seat::Two);
}

#[test]
fn test_set_win_resets_legs_and_alternates_opener() {
    let mut engine = engine(40, 2, 3);

    assert_eq!(engine.throw_dart("d20"), ThrowOutcome::LegWon("Anna".to_string()));
    assert_eq!(engine.current_seat(), Seat::Two);
    assert_eq!(engine.throw_dart("d20"), ThrowOutcome::LegWon("Bert".to_string()));
    assert_eq!(engine.current_seat(), Seat::One);

    let outcome = engine.throw_dart("d20");
    assert_eq!(outcome, ThrowOutcome::SetWon("Anna".to_string()));
    assert_eq!(outcome.to_string(), "Anna wins the SET!");

    assert_eq!(engine.player1().sets_won(), 1);
    assert_eq!(engine.player1().legs_won(), 0);
    assert_eq!(engine.player2().legs_won(), 0);
    assert_eq!(engine.set_starter(), Seat::Two);
    assert_eq!(engine.leg_starter(), Seat::Two);
    assert_eq!(engine.current_seat(), Seat::Two);
    assert!(!engine.is_finished());
}

#[test]
fn test_match_win() {
    let mut engine = engine(40, 1, 2);

    assert_eq!(engine.throw_dart("d20"), ThrowOutcome::SetWon("Anna".to_string()));
    assert_eq!(engine.current_seat(), Seat::Two);
    assert_eq!(engine.throw_dart("d20"), ThrowOutcome::SetWon("Bert".to_string()));
    assert_eq!(engine.current_seat(), Seat::One);

    let outcome = engine.throw_dart("d20");
    assert_eq!(outcome, ThrowOutcome::MatchWon("Anna".to_string()));
    assert_eq!(outcome.to_string(), "Anna wins the MATCH!");
    assert_eq!(outcome.winner_name(), Some("Anna"));

    assert_eq!(engine.winner(), Some(Seat::One));
    assert!(engine.is_finished());
    assert_eq!(engine.player1().sets_won(), 2);
    assert_eq!(engine.player1().current_score(), 40);
    assert_eq!(engine.player2().current_score(), 40);
}

#[test]
fn test_single_leg_match() {
    let mut engine = engine(50, 1, 1);

    assert_eq!(engine.throw_dart("50"), ThrowOutcome::MatchWon("Anna".to_string()));
    assert_eq!(engine.winner(), Some(Seat::One));
}

#[test]
fn test_checkout_suggestion_follows_score() {
    let mut engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());

    assert_eq!(engine.checkout_suggestion(i64::from(engine.player1().current_score())), "");
    engine.throw_total(180);
    engine.throw_total(0);
    engine.throw_total(180);

    assert_eq!(engine.player1().current_score(), 141);
    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.player(Seat::One).checkout.as_deref(),
        Some("T20 T19 D12")
    );
    assert_eq!(snapshot.player(Seat::Two).checkout, None);
    assert_eq!(snapshot.current, Seat::Two);
}

#[test]
fn test_parse_dart_through_engine() {
    let engine = MatchEngine::new("Anna", "Bert", MatchFormat::default());

    assert_eq!(engine.parse_dart("t19"), Ok(57));
    assert!(engine.parse_dart("q1").is_err());
}

#[test]
fn test_outcome_serializes_with_tag() {
    let json = serde_json::to_value(ThrowOutcome::LegWon("Anna".to_string())).unwrap();
    assert_eq!(json["kind"], "LegWon");
    assert_eq!(json["detail"], "Anna");
}
