//! Stateless scoreboard rendering.

use crate::session::{Feedback, InputMode, Scoreboard, Tone};
use darts_core::{MatchSnapshot, Seat};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Renders the scoreboard as plain text.
pub fn render_text(board: &Scoreboard) -> String {
    let snapshot = board.engine().snapshot();
    let mut lines = vec![snapshot.format.describe()];

    for seat in Seat::iter() {
        let player = snapshot.player(seat);
        let marker = if seat == snapshot.current { '>' } else { ' ' };
        let mut line = format!(
            "{} {:<16} {:>4}   Prev: {:<3}  3-Dart Avg: {:>6.2}   Legs: {}  Sets: {}",
            marker,
            player.name,
            player.score,
            player.last_turn_scored,
            player.three_dart_average,
            player.legs_won,
            player.sets_won,
        );
        if let Some(route) = &player.checkout {
            line.push_str(&format!("   Checkout: {}", route));
        }
        lines.push(line);
    }

    lines.push(format!(
        "Current Turn: {}   [{}]",
        snapshot.current_player().name,
        board.mode().label()
    ));
    if board.mode() == InputMode::PerDart {
        lines.push(format!("Darts this turn: {}", board.turn_darts_label()));
    }

    lines.join("\n")
}

/// Renders a feedback line, tagging anything that is not plain progress.
pub fn render_feedback(feedback: &Feedback) -> String {
    match feedback.tone() {
        Tone::Info | Tone::Success => feedback.message().clone(),
        Tone::Warning => format!("! {}", feedback.message()),
        Tone::Error => format!("x {}", feedback.message()),
    }
}

/// One JSON line emitted per event in machine-readable mode.
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    /// Feedback for the last action, if any.
    pub feedback: Option<&'a Feedback>,
    /// Input mode after the action.
    pub mode: InputMode,
    /// Darts entered this turn, as labels.
    pub turn_darts: Vec<String>,
    /// Scoreboard after the action.
    pub snapshot: MatchSnapshot,
}

/// Renders the scoreboard and optional feedback as a single JSON line.
pub fn render_json(board: &Scoreboard, feedback: Option<&Feedback>) -> serde_json::Result<String> {
    let frame = Frame {
        feedback,
        mode: board.mode(),
        turn_darts: board.turn_darts().iter().map(ToString::to_string).collect(),
        snapshot: board.engine().snapshot(),
    };
    serde_json::to_string(&frame)
}
