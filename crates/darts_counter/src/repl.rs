//! Line-oriented scoreboard loop.

use crate::render::{render_feedback, render_json, render_text};
use crate::session::{Feedback, Scoreboard};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Output format for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Human-readable scoreboard after every action.
    #[default]
    Text,
    /// One JSON frame per action.
    Json,
}

/// Commands recognised besides throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    ToggleMode,
    Quit,
}

fn directive(line: &str) -> Option<Directive> {
    match line.trim().to_lowercase().as_str() {
        "mode" => Some(Directive::ToggleMode),
        "quit" | "exit" => Some(Directive::Quit),
        _ => None,
    }
}

/// Reads throws from `input` and writes the scoreboard to `output` until
/// the match is won, the input ends, or `quit` is entered.
///
/// `mode` toggles between per-dart and total entry.
#[instrument(skip_all, fields(style = ?style))]
pub fn run<R: BufRead, W: Write>(
    board: &mut Scoreboard,
    input: R,
    mut output: W,
    style: OutputStyle,
) -> Result<()> {
    emit(board, None, &mut output, style)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;

        let feedback = match directive(&line) {
            Some(Directive::Quit) => {
                info!("Scoreboard closed by user");
                break;
            }
            Some(Directive::ToggleMode) => Some(board.toggle_mode()),
            None => board.submit(&line),
        };

        let Some(feedback) = feedback else {
            debug!("Blank line ignored");
            continue;
        };
        emit(board, Some(&feedback), &mut output, style)?;

        if board.engine().is_finished() {
            info!("Match finished");
            break;
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn emit<W: Write>(
    board: &Scoreboard,
    feedback: Option<&Feedback>,
    output: &mut W,
    style: OutputStyle,
) -> Result<()> {
    match style {
        OutputStyle::Text => {
            if let Some(feedback) = feedback
                && !feedback.message().is_empty()
            {
                writeln!(output, "{}", render_feedback(feedback))?;
            }
            writeln!(output, "{}", render_text(board))?;
            writeln!(output)?;
        }
        OutputStyle::Json => {
            let line = render_json(board, feedback).context("Failed to serialize scoreboard")?;
            writeln!(output, "{}", line)?;
        }
    }
    Ok(())
}
