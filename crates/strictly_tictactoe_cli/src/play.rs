//! Interactive terminal game.

use crate::PlayConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{AiPlayer, Game, MoveError, Outcome, Position};
use tracing::{debug, info, instrument};

/// Plays one game, reading human moves from `input` and writing the board
/// and prompts to `output`.
///
/// Returns the final outcome, or `Ongoing` if `input` ends mid-game.
#[instrument(skip_all, fields(difficulty = %config.difficulty(), human = %config.human()))]
pub fn play<R: BufRead, W: Write>(config: &PlayConfig, input: R, mut output: W) -> Result<Outcome> {
    let human = *config.human();
    let ai_mark = human.opponent();
    let mut ai = match config.seed() {
        Some(seed) => AiPlayer::with_seed(ai_mark, *config.difficulty(), *seed),
        None => AiPlayer::new(ai_mark, *config.difficulty()),
    };
    let delay = Duration::from_millis(*config.thinking_delay_ms());

    let mut game = Game::new(human);
    let mut lines = input.lines();

    info!("Game started");
    writeln!(
        output,
        "You are {human}, the AI is {ai_mark} ({}). X moves first.",
        config.difficulty()
    )?;

    while !game.outcome().is_terminal() {
        if game.is_human_turn() {
            writeln!(output, "\n{}\n", game.board().display())?;
            write!(output, "Your move (1-9 or name): ")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                debug!("Input closed before game ended");
                return Ok(game.outcome());
            };
            let line = line.context("Failed to read move")?;

            let Some(position) = Position::parse(&line) else {
                writeln!(output, "Not a square: {:?}", line.trim())?;
                continue;
            };
            if let Err(e) = game.human_move(position.to_index()) {
                writeln!(output, "{}", describe_move_error(&e))?;
            }
        } else {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            let (pos, _) = game.ai_move(&mut ai).context("AI failed to move")?;
            let position = Position::from_index(pos).context("AI chose an invalid square")?;
            writeln!(output, "AI plays {position}.")?;
        }
    }

    writeln!(output, "\n{}\n", game.board().display())?;
    writeln!(output, "{}", game.outcome())?;
    info!(outcome = %game.outcome(), moves = game.history().len(), "Game finished");
    Ok(game.outcome())
}

/// Renders a rejected move with the 1-based numbering shown on the board.
fn describe_move_error(err: &MoveError) -> String {
    match *err {
        MoveError::SquareOccupied(index) => match Position::from_index(index) {
            Some(position) => format!("Square {} ({position}) is already occupied", index + 1),
            None => format!("Square {} is already occupied", index + 1),
        },
        MoveError::OutOfBounds(index) => {
            format!("Square {} is out of bounds (must be 1-9)", index + 1)
        }
        _ => err.to_string(),
    }
}
