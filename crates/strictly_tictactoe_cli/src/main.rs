//! Strictly Tic-Tac-Toe - terminal game and analysis tool.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_tictactoe::search::{LOSS, WIN};
use strictly_tictactoe::{Board, Difficulty, Player, Position, score_moves, search};
use strictly_tictactoe_cli::{Cli, Command, PlayConfig, play};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            human,
            seed,
            delay_ms,
        } => run_play(config, difficulty, human, seed, delay_ms),
        Command::Suggest { board, player } => run_suggest(board, player),
        Command::Analyze { board, player } => run_analyze(board, player),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config: Option<std::path::PathBuf>,
    difficulty: Option<Difficulty>,
    human: Option<Player>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let base = match config {
        Some(path) => PlayConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => PlayConfig::default(),
    };
    let config = base
        .with_difficulty(difficulty)
        .with_human(human)
        .with_seed(seed)
        .with_thinking_delay_ms(delay_ms);

    let outcome = play(&config, io::stdin().lock(), io::stdout().lock())?;
    info!(%outcome, "Exiting");
    Ok(())
}

/// Print the search result for a board
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, player: Option<Player>) -> Result<()> {
    let player = player.unwrap_or_else(|| board.to_move());
    println!("{}\n", board.display());

    let outcome = board.winner();
    if outcome.is_terminal() {
        println!("{outcome}");
        return Ok(());
    }

    let result = search(&board, player);
    let pos = result.best_move.context("Search returned no move")?;
    let position = Position::from_index(pos).context("Search returned an invalid square")?;
    println!(
        "{player} should play {} ({position}), value {:+}",
        pos + 1,
        result.score
    );
    Ok(())
}

/// Print every legal move with its value
#[instrument(skip(board), fields(board = %board))]
fn run_analyze(board: Board, player: Option<Player>) -> Result<()> {
    let player = player.unwrap_or_else(|| board.to_move());
    println!("{}\n", board.display());

    let outcome = board.winner();
    if outcome.is_terminal() {
        println!("{outcome}");
        return Ok(());
    }

    println!("Moves for {player}:");
    for (pos, score) in score_moves(&board, player) {
        let verdict = match score {
            WIN => "win",
            LOSS => "loss",
            _ => "draw",
        };
        let position = Position::from_index(pos).context("Invalid square")?;
        println!("  {} {:<14} {:+} {verdict}", pos + 1, position.label(), score);
    }
    Ok(())
}
