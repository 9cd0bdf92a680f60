//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::{Board, Difficulty, Player};

/// Strictly Tic-Tac-Toe - play against an exhaustive search opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe against a negamax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark for the human player (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Fixed RNG seed for the AI
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before each AI move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the best move for a board, e.g. `XX.OO....`
    Suggest {
        /// Board in row-major order: X, O, and `.` for empty
        board: Board,

        /// Player to search for (defaults to the side to move)
        #[arg(short, long)]
        player: Option<Player>,
    },

    /// Print the value of every legal move on a board
    Analyze {
        /// Board in row-major order: X, O, and `.` for empty
        board: Board,

        /// Player to score for (defaults to the side to move)
        #[arg(short, long)]
        player: Option<Player>,
    },
}
