//! Tic-tac-toe against an exhaustive negamax opponent.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] is a copyable 3x3 value; moves return new
//!   boards and [`Board::winner`] derives the [`Outcome`] on demand.
//! - **Rules**: win and draw detection shared by everything else.
//! - **Search**: [`search()`] walks the full remaining game tree.
//! - **Difficulty**: [`AiPlayer`] mixes random and searched moves by
//!   [`Difficulty`].
//! - **Session**: [`Game`] validates human moves and drives the AI.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Player, search};
//!
//! let board: Board = "XX.OO....".parse().unwrap();
//! let result = search(&board, Player::X);
//! assert_eq!(result.best_move, Some(2));
//! assert_eq!(result.score, 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod game;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use difficulty::{AiPlayer, Difficulty, request_ai_move};
pub use game::{Game, MoveError};
pub use position::Position;
pub use search::{SearchResult, score_moves, search};
pub use types::{BOARD_SIZE, Board, BoardParseError, Outcome, Player, PlayerParseError, Square};
