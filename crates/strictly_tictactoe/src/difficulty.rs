//! Difficulty policies wrapping the search engine.

use crate::search::search;
use crate::{BOARD_SIZE, Board, Player};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How strongly the AI plays.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Optimal half of the time, random otherwise.
    Medium,
    /// Always optimal after the opening move.
    #[default]
    Hard,
}

/// Picks a square for `ai` on `board` under `difficulty`.
///
/// Returns `None` when the game is already over. The returned square is
/// always empty.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn request_ai_move<R: Rng>(
    board: &Board,
    ai: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    if board.winner().is_terminal() {
        debug!("No move: game is over");
        return None;
    }

    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        // Searching the empty board always yields the same opening.
        Difficulty::Medium | Difficulty::Hard if board.is_empty() => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                optimal_move(board, ai)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => optimal_move(board, ai),
    };

    debug!(index = ?choice, "AI chose square");
    choice
}

/// Resamples uniformly over all squares until an empty one comes up.
fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    if board.is_full() {
        return None;
    }
    loop {
        let index = rng.gen_range(0..BOARD_SIZE);
        if board.is_vacant(index) {
            return Some(index);
        }
    }
}

fn optimal_move(board: &Board, ai: Player) -> Option<usize> {
    search(board, ai).best_move
}

/// An AI opponent: its mark, its difficulty, and its own random source.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    mark: Player,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl AiPlayer {
    /// Creates an AI seeded from system entropy.
    #[instrument]
    pub fn new(mark: Player, difficulty: Difficulty) -> Self {
        Self {
            mark,
            difficulty,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an AI with a fixed seed, for reproducible games.
    #[instrument]
    pub fn with_seed(mark: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            mark,
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The mark this AI plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// The configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Chooses a square on `board`, or `None` if the game is over.
    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        request_ai_move(board, self.mark, self.difficulty, &mut self.rng)
    }
}
