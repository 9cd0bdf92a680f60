//! Exhaustive adversarial search.
//!
//! A single negamax routine explores the whole remaining game tree. There
//! is no pruning and no depth limit: a 3x3 board has at most 9 plies, so
//! recursion depth is bounded and the tree is small enough to finish well
//! inside interactive latency.
//!
//! Scores are always reported from the point of view of the player passed
//! to [`search`]: `+1` forced win, `0` draw, `-1` forced loss. Among equally
//! good moves the lowest index wins.

use crate::{Board, Outcome, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a forced win.
pub const WIN: i8 = 1;
/// Score of a draw.
pub const DRAW: i8 = 0;
/// Score of a forced loss.
pub const LOSS: i8 = -1;

/// Value of a position and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct SearchResult {
    /// One of [`WIN`], [`DRAW`] or [`LOSS`].
    pub score: i8,
    /// Best square to play; `None` only for a terminal board.
    pub best_move: Option<usize>,
}

/// Maps a terminal outcome to a score for `player`.
pub fn value(outcome: Outcome, player: Player) -> i8 {
    match outcome {
        Outcome::Won(winner) if winner == player => WIN,
        Outcome::Won(_) => LOSS,
        Outcome::Draw | Outcome::Ongoing => DRAW,
    }
}

/// Finds the optimal move for `player`, who is assumed to be on move.
///
/// Identical boards always produce identical results.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board, player: Player) -> SearchResult {
    let mut nodes = 0u64;
    let result = negamax(board, player, player, &mut nodes);
    debug!(
        score = result.score,
        best_move = ?result.best_move,
        nodes,
        "Search complete"
    );
    result
}

/// Scores every empty square for `player` moving now, ascending by index.
///
/// Each score is the value of the position after `player` takes that
/// square and both sides play on optimally.
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board, player: Player) -> Vec<(usize, i8)> {
    if board.winner().is_terminal() {
        return Vec::new();
    }

    let mut nodes = 0u64;
    let scores: Vec<(usize, i8)> = board
        .empty_cells()
        .into_iter()
        .map(|pos| {
            let child = board.apply_move(pos, player);
            let score = negamax(&child, player.opponent(), player, &mut nodes).score;
            trace!(pos, score, "Scored move");
            (pos, score)
        })
        .collect();
    debug!(moves = scores.len(), nodes, "Move scoring complete");
    scores
}

/// One node of the search.
///
/// `acting` is the player on move at this node; `perspective` is the
/// player every returned score is relative to. Child scores are flipped
/// into the acting player's frame with a sign multiplier, maximized, and
/// flipped back, so the same routine plays both the maximizing and the
/// minimizing side.
fn negamax(board: &Board, acting: Player, perspective: Player, nodes: &mut u64) -> SearchResult {
    *nodes += 1;

    let outcome = board.winner();
    if outcome.is_terminal() {
        return SearchResult::new(value(outcome, perspective), None);
    }

    let multiplier: i8 = if acting == perspective { 1 } else { -1 };
    let mut best: Option<(i8, usize)> = None;

    for pos in board.empty_cells() {
        let child = board.apply_move(pos, acting);
        debug_assert_ne!(&child, board, "search applied a move to occupied square {pos}");

        let score = multiplier * negamax(&child, acting.opponent(), perspective, nodes).score;
        // Strictly greater: ties keep the earlier, lower index.
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, pos));
        }
    }

    match best {
        Some((score, pos)) => SearchResult::new(score * multiplier, Some(pos)),
        // Unreachable: a board with no empty squares is always terminal.
        None => SearchResult::new(value(outcome, perspective), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_relative_to_player() {
        assert_eq!(value(Outcome::Won(Player::X), Player::X), WIN);
        assert_eq!(value(Outcome::Won(Player::X), Player::O), LOSS);
        assert_eq!(value(Outcome::Draw, Player::O), DRAW);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        assert_eq!(search(&board, Player::X), SearchResult::new(WIN, None));
        assert_eq!(search(&board, Player::O), SearchResult::new(LOSS, None));
        assert!(score_moves(&board, Player::O).is_empty());
    }

    #[test]
    fn test_last_square_is_played() {
        // X O X / X O O / O X .
        let board: Board = "XOX XOO OX.".parse().unwrap();
        let result = search(&board, Player::X);
        assert_eq!(result.best_move, Some(8));
        assert_eq!(result.score, DRAW);
    }
}
