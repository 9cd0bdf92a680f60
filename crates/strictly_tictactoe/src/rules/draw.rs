//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().apply_move(4, Player::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert_eq!(board.winner(), Outcome::Draw);
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X holds the top row.
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
        assert_eq!(board.winner(), Outcome::Won(Player::X));
    }
}
