//! Core domain types for tic-tac-toe.

use crate::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Error returned when a player mark cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown player {:?} (expected X or O)", input)]
pub struct PlayerParseError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Player {
    type Err = PlayerParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Player::X),
            "o" | "O" => Ok(Player::O),
            other => Err(PlayerParseError {
                input: other.to_string(),
            }),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Result of evaluating a board.
///
/// Never stored: always recomputed from the squares by [`Board::winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Outcome {
    /// Moves remain and nobody has completed a line.
    #[display("Game in progress")]
    Ongoing,
    /// A player completed a line.
    #[display("Player {} wins!", _0)]
    Won(Player),
    /// Board is full with no completed line.
    #[display("It's a draw!")]
    Draw,
}

impl Outcome {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values. Applying a move yields a new board and leaves
/// the original untouched, so search branches never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Checks if the square at `pos` exists and is empty.
    pub fn is_vacant(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Indices of every empty square, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// True when no square has been marked yet.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(|square| *square == Square::Empty)
    }

    /// True when every square is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns a copy of the board with `player` marked at `pos`.
    ///
    /// An occupied or out-of-range `pos` returns the board unchanged.
    pub fn apply_move(&self, pos: usize, player: Player) -> Board {
        let mut next = *self;
        if next.is_vacant(pos) {
            next.squares[pos] = Square::Occupied(player);
        }
        next
    }

    /// Evaluates the board.
    ///
    /// A completed line wins regardless of remaining empty squares; a full
    /// board without one is a draw.
    pub fn winner(&self) -> Outcome {
        if let Some(player) = rules::check_winner(self) {
            Outcome::Won(player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Player whose turn it is, assuming X moved first.
    pub fn to_move(&self) -> Player {
        let count = |p: Player| {
            self.squares
                .iter()
                .filter(|square| **square == Square::Occupied(p))
                .count()
        };
        if count(Player::X) > count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: nine of `X`, `O` or `.`, row-major.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            match square {
                Square::Empty => write!(f, ".")?,
                Square::Occupied(player) => write!(f, "{}", player)?,
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text held a number of squares other than nine.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid square character {:?}", _0)]
    InvalidSquare(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X`/`O` marks and `.`, `-` or `_` for empty squares.
    ///
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` is accepted.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(BOARD_SIZE);
        for ch in s.chars() {
            let square = match ch {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' => Square::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => return Err(BoardParseError::InvalidSquare(c)),
            };
            squares.push(square);
        }

        let len = squares.len();
        let squares: [Square; BOARD_SIZE] = squares
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Board::from_squares(squares))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.winner(), Outcome::Ongoing);
    }

    #[test]
    fn test_apply_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.apply_move(4, Player::X);
        assert!(board.is_empty());
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
        assert!(!next.is_empty());
    }

    #[test]
    fn test_apply_move_on_occupied_is_noop() {
        let board = Board::new().apply_move(0, Player::X);
        let again = board.apply_move(0, Player::O);
        assert_eq!(again, board);
    }

    #[test]
    fn test_apply_move_out_of_range_is_noop() {
        let board = Board::new();
        assert_eq!(board.apply_move(9, Player::X), board);
    }

    #[test]
    fn test_to_move_alternates() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        let board = board.apply_move(4, Player::X);
        assert_eq!(board.to_move(), Player::O);
        let board = board.apply_move(0, Player::O);
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_parse_and_display_compact() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO..X...O");
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XO.......Z".parse::<Board>(),
            Err(BoardParseError::InvalidSquare('Z'))
        );
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().apply_move(0, Player::X);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Won(Player::X).to_string(), "Player X wins!");
        assert_eq!(Outcome::Won(Player::O).to_string(), "Player O wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!(" O ".parse::<Player>(), Ok(Player::O));
        assert!("z".parse::<Player>().is_err());
    }
}
