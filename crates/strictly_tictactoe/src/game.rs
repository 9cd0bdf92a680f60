//! Human-versus-AI game session.
//!
//! The session is the boundary the presentation layer talks to: it accepts
//! human moves, asks the AI for its reply, and reports the outcome after
//! every applied move.

use crate::{AiPlayer, BOARD_SIZE, Board, Outcome, Player};
use tracing::{info, instrument, warn};

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is not a board square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The AI produced no square for an unfinished game.
    #[display("No move available")]
    NoMoveAvailable,
}

/// A single game between a human and the AI.
///
/// X always moves first, whichever side the human picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    human: Player,
    to_move: Player,
    outcome: Outcome,
    history: Vec<usize>,
}

impl Game {
    /// Starts a game with the human playing `human`.
    #[instrument]
    pub fn new(human: Player) -> Self {
        Self {
            board: Board::new(),
            human,
            to_move: Player::X,
            outcome: Outcome::Ongoing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The AI's mark.
    pub fn ai(&self) -> Player {
        self.human.opponent()
    }

    /// Returns the current player.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// True when the human should move next.
    pub fn is_human_turn(&self) -> bool {
        !self.outcome.is_terminal() && self.to_move == self.human
    }

    /// Squares played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Outcome as of the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Plays the human's mark at `pos` (0-8).
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn human_move(&mut self, pos: usize) -> Result<Outcome, MoveError> {
        let human = self.human;
        self.place(pos, human)
    }

    /// Asks `ai` for a square and plays it.
    ///
    /// Returns the square played and the resulting outcome.
    #[instrument(skip(self, ai), fields(ai = %ai.mark(), difficulty = %ai.difficulty()))]
    pub fn ai_move(&mut self, ai: &mut AiPlayer) -> Result<(usize, Outcome), MoveError> {
        if ai.mark() != self.ai() {
            return Err(MoveError::WrongPlayer(ai.mark()));
        }
        self.check_turn(ai.mark())?;
        let pos = ai.choose_move(&self.board).ok_or(MoveError::NoMoveAvailable)?;
        let outcome = self.place(pos, ai.mark())?;
        Ok((pos, outcome))
    }

    fn check_turn(&self, player: Player) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if player != self.to_move {
            return Err(MoveError::WrongPlayer(player));
        }
        Ok(())
    }

    fn place(&mut self, pos: usize, player: Player) -> Result<Outcome, MoveError> {
        self.check_turn(player)?;

        if pos >= BOARD_SIZE {
            warn!(pos, "Rejected out-of-bounds move");
            return Err(MoveError::OutOfBounds(pos));
        }
        if !self.board.is_vacant(pos) {
            warn!(pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board = self.board.apply_move(pos, player);
        self.history.push(pos);
        self.to_move = player.opponent();
        self.outcome = self.board.winner();

        info!(%player, pos, outcome = %self.outcome, "Move applied");
        Ok(self.outcome)
    }
}
