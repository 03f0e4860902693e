//! Game driver with move history.
//!
//! [`Game`] wraps a [`Position`], accepts moves as text, and remembers what
//! was played.

use chess_core::{Color, CoreError, Move, Square};
use thiserror::Error;

use crate::notation::{format_move, parse_move};
use crate::Position;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMove {
    /// The move in internal format.
    pub mov: Move,
    /// The move as text.
    pub text: String,
}

/// Error type for game operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No piece stands on the origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece belongs to the side not to move.
    #[error("{color} piece on {square} cannot move now")]
    WrongColor { square: Square, color: Color },
    /// The move is not among the piece's candidates.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// The move text does not follow the move-string grammar.
    #[error("invalid move string: {0}")]
    InvalidMoveString(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A game played from a starting position.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Starting position.
    start_pos: Position,
    /// Moves played so far.
    moves: Vec<GameMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            start_pos: position.clone(),
            position,
            moves: Vec::new(),
        }
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the starting position.
    pub fn start_position(&self) -> &Position {
        &self.start_pos
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns every candidate move of the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.position.candidate_moves()
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Plays a move given as text.
    pub fn play(&mut self, text: &str) -> Result<Move, GameError> {
        let mv = parse_move(&self.position, text)?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Plays a move given in internal format.
    pub fn play_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.position.apply(mv)?;
        self.moves.push(GameMove {
            mov: mv,
            text: format_move(mv),
        });
        Ok(())
    }

    /// Replays the game from the start without its last move.
    ///
    /// Returns the removed move, or `None` if nothing was played.
    pub fn undo(&mut self) -> Option<GameMove> {
        let last = self.moves.pop()?;
        let mut position = self.start_pos.clone();
        for played in &self.moves {
            position.make_move(played.mov);
        }
        self.position = position;
        Some(last)
    }
}
