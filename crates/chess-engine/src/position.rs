//! Chess position representation.
//!
//! A [`Position`] owns a [`Board`] and the [`PieceRegistry`] describing the
//! same pieces. Both only change together through [`Position::apply`], so a
//! position handed out by this crate is always consistent. Cloning a position
//! copies both, which is how search branches are created.

use std::fmt;

use chess_core::{Color, LayoutError, Move, PieceId, PieceKind, Square};
use tracing::debug;

use crate::config::{DoubleStepExpiry, RulesConfig};
use crate::{executor, movegen, Board, GameError, PieceRegistry};

/// A board, its piece registry, and the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    registry: PieceRegistry,
    /// Side to move.
    pub side_to_move: Color,
    config: RulesConfig,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// Creates the standard starting position with White to move.
    pub fn startpos() -> Self {
        Position {
            board: Board::standard(),
            registry: PieceRegistry::standard(),
            side_to_move: Color::White,
            config: RulesConfig::default(),
        }
    }

    /// Creates a position from a board, registering every piece on it as
    /// unmoved.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        let registry = PieceRegistry::from_board(&board);
        Position {
            board,
            registry,
            side_to_move,
            config: RulesConfig::default(),
        }
    }

    /// Creates a position from layout text.
    pub fn from_layout(text: &str, side_to_move: Color) -> Result<Self, LayoutError> {
        Ok(Self::from_board(Board::from_layout(text)?, side_to_move))
    }

    /// Replaces the rules configuration.
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Returns the pseudo-legal moves of a piece, or nothing if it is not on
    /// the board.
    pub fn moves_for(&self, id: PieceId) -> Vec<Move> {
        match self.board.find(id) {
            Some(at) => movegen::candidates(id, at, &self.board, &self.registry),
            None => Vec::new(),
        }
    }

    /// Returns the pseudo-legal moves of whatever stands on a square.
    pub fn moves_at(&self, sq: Square) -> Vec<Move> {
        match self.board.get(sq) {
            Some(id) => movegen::candidates(id, sq, &self.board, &self.registry),
            None => Vec::new(),
        }
    }

    /// Returns the pseudo-legal moves of every piece of the side to move.
    pub fn candidate_moves(&self) -> Vec<Move> {
        self.board
            .occupants()
            .filter(|(_, id)| id.color() == self.side_to_move)
            .flat_map(|(at, id)| movegen::candidates(id, at, &self.board, &self.registry))
            .collect()
    }

    /// Validates and plays a move.
    ///
    /// # Errors
    ///
    /// - [`GameError::EmptySquare`] if nothing stands on the origin square.
    /// - [`GameError::WrongColor`] if the piece belongs to the side not to
    ///   move and turn order is enforced.
    /// - [`GameError::IllegalMove`] if the move is not one of the piece's
    ///   candidates.
    ///
    /// The position is unchanged when an error is returned.
    pub fn apply(&mut self, mv: Move) -> Result<(), GameError> {
        let from = mv.from();
        let mover = self.board.get(from).ok_or(GameError::EmptySquare(from))?;

        if self.config.enforce_turn_order && mover.color() != self.side_to_move {
            return Err(GameError::WrongColor {
                square: from,
                color: mover.color(),
            });
        }

        if !movegen::candidates(mover, from, &self.board, &self.registry).contains(&mv) {
            return Err(GameError::IllegalMove(mv.to_string()));
        }

        self.make_move(mv);
        Ok(())
    }

    /// Plays a move without validating it.
    ///
    /// The move must be a candidate of the piece on its origin square.
    pub(crate) fn make_move(&mut self, mv: Move) {
        let mover_color = self
            .board
            .color_at(mv.from())
            .unwrap_or(self.side_to_move);

        if self.config.double_step_expiry == DoubleStepExpiry::NextTurn {
            self.registry.clear_double_steps(mover_color);
        }

        debug!(%mv, "applying move");
        self.board = executor::apply(&mut self.registry, mv, &self.board);
        self.side_to_move = mover_color.opposite();
    }

    /// Finds the square of a piece.
    #[inline]
    pub fn locate(&self, id: PieceId) -> Option<Square> {
        self.board.find(id)
    }

    /// Returns the pieces of one color and kind with their squares.
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Vec<(PieceId, Square)> {
        self.board.pieces_of(color, kind)
    }

    /// Returns the number of pieces of one color and kind.
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.board.pieces_of(color, kind).len()
    }

    /// Returns the number of pieces of one color.
    pub fn count_color(&self, color: Color) -> usize {
        self.board.count_color(color)
    }

    /// Returns true if the piece is still in play.
    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        self.registry.contains(id)
    }

    /// Returns true if the registry holds exactly the pieces on the board.
    pub fn is_consistent(&self) -> bool {
        self.registry.verify(&self.board).is_empty()
    }

    /// Returns the 64-cell board snapshot.
    pub fn snapshot(&self) -> Vec<String> {
        self.board.snapshot()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{CastleSide, Layout};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn id(s: &str) -> PieceId {
        PieceId::parse(s).unwrap()
    }

    #[test]
    fn startpos_is_consistent() {
        let position = Position::startpos();
        assert!(position.is_consistent());
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.candidate_moves().len(), 20);
        assert_eq!(position.count_color(Color::Black), 16);
        assert_eq!(position.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(position.locate(id("NR1")), Some(sq("e8")));
    }

    #[test]
    fn from_layout_is_consistent_or_rejected() {
        let position = Position::from_layout(Layout::STANDARD, Color::White).unwrap();
        assert!(position.is_consistent());

        let text = Layout::STANDARD.replacen("NT2", "NT1", 1);
        assert_eq!(
            Position::from_layout(&text, Color::White).map(|_| ()),
            Err(LayoutError::DuplicatePiece(id("NT1")))
        );
    }

    #[test]
    fn apply_hands_over_the_turn() {
        let mut position = Position::startpos();
        position.apply(Move::normal(sq("e2"), sq("e4"))).unwrap();
        assert_eq!(position.side_to_move, Color::Black);
        assert_eq!(position.candidate_moves().len(), 20);
        assert!(position.is_consistent());
    }

    #[test]
    fn apply_rejects_empty_square() {
        let mut position = Position::startpos();
        assert_eq!(
            position.apply(Move::normal(sq("e4"), sq("e5"))),
            Err(GameError::EmptySquare(sq("e4")))
        );
    }

    #[test]
    fn apply_rejects_wrong_color() {
        let mut position = Position::startpos();
        assert_eq!(
            position.apply(Move::normal(sq("e7"), sq("e5"))),
            Err(GameError::WrongColor {
                square: sq("e7"),
                color: Color::Black
            })
        );
    }

    #[test]
    fn turn_order_can_be_disabled() {
        let config = RulesConfig {
            enforce_turn_order: false,
            ..RulesConfig::default()
        };
        let mut position = Position::startpos().with_config(config);
        position.apply(Move::normal(sq("e7"), sq("e5"))).unwrap();
        assert_eq!(position.side_to_move, Color::White);
    }

    #[test]
    fn apply_rejects_non_candidates_without_change() {
        let mut position = Position::startpos();
        let before = position.clone();
        assert!(matches!(
            position.apply(Move::normal(sq("e2"), sq("e5"))),
            Err(GameError::IllegalMove(_))
        ));
        assert!(matches!(
            position.apply(Move::castle(Color::White, CastleSide::Kingside)),
            Err(GameError::IllegalMove(_))
        ));
        assert_eq!(position, before);
    }

    #[test]
    fn moves_for_absent_piece_does_not_register() {
        let position = Position::startpos();
        assert!(position.moves_for(id("BQ2")).is_empty());
        assert!(!position.contains(id("BQ2")));
        assert!(position.is_consistent());
    }

    #[test]
    fn moves_at_matches_moves_for() {
        let position = Position::startpos();
        assert_eq!(position.moves_at(sq("b1")), position.moves_for(id("BC1")));
        assert!(position.moves_at(sq("e4")).is_empty());
    }

    fn en_passant_setup(config: RulesConfig) -> Position {
        let mut position = Position::startpos().with_config(config);
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            position.apply(Move::normal(sq(from), sq(to))).unwrap();
        }
        position
    }

    #[test]
    fn en_passant_expires_after_one_turn() {
        let mut position = en_passant_setup(RulesConfig::default());
        let ep = Move::en_passant(sq("e5"), sq("d6"));
        assert!(position.moves_for(id("BP5")).contains(&ep));

        position.apply(Move::normal(sq("g1"), sq("f3"))).unwrap();
        position.apply(Move::normal(sq("a6"), sq("a5"))).unwrap();
        assert!(!position.moves_for(id("BP5")).contains(&ep));
    }

    #[test]
    fn en_passant_persists_when_configured() {
        let config = RulesConfig {
            double_step_expiry: DoubleStepExpiry::Persist,
            ..RulesConfig::default()
        };
        let mut position = en_passant_setup(config);
        position.apply(Move::normal(sq("g1"), sq("f3"))).unwrap();
        position.apply(Move::normal(sq("a6"), sq("a5"))).unwrap();
        assert!(position
            .moves_for(id("BP5"))
            .contains(&Move::en_passant(sq("e5"), sq("d6"))));
    }

    #[test]
    fn display_names_side_to_move() {
        let text = Position::startpos().to_string();
        assert!(text.ends_with("White to move\n"));
    }
}
