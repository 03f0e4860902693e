//! Move representation.

use std::fmt;

use crate::{Color, CoreError, PieceKind, Square};

/// File index of the king's starting square.
const KING_FILE: u8 = 4;

/// A piece a pawn may promote to.
///
/// Pawn and King are not representable, so an illegal promotion target is
/// rejected when the value is built rather than when the move is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Promotion {
    /// All promotion targets, in candidate generation order.
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    /// Returns the piece kind created by this promotion.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Promotion::Knight => PieceKind::Knight,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Queen => PieceKind::Queen,
        }
    }
}

impl TryFrom<PieceKind> for Promotion {
    type Error = CoreError;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Knight => Ok(Promotion::Knight),
            PieceKind::Bishop => Ok(Promotion::Bishop),
            PieceKind::Rook => Ok(Promotion::Rook),
            PieceKind::Queen => Ok(Promotion::Queen),
            PieceKind::Pawn | PieceKind::King => Err(CoreError::IllegalPromotionTarget(kind)),
        }
    }
}

/// The side of the board a king castles towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Short castling (O-O), towards the h-file.
    Kingside,
    /// Long castling (O-O-O), towards the a-file.
    Queenside,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    /// File index the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// File index the castling rook starts on.
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// File index the castling rook lands on, next to the king on the inner side.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    /// Instance number of the rook that may castle on this side.
    ///
    /// The queenside rook is set up as rook 1 and the kingside rook as rook 2.
    #[inline]
    pub const fn rook_number(self) -> u8 {
        match self {
            CastleSide::Kingside => 2,
            CastleSide::Queenside => 1,
        }
    }

    /// Returns the king's starting square for the given color.
    pub fn king_square(color: Color) -> Square {
        home_square(color, KING_FILE)
    }

    /// Returns the king's landing square for the given color.
    pub fn king_target(self, color: Color) -> Square {
        home_square(color, self.king_target_file())
    }

    /// Returns the rook's starting square for the given color.
    pub fn rook_square(self, color: Color) -> Square {
        home_square(color, self.rook_file())
    }

    /// Returns the rook's landing square for the given color.
    pub fn rook_target(self, color: Color) -> Square {
        home_square(color, self.rook_target_file())
    }

    /// Returns the castling notation (`O-O` or `O-O-O`).
    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::Kingside => "O-O",
            CastleSide::Queenside => "O-O-O",
        }
    }
}

fn home_square(color: Color, file: u8) -> Square {
    match Square::new(color.home_rank(), file) {
        Some(sq) => sq,
        None => unreachable!("home rank and castling files are on the board"),
    }
}

/// A chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Relocation of a piece, capturing whatever enemy piece stands on `to`.
    Normal { from: Square, to: Square },
    /// Pawn reaching the far rank and becoming a new piece.
    Promotion {
        from: Square,
        to: Square,
        piece: Promotion,
    },
    /// Pawn capture of an adjacent pawn that just advanced two squares.
    EnPassant { from: Square, to: Square },
    /// King and rook moving together.
    Castle { color: Color, side: CastleSide },
}

impl Move {
    /// Creates a normal move.
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::Normal { from, to }
    }

    /// Creates a promotion, rejecting Pawn and King as targets.
    pub fn promotion(from: Square, to: Square, kind: PieceKind) -> Result<Self, CoreError> {
        let piece = Promotion::try_from(kind)?;
        Ok(Move::Promotion { from, to, piece })
    }

    /// Creates an en-passant capture.
    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::EnPassant { from, to }
    }

    /// Creates a castling move.
    #[inline]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        Move::Castle { color, side }
    }

    /// Returns the square the moving piece starts on (the king's for castling).
    pub fn from(self) -> Square {
        match self {
            Move::Normal { from, .. }
            | Move::Promotion { from, .. }
            | Move::EnPassant { from, .. } => from,
            Move::Castle { color, .. } => CastleSide::king_square(color),
        }
    }

    /// Returns the square the moving piece lands on (the king's for castling).
    pub fn to(self) -> Square {
        match self {
            Move::Normal { to, .. } | Move::Promotion { to, .. } | Move::EnPassant { to, .. } => {
                to
            }
            Move::Castle { color, side } => side.king_target(color),
        }
    }

    /// Returns true for castling moves.
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    /// Returns the promotion target, if this is a promotion.
    #[inline]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            Move::Promotion { piece, .. } => Some(piece.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Normal { from, to } => write!(f, "{}-{}", from, to),
            Move::Promotion { from, to, piece } => {
                write!(f, "{}-{}={}", from, to, piece.kind().to_char())
            }
            Move::EnPassant { from, to } => write!(f, "{}-{} e.p.", from, to),
            Move::Castle { side, .. } => write!(f, "{}", side.notation()),
        }
    }
}
