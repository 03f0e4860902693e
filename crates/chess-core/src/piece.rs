//! Chess piece kinds.

use serde::{Deserialize, Serialize};

/// The six kinds of chess pieces.
///
/// Identifier letters follow the board snapshot format: `P` pawn, `C` knight,
/// `A` bishop, `T` rook, `Q` queen, `R` king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the identifier letter for this kind.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'C',
            PieceKind::Bishop => 'A',
            PieceKind::Rook => 'T',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'R',
        }
    }

    /// Parses an identifier letter.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(PieceKind::Pawn),
            'C' => Some(PieceKind::Knight),
            'A' => Some(PieceKind::Bishop),
            'T' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}
