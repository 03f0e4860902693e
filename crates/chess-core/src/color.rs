//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in chess.
///
/// Rank indices grow from Black's back rank (0) towards White's (7), so White
/// advances towards decreasing rank indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the rank-index step of a pawn advance (-1 for White, +1 for Black).
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the rank index pawns start on (6 for White, 1 for Black).
    #[inline]
    pub const fn starting_pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Returns the rank index of this color's back rank (7 for White, 0 for Black).
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Returns the rank index where this color's pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.opposite().home_rank()
    }

    /// Returns the rank index a pawn must stand on to capture en passant.
    #[inline]
    pub const fn en_passant_rank(self) -> u8 {
        match self {
            Color::White => 3,
            Color::Black => 4,
        }
    }

    /// Returns the identifier letter (`B` for White, `N` for Black).
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'B',
            Color::Black => 'N',
        }
    }

    /// Parses an identifier letter.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(Color::White),
            'N' => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
