//! Board square representation.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// File letters in file-index order.
const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the chess board as a (rank-index, file-index) pair.
///
/// Rank index 0 is Black's back rank (algebraic rank 8) and rank index 7 is
/// White's (algebraic rank 1). File index 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Creates a square from rank and file indices (0-7).
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Returns true if the signed rank/file pair lies on the board.
    #[inline]
    pub const fn in_bounds(rank: i8, file: i8) -> bool {
        rank >= 0 && rank < 8 && file >= 0 && file < 8
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidNotation(s.to_string());
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let file = FILES
            .iter()
            .position(|&f| f == letter.to_ascii_lowercase())
            .ok_or_else(invalid)?;
        let rank = match digit.to_digit(10) {
            Some(d @ 1..=8) => 8 - d,
            _ => return Err(invalid()),
        };
        Ok(Square {
            rank: rank as u8,
            file: file as u8,
        })
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", FILES[self.file as usize], 8 - self.rank)
    }

    /// Returns the rank index (0-7).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Returns the file index (0-7).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the square displaced by the given rank and file deltas, if on the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Self> {
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if Self::in_bounds(rank, file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, rank index 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl FromStr for Square {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
