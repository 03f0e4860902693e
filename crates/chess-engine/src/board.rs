//! 8×8 grid of piece occupants.

use std::collections::HashSet;
use std::fmt;

use chess_core::{Color, Layout, LayoutError, PieceId, PieceKind, Square, EMPTY_CELL};
use serde::{Serialize, Serializer};

/// The board grid: every cell is empty or holds one piece id.
///
/// Boards are replaced wholesale by the executor; mutation is only possible
/// from inside this crate so the registry can never be bypassed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    layout: Layout,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            layout: Layout::empty(),
        }
    }

    /// Creates the standard starting board.
    pub fn standard() -> Self {
        Board {
            layout: Layout::standard(),
        }
    }

    /// Parses a board from layout text.
    pub fn from_layout(text: &str) -> Result<Self, LayoutError> {
        Ok(Board {
            layout: Layout::parse(text)?,
        })
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.layout.get(sq)
    }

    /// Returns true if the square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Returns the color of the piece on a square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(PieceId::color)
    }

    /// Returns true if the square holds a piece of the opposite color.
    #[inline]
    pub fn is_enemy(&self, sq: Square, us: Color) -> bool {
        self.color_at(sq) == Some(us.opposite())
    }

    /// Returns true if the square is empty or holds an enemy piece.
    #[inline]
    pub fn is_open_for(&self, sq: Square, us: Color) -> bool {
        self.color_at(sq) != Some(us)
    }

    /// Finds the square holding the given piece.
    pub fn find(&self, id: PieceId) -> Option<Square> {
        self.occupants()
            .find_map(|(sq, occupant)| (occupant == id).then_some(sq))
    }

    /// Iterates over occupied squares and their pieces, rank 8 first.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|id| (sq, id)))
    }

    /// Returns the set of piece ids physically present.
    pub fn piece_ids(&self) -> HashSet<PieceId> {
        self.occupants().map(|(_, id)| id).collect()
    }

    /// Returns the pieces of one color and kind with their squares.
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> Vec<(PieceId, Square)> {
        self.occupants()
            .filter(|(_, id)| id.color() == color && id.kind() == kind)
            .map(|(sq, id)| (id, sq))
            .collect()
    }

    /// Counts the pieces of one color.
    pub fn count_color(&self, color: Color) -> usize {
        self.occupants()
            .filter(|(_, id)| id.color() == color)
            .count()
    }

    /// Returns the board as 64 cells, rank 8 first, `"..."` for empty squares.
    pub fn snapshot(&self) -> Vec<String> {
        Square::all()
            .map(|sq| match self.get(sq) {
                Some(id) => id.to_string(),
                None => EMPTY_CELL.to_string(),
            })
            .collect()
    }

    /// Returns the board in layout text form.
    pub fn to_layout(&self) -> String {
        self.layout.to_text()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, id: PieceId) {
        self.layout.set(sq, Some(id));
    }

    #[inline]
    pub(crate) fn clear(&mut self, sq: Square) {
        self.layout.set(sq, None);
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        let occupant = self.get(from);
        self.layout.set(to, occupant);
        self.clear(from);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

const FILE_HEADER: &str = "     a    b    c    d    e    f    g    h";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", FILE_HEADER)?;
        for rank in 0..8u8 {
            write!(f, "{:<3}", 8 - rank)?;
            for file in 0..8u8 {
                let cell = Square::new(rank, file)
                    .and_then(|sq| self.get(sq))
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string());
                write!(f, "{:^5}", cell)?;
            }
            writeln!(f, " {}", 8 - rank)?;
        }
        write!(f, "{}", FILE_HEADER)
    }
}
