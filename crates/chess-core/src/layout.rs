//! Board layout text parsing and serialization.
//!
//! A layout is written as eight rows, rank 8 first, each holding eight
//! whitespace-separated cells. A cell is either [`EMPTY_CELL`] or a piece id:
//!
//! ```text
//! NT1 NC1 NA1 NQ1 NR1 NA2 NC2 NT2
//! NP1 NP2 NP3 NP4 NP5 NP6 NP7 NP8
//! ... ... ... ... ... ... ... ...
//! ```
//!
//! [`Layout::to_text`] pads every cell to the widest id present, so a board
//! holding `BC10` is written with four-character columns.

use std::collections::HashSet;

use thiserror::Error;

use crate::{PieceId, Square};

/// Marker for an empty cell in layouts and snapshots.
pub const EMPTY_CELL: &str = "...";

/// Errors that can occur when parsing a layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} has {len} cells, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid layout: unrecognized cell '{cell}' in row {row}")]
    InvalidCell { row: usize, cell: String },

    #[error("invalid layout: piece {0} appears more than once")]
    DuplicatePiece(PieceId),
}

/// A parsed 8×8 grid of optional piece ids, indexed `[rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    cells: [[Option<PieceId>; 8]; 8],
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "\
NT1 NC1 NA1 NQ1 NR1 NA2 NC2 NT2
NP1 NP2 NP3 NP4 NP5 NP6 NP7 NP8
... ... ... ... ... ... ... ...
... ... ... ... ... ... ... ...
... ... ... ... ... ... ... ...
... ... ... ... ... ... ... ...
BP1 BP2 BP3 BP4 BP5 BP6 BP7 BP8
BT1 BC1 BA1 BQ1 BR1 BA2 BC2 BT2";

    /// Returns a layout with no pieces.
    pub const fn empty() -> Self {
        Layout {
            cells: [[None; 8]; 8],
        }
    }

    /// Parses a layout. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut layout = Layout::empty();
        let mut seen = HashSet::new();

        for (rank, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.split_whitespace().collect();
            if cells.len() != 8 {
                return Err(LayoutError::InvalidRowLength {
                    row: rank + 1,
                    len: cells.len(),
                });
            }

            for (file, cell) in cells.into_iter().enumerate() {
                if cell == EMPTY_CELL {
                    continue;
                }
                let id = PieceId::parse(cell).map_err(|_| LayoutError::InvalidCell {
                    row: rank + 1,
                    cell: cell.to_string(),
                })?;
                if !seen.insert(id) {
                    return Err(LayoutError::DuplicatePiece(id));
                }
                layout.cells[rank][file] = Some(id);
            }
        }

        Ok(layout)
    }

    /// Returns the standard starting layout.
    pub fn standard() -> Self {
        match Self::parse(Self::STANDARD) {
            Ok(layout) => layout,
            Err(e) => unreachable!("standard layout is valid: {e}"),
        }
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.cells[sq.rank() as usize][sq.file() as usize]
    }

    /// Places (or clears) a square.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<PieceId>) {
        self.cells[sq.rank() as usize][sq.file() as usize] = occupant;
    }

    /// Returns the raw grid.
    #[inline]
    pub fn cells(&self) -> &[[Option<PieceId>; 8]; 8] {
        &self.cells
    }

    /// Serializes the layout back to its text form.
    pub fn to_text(&self) -> String {
        let width = self
            .cells
            .iter()
            .flatten()
            .flatten()
            .map(|id| id.to_string().len())
            .fold(EMPTY_CELL.len(), usize::max);

        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(id) => format!("{:<width$}", id.to_string()),
                        None => format!("{:<width$}", EMPTY_CELL),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::standard()
    }
}
