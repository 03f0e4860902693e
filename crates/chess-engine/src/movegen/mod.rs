//! Pseudo-legal move generation.
//!
//! Every piece kind maps to one [`Movement`] rule. Candidates are generated
//! from board occupancy alone, plus the registry flags that special moves
//! depend on; whether the mover's king is left attacked is not checked.

mod castle;
mod pawn;
pub mod perft;
mod rays;

use chess_core::{Color, Move, PieceId, PieceKind, Square};

use crate::{Board, PieceRegistry};

pub use pawn::en_passant_victim;
pub use rays::{BISHOP_DIRS, KNIGHT_OFFSETS, QUEEN_DIRS, ROOK_DIRS};

/// How a piece kind moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Rays in each direction until blocked.
    Slide(&'static [(i8, i8)]),
    /// Single jumps by fixed offsets.
    Leap(&'static [(i8, i8)]),
    /// Forward advances and diagonal captures.
    Pawn,
}

impl Movement {
    /// Returns the movement rule of a piece kind.
    pub const fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Movement::Pawn,
            PieceKind::Knight => Movement::Leap(&KNIGHT_OFFSETS),
            PieceKind::Bishop => Movement::Slide(&BISHOP_DIRS),
            PieceKind::Rook => Movement::Slide(&ROOK_DIRS),
            PieceKind::Queen => Movement::Slide(&QUEEN_DIRS),
            PieceKind::King => Movement::Leap(&QUEEN_DIRS),
        }
    }
}

/// Returns the ordinary destination squares of a piece standing on `from`.
///
/// Special moves (promotion, en passant, castling) are not included.
pub fn destinations(color: Color, kind: PieceKind, from: Square, board: &Board) -> Vec<Square> {
    let mut out = Vec::new();
    match Movement::of(kind) {
        Movement::Slide(dirs) => rays::slide(from, dirs, color, board, &mut out),
        Movement::Leap(offsets) => rays::leap(from, offsets, color, board, &mut out),
        Movement::Pawn => pawn::destinations(color, from, board, &mut out),
    }
    out
}

/// Returns true if a piece of the given kind and color on `from` may move to
/// `to` by its movement geometry and the occupancy of the board.
///
/// Special moves are not covered, and the registry is never consulted.
pub fn can_move(kind: PieceKind, color: Color, from: Square, to: Square, board: &Board) -> bool {
    if from == to || !board.is_open_for(to, color) {
        return false;
    }
    let dr = (to.rank() as i8 - from.rank() as i8).abs();
    let df = (to.file() as i8 - from.file() as i8).abs();

    match kind {
        PieceKind::Pawn => pawn::can_move(color, from, to, board),
        PieceKind::Knight => matches!((dr, df), (1, 2) | (2, 1)),
        PieceKind::King => dr <= 1 && df <= 1,
        PieceKind::Rook => (dr == 0 || df == 0) && rays::path_clear(from, to, board),
        PieceKind::Bishop => dr == df && rays::path_clear(from, to, board),
        PieceKind::Queen => {
            (dr == 0 || df == 0 || dr == df) && rays::path_clear(from, to, board)
        }
    }
}

/// Returns every pseudo-legal move of the piece `id` standing on `at`.
///
/// Ordinary destinations become [`Move::Normal`], except pawn moves onto the
/// last rank, which only appear as the four promotion choices.
pub fn candidates(id: PieceId, at: Square, board: &Board, registry: &PieceRegistry) -> Vec<Move> {
    let color = id.color();
    let kind = id.kind();

    let mut moves: Vec<Move> = destinations(color, kind, at, board)
        .into_iter()
        .filter(|to| kind != PieceKind::Pawn || to.rank() != color.promotion_rank())
        .map(|to| Move::normal(at, to))
        .collect();

    match kind {
        PieceKind::Pawn => pawn::special_moves(color, at, board, registry, &mut moves),
        PieceKind::King => castle::castling_moves(id, at, board, registry, &mut moves),
        _ => {}
    }

    moves
}
