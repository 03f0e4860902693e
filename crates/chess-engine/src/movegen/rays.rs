//! Direction tables and ray walking for the non-pawn pieces.

use chess_core::{Color, Square};

use crate::Board;

/// Orthogonal directions as (rank delta, file delta).
pub const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Diagonal directions.
pub const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight directions; also the king's single steps.
pub const QUEEN_DIRS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// Walks each ray until it leaves the board or hits a piece.
///
/// A ray's first occupied square ends it and is included only when it holds
/// an enemy piece.
pub fn slide(from: Square, dirs: &[(i8, i8)], us: Color, board: &Board, out: &mut Vec<Square>) {
    for &(dr, df) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            match board.color_at(next) {
                None => out.push(next),
                Some(color) => {
                    if color != us {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Adds every in-bounds offset square not occupied by our own pieces.
pub fn leap(from: Square, offsets: &[(i8, i8)], us: Color, board: &Board, out: &mut Vec<Square>) {
    out.extend(
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .filter(|&to| board.is_open_for(to, us)),
    );
}

/// Returns the unit step from `from` towards `to` if they share a rank, file,
/// or diagonal.
pub fn direction(from: Square, to: Square) -> Option<(i8, i8)> {
    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;
    if (dr, df) == (0, 0) {
        return None;
    }
    if dr != 0 && df != 0 && dr.abs() != df.abs() {
        return None;
    }
    Some((dr.signum(), df.signum()))
}

/// Returns true if every square strictly between `from` and `to` is empty.
///
/// The squares must share a rank, file, or diagonal.
pub fn path_clear(from: Square, to: Square, board: &Board) -> bool {
    let Some((dr, df)) = direction(from, to) else {
        return false;
    };
    let mut current = from;
    while let Some(next) = current.offset(dr, df) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
