//! Castling candidates.
//!
//! Rights are read from the registry entries of specific pieces rather than
//! from per-color flags: the king must be unmoved, and the rook that started
//! on the castling side (`T1` on the a-file, `T2` on the h-file) must still
//! stand on its square unmoved.

use chess_core::{CastleSide, Move, PieceId, PieceKind, Square};

use super::rays::path_clear;
use crate::{Board, PieceRegistry};

/// Returns the castling moves available to a king.
pub fn castling_moves(
    king: PieceId,
    at: Square,
    board: &Board,
    registry: &PieceRegistry,
    out: &mut Vec<Move>,
) {
    let color = king.color();
    let unmoved = |id: PieceId| registry.lookup(id).is_some_and(|r| !r.has_moved);

    if !unmoved(king) || at != CastleSide::king_square(color) {
        return;
    }

    for side in CastleSide::ALL {
        let rook_square = side.rook_square(color);
        let Some(rook) = PieceId::new(color, PieceKind::Rook, side.rook_number()) else {
            continue;
        };
        if board.get(rook_square) != Some(rook) || !unmoved(rook) {
            continue;
        }
        if path_clear(at, rook_square, board) {
            out.push(Move::castle(color, side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn id(s: &str) -> PieceId {
        PieceId::parse(s).unwrap()
    }

    const CORNERS: &str = "
        NT1 ... ... ... NR1 ... ... NT2
        ... ... ... ... ... ... ... ...
        ... ... ... ... ... ... ... ...
        ... ... ... ... ... ... ... ...
        ... ... ... ... ... ... ... ...
        ... ... ... ... ... ... ... ...
        ... ... ... ... ... ... ... ...
        BT1 ... ... ... BR1 ... ... BT2";

    fn castles(board: &Board, registry: &PieceRegistry, king: &str) -> Vec<Move> {
        let king = id(king);
        let mut out = Vec::new();
        castling_moves(king, board.find(king).unwrap(), board, registry, &mut out);
        out
    }

    #[test]
    fn both_sides_available() {
        let board = Board::from_layout(CORNERS).unwrap();
        let registry = PieceRegistry::from_board(&board);
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![
                Move::castle(Color::White, CastleSide::Kingside),
                Move::castle(Color::White, CastleSide::Queenside),
            ]
        );
        assert_eq!(castles(&board, &registry, "NR1").len(), 2);
    }

    #[test]
    fn blocked_next_to_rook() {
        let mut board = Board::from_layout(CORNERS).unwrap();
        board.set(sq("b1"), id("BC1"));
        let registry = PieceRegistry::from_board(&board);
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![Move::castle(Color::White, CastleSide::Kingside)]
        );
    }

    #[test]
    fn enemy_piece_in_corridor_blocks() {
        let mut board = Board::from_layout(CORNERS).unwrap();
        board.set(sq("f1"), id("NA1"));
        let registry = PieceRegistry::from_board(&board);
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![Move::castle(Color::White, CastleSide::Queenside)]
        );
    }

    #[test]
    fn moved_rook_loses_its_side() {
        let board = Board::from_layout(CORNERS).unwrap();
        let mut registry = PieceRegistry::from_board(&board);
        registry.lookup_mut(id("BT2")).unwrap().has_moved = true;
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![Move::castle(Color::White, CastleSide::Queenside)]
        );
    }

    #[test]
    fn moved_king_loses_both_sides() {
        let board = Board::from_layout(CORNERS).unwrap();
        let mut registry = PieceRegistry::from_board(&board);
        registry.lookup_mut(id("BR1")).unwrap().has_moved = true;
        assert!(castles(&board, &registry, "BR1").is_empty());
    }

    #[test]
    fn wrong_rook_id_on_corner() {
        let mut board = Board::from_layout(CORNERS).unwrap();
        board.clear(sq("h1"));
        board.set(sq("h1"), id("BT3"));
        let registry = PieceRegistry::from_board(&board);
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![Move::castle(Color::White, CastleSide::Queenside)]
        );
    }

    #[test]
    fn unregistered_rook_cannot_castle() {
        let board = Board::from_layout(CORNERS).unwrap();
        let mut registry = PieceRegistry::from_board(&board);
        registry.remove(id("BT1"));
        assert_eq!(
            castles(&board, &registry, "BR1"),
            vec![Move::castle(Color::White, CastleSide::Kingside)]
        );
    }

    #[test]
    fn king_off_home_square() {
        let mut board = Board::from_layout(CORNERS).unwrap();
        board.relocate(sq("e1"), sq("d1"));
        let registry = PieceRegistry::from_board(&board);
        assert!(castles(&board, &registry, "BR1").is_empty());
    }
}
