//! Pawn movement, promotion, and en passant.

use chess_core::{Color, Move, PieceKind, Promotion, Square};

use crate::{Board, PieceRegistry};

/// File deltas of the two capture diagonals.
const CAPTURE_FILES: [i8; 2] = [-1, 1];

/// Returns the squares a pawn can advance to or capture on, ignoring promotion.
pub fn destinations(us: Color, from: Square, board: &Board, out: &mut Vec<Square>) {
    let dir = us.forward_direction();

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
        out.push(one);
        if from.rank() == us.starting_pawn_rank() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                out.push(two);
            }
        }
    }

    out.extend(
        CAPTURE_FILES
            .iter()
            .filter_map(|&df| from.offset(dir, df))
            .filter(|&sq| board.is_enemy(sq, us)),
    );
}

/// Returns true if a pawn on `from` may advance to or capture on `to`.
pub fn can_move(us: Color, from: Square, to: Square, board: &Board) -> bool {
    let dir = us.forward_direction();
    let dr = to.rank() as i8 - from.rank() as i8;
    let df = to.file() as i8 - from.file() as i8;

    if df == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if dr == dir {
            return true;
        }
        return dr == 2 * dir
            && from.rank() == us.starting_pawn_rank()
            && from.offset(dir, 0).is_some_and(|mid| board.is_empty(mid));
    }

    dr == dir && df.abs() == 1 && board.is_enemy(to, us)
}

/// Returns the promotion and en-passant moves of a pawn.
pub fn special_moves(
    us: Color,
    from: Square,
    board: &Board,
    registry: &PieceRegistry,
    out: &mut Vec<Move>,
) {
    let dir = us.forward_direction();

    if let Some(ahead) = from.offset(dir, 0) {
        if ahead.rank() == us.promotion_rank() {
            if board.is_empty(ahead) {
                push_promotions(from, ahead, out);
            }
            for target in CAPTURE_FILES
                .iter()
                .filter_map(|&df| from.offset(dir, df))
                .filter(|&sq| board.is_enemy(sq, us))
            {
                push_promotions(from, target, out);
            }
        }
    }

    if from.rank() != us.en_passant_rank() {
        return;
    }
    for &df in &CAPTURE_FILES {
        let Some(beside) = from.offset(0, df) else {
            continue;
        };
        let Some(victim) = board.get(beside) else {
            continue;
        };
        if victim.color() == us || victim.kind() != PieceKind::Pawn {
            continue;
        }
        let double_stepped = registry
            .lookup(victim)
            .is_some_and(|record| record.just_double_stepped);
        if let (true, Some(to)) = (double_stepped, from.offset(dir, df)) {
            out.push(Move::en_passant(from, to));
        }
    }
}

/// Returns the square of the pawn captured by an en-passant move.
pub fn en_passant_victim(from: Square, to: Square) -> Option<Square> {
    Square::new(from.rank(), to.file())
}

fn push_promotions(from: Square, to: Square, out: &mut Vec<Move>) {
    out.extend(
        Promotion::ALL
            .iter()
            .map(|&piece| Move::Promotion { from, to, piece }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn dests(us: Color, from: &str, board: &Board) -> Vec<Square> {
        let mut out = Vec::new();
        destinations(us, sq(from), board, &mut out);
        out
    }

    #[test]
    fn single_and_double_advance() {
        let board = Board::standard();
        assert_eq!(dests(Color::White, "e2", &board), vec![sq("e3"), sq("e4")]);
        assert_eq!(dests(Color::Black, "d7", &board), vec![sq("d6"), sq("d5")]);
    }

    #[test]
    fn blocked_intermediate_square_stops_both_advances() {
        let mut board = Board::standard();
        board.relocate(sq("b8"), sq("e3"));
        assert!(dests(Color::White, "e2", &board).is_empty());
        assert!(!can_move(Color::White, sq("e2"), sq("e4"), &board));
        assert!(!can_move(Color::White, sq("e2"), sq("e3"), &board));
    }

    #[test]
    fn double_advance_only_from_starting_rank() {
        let mut board = Board::standard();
        board.relocate(sq("e2"), sq("e3"));
        assert_eq!(dests(Color::White, "e3", &board), vec![sq("e4")]);
        assert!(!can_move(Color::White, sq("e3"), sq("e5"), &board));
    }

    #[test]
    fn diagonal_only_onto_enemy() {
        let mut board = Board::standard();
        board.relocate(sq("e2"), sq("e4"));
        board.relocate(sq("d7"), sq("d5"));
        let moves = dests(Color::White, "e4", &board);
        assert!(moves.contains(&sq("d5")));
        assert!(!moves.contains(&sq("f5")));
        assert!(can_move(Color::White, sq("e4"), sq("d5"), &board));
        assert!(!can_move(Color::White, sq("e4"), sq("f5"), &board));
    }

    #[test]
    fn cannot_move_backwards() {
        let mut board = Board::standard();
        board.relocate(sq("e2"), sq("e4"));
        assert!(!can_move(Color::White, sq("e4"), sq("e3"), &board));
        assert!(can_move(Color::White, sq("e4"), sq("e5"), &board));
    }

    #[test]
    fn en_passant_victim_square() {
        assert_eq!(en_passant_victim(sq("e5"), sq("d6")), Some(sq("d5")));
        assert_eq!(en_passant_victim(sq("d4"), sq("e3")), Some(sq("e4")));
    }
}
