//! Move execution.
//!
//! [`apply`] produces the board that results from a move and updates the
//! registry in place so that both describe the same set of pieces again.
//! It trusts its input: the move must be one of the mover's candidates.
//! [`Position::apply`](crate::Position::apply) is the validated entry point.

use chess_core::{Move, PieceId, PieceKind, Square};
use tracing::{debug, warn};

use crate::movegen::en_passant_victim;
use crate::registry::PieceRecord;
use crate::{Board, PieceRegistry};

/// Applies a move and returns the new board.
///
/// The mover is marked as moved, a pawn's double-step flag records whether
/// this move was a two-square advance, captured pieces are dropped from the
/// registry, and promotions register a freshly numbered piece. Flags of other
/// pawns are left alone. If every instance number of the promotion kind is
/// taken, the pawn moves without promoting.
///
/// A move from an empty square is a precondition violation: it is logged and
/// the board is returned unchanged.
pub fn apply(registry: &mut PieceRegistry, mv: Move, board: &Board) -> Board {
    let from = mv.from();
    let to = mv.to();

    let Some(mover) = board.get(from) else {
        warn!(%mv, "move from an empty square ignored");
        return board.clone();
    };

    let mut next = board.clone();

    if !mv.is_castle() {
        if let Some(captured) = board.get(to) {
            debug!(piece = %captured, square = %to, "captured");
            registry.remove(captured);
        }
    }

    match mv {
        Move::Normal { .. } => {
            next.relocate(from, to);
            mark_moved(registry, mover, is_double_step(mover, from, to));
        }
        Move::EnPassant { .. } => {
            if let Some(victim_square) = en_passant_victim(from, to) {
                if let Some(victim) = board.get(victim_square) {
                    debug!(piece = %victim, square = %victim_square, "captured en passant");
                    registry.remove(victim);
                }
                next.clear(victim_square);
            }
            next.relocate(from, to);
            mark_moved(registry, mover, false);
        }
        Move::Promotion { piece, .. } => {
            registry.remove(mover);
            let color = mover.color();
            let kind = piece.kind();
            let promoted = registry
                .next_instance_number(color, kind)
                .and_then(|number| PieceId::new(color, kind, number));
            match promoted {
                Some(promoted) => {
                    debug!(pawn = %mover, piece = %promoted, square = %to, "promoted");
                    next.clear(from);
                    next.set(to, promoted);
                    let mut record = PieceRecord::new(promoted);
                    record.has_moved = true;
                    registry.insert(record);
                }
                None => {
                    warn!(pawn = %mover, %kind, "no instance number left, pawn is not promoted");
                    next.relocate(from, to);
                    mark_moved(registry, mover, false);
                }
            }
        }
        Move::Castle { color, side } => {
            let rook_from = side.rook_square(color);
            let rook_to = side.rook_target(color);
            let rook = board.get(rook_from);
            next.relocate(from, to);
            next.relocate(rook_from, rook_to);
            mark_moved(registry, mover, false);
            if let Some(rook) = rook {
                mark_moved(registry, rook, false);
            }
            debug!(%color, side = side.notation(), "castled");
        }
    }

    registry.reconcile(&next);
    next
}

fn is_double_step(mover: PieceId, from: Square, to: Square) -> bool {
    mover.kind() == PieceKind::Pawn && from.file() == to.file() && from.rank().abs_diff(to.rank()) == 2
}

/// Sets `has_moved` and the double-step flag, registering the piece if needed.
fn mark_moved(registry: &mut PieceRegistry, id: PieceId, double_stepped: bool) {
    registry.register(id);
    if let Some(record) = registry.lookup_mut(id) {
        record.has_moved = true;
        if id.kind() == PieceKind::Pawn {
            record.just_double_stepped = double_stepped;
        }
    }
}
