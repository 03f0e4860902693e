//! Move strings.
//!
//! A move is written as two squares joined by a dash, optionally followed by
//! `=` and the letter of the promotion piece: `e2-e4`, `a7-a8=T`. Castling is
//! written `O-O` (kingside) or `O-O-O` (queenside) and applies to the side to
//! move. The category of a square-to-square move is inferred from the
//! position: a pawn reaching its last rank promotes (to a queen unless a
//! letter is given), and a pawn moving diagonally onto an empty square
//! captures en passant.

use chess_core::{CastleSide, CoreError, Move, PieceKind, Square};

use crate::{GameError, Position};

/// Translates a move string into a [`Move`] in the context of a position.
///
/// The result is not checked against the piece's candidates; that happens
/// when the move is applied.
///
/// # Errors
///
/// - [`GameError::InvalidMoveString`] if the text does not follow the grammar.
/// - [`GameError::Core`] with [`CoreError::InvalidNotation`] for a bad square,
///   [`CoreError::UnregisteredPiece`] for an unknown piece letter, or
///   [`CoreError::IllegalPromotionTarget`] for a pawn or king promotion.
/// - [`GameError::EmptySquare`] if nothing stands on the origin square.
pub fn parse_move(position: &Position, text: &str) -> Result<Move, GameError> {
    let text = text.trim();

    if let Some(side) = castle_side(text) {
        return Ok(Move::castle(position.side_to_move, side));
    }

    let invalid = || GameError::InvalidMoveString(text.to_string());

    let (body, promotion) = match text.split_once('=') {
        Some((body, letter)) => (body, Some(promotion_kind(letter)?)),
        None => (text, None),
    };
    let (from, to) = body.split_once('-').ok_or_else(invalid)?;
    let from = Square::from_algebraic(from)?;
    let to = Square::from_algebraic(to)?;

    let mover = position
        .board()
        .get(from)
        .ok_or(GameError::EmptySquare(from))?;

    if mover.kind() != PieceKind::Pawn {
        return match promotion {
            Some(_) => Err(invalid()),
            None => Ok(Move::normal(from, to)),
        };
    }

    if to.rank() == mover.color().promotion_rank() {
        return Ok(Move::promotion(
            from,
            to,
            promotion.unwrap_or(PieceKind::Queen),
        )?);
    }
    if promotion.is_some() {
        return Err(invalid());
    }
    if from.file() != to.file() && position.board().is_empty(to) {
        return Ok(Move::en_passant(from, to));
    }
    Ok(Move::normal(from, to))
}

/// Formats a move the way [`parse_move`] reads it.
pub fn format_move(mv: Move) -> String {
    match mv {
        Move::Normal { from, to } | Move::EnPassant { from, to } => format!("{from}-{to}"),
        Move::Promotion { from, to, piece } => {
            format!("{from}-{to}={}", piece.kind().to_char())
        }
        Move::Castle { side, .. } => side.notation().to_string(),
    }
}

fn castle_side(text: &str) -> Option<CastleSide> {
    CastleSide::ALL
        .into_iter()
        .find(|side| side.notation() == text)
}

fn promotion_kind(letter: &str) -> Result<PieceKind, CoreError> {
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_char(c.to_ascii_uppercase())
            .ok_or_else(|| CoreError::UnregisteredPiece(letter.to_string())),
        _ => Err(CoreError::UnregisteredPiece(letter.to_string())),
    }
}
