//! Errors raised while building core values from text or raw parts.

use thiserror::Error;

use crate::PieceKind;

/// Errors that can occur when constructing squares, piece ids, or moves.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid square notation: '{0}'")]
    InvalidNotation(String),

    #[error("cannot promote to {0}")]
    IllegalPromotionTarget(PieceKind),

    #[error("unrecognized piece id: '{0}'")]
    UnregisteredPiece(String),
}
