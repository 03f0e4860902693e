//! Core types for chess.
//!
//! This crate provides the fundamental types used across the move engine:
//! - [`Color`] and [`PieceKind`] for piece classification
//! - [`PieceId`] for the identity of one physical piece (e.g. `BP1`)
//! - [`Square`] for board coordinates and algebraic notation
//! - [`Move`] for the four move categories
//! - Board layout text parsing

mod color;
mod error;
mod layout;
mod mov;
mod piece;
mod piece_id;
mod square;

pub use color::Color;
pub use error::CoreError;
pub use layout::{Layout, LayoutError, EMPTY_CELL};
pub use mov::{CastleSide, Move, Promotion};
pub use piece::PieceKind;
pub use piece_id::PieceId;
pub use square::Square;
