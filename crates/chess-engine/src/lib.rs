//! Chess move engine built on a per-piece registry.
//!
//! This crate provides:
//! - [`Board`] - 8×8 grid of piece ids
//! - [`PieceRegistry`] - per-piece metadata (moved, just double-stepped)
//! - [`movegen`] - pseudo-legal candidate generation for every piece kind
//! - [`executor`] - move application keeping board and registry in step
//! - [`Position`] - board and registry as one owned, cloneable value
//! - [`Game`] - move strings and history on top of a position
//! - [`RulesConfig`] - rule switches loaded from TOML
//!
//! # Architecture
//!
//! Every physical piece has a stable id such as `BP1` (white pawn number one)
//! or `NQ1` (black queen). Castling and en-passant rights are not stored as
//! position flags; they are read from the registry records of the pieces
//! involved. Move generation is pseudo-legal: moves that leave the mover's
//! king attacked are not filtered out.
//!
//! # Example
//!
//! ```
//! use chess_engine::{Game, Position};
//!
//! let position = Position::startpos();
//! println!("Candidates from the starting position: {}", position.candidate_moves().len());
//!
//! let mut game = Game::new();
//! game.play("e2-e4").unwrap();
//! game.play("e7-e5").unwrap();
//! println!("{}", game.position());
//! ```

mod board;
pub mod config;
pub mod executor;
mod game;
pub mod movegen;
pub mod notation;
mod position;
mod registry;

pub use board::Board;
pub use config::{ConfigError, DoubleStepExpiry, RulesConfig};
pub use game::{Game, GameError, GameMove};
pub use movegen::perft::{perft, perft_divide};
pub use notation::{format_move, parse_move};
pub use position::Position;
pub use registry::{Mismatch, PieceRecord, PieceRegistry};
