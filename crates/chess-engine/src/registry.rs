//! Per-piece metadata keyed by piece id.
//!
//! The registry is the second representation of a position next to the
//! [`Board`]. It records which pieces exist and what each has done so far,
//! which is what castling and en-passant rights are derived from.

use std::collections::BTreeMap;

use chess_core::{Color, CoreError, Move, PieceId, PieceKind};
use tracing::{debug, warn};

use crate::movegen;
use crate::Board;

/// Number of pieces of each kind per color in the standard setup.
const STANDARD_SET: [(PieceKind, u8); 6] = [
    (PieceKind::Pawn, 8),
    (PieceKind::Rook, 2),
    (PieceKind::Knight, 2),
    (PieceKind::Bishop, 2),
    (PieceKind::Queen, 1),
    (PieceKind::King, 1),
];

/// Metadata for one live piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceRecord {
    id: PieceId,
    /// Set the first time the piece is relocated by any move.
    pub has_moved: bool,
    /// Pawns only: set right after a two-square advance.
    pub just_double_stepped: bool,
}

impl PieceRecord {
    /// Creates a record for a piece that has not moved yet.
    pub const fn new(id: PieceId) -> Self {
        PieceRecord {
            id,
            has_moved: false,
            just_double_stepped: false,
        }
    }

    #[inline]
    pub const fn id(&self) -> PieceId {
        self.id
    }
}

/// Disagreement between a registry and a board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mismatch {
    /// Pieces on the board with no registry entry.
    pub only_on_board: Vec<PieceId>,
    /// Registry entries with no piece on the board.
    pub only_in_registry: Vec<PieceId>,
    /// Ids standing on more than one square.
    pub duplicated: Vec<PieceId>,
}

impl Mismatch {
    pub fn is_empty(&self) -> bool {
        self.only_on_board.is_empty()
            && self.only_in_registry.is_empty()
            && self.duplicated.is_empty()
    }
}

/// The set of live pieces and their metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceRegistry {
    records: BTreeMap<PieceId, PieceRecord>,
}

impl PieceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the 32 pieces of the standard setup.
    ///
    /// This is independent of any board; use [`from_board`](Self::from_board)
    /// for custom layouts.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for color in Color::ALL {
            for (kind, count) in STANDARD_SET {
                for number in 1..=count {
                    if let Some(id) = PieceId::new(color, kind, number) {
                        registry.register(id);
                    }
                }
            }
        }
        registry
    }

    /// Creates a registry with one unmoved entry per piece on the board.
    pub fn from_board(board: &Board) -> Self {
        let mut registry = Self::new();
        for (_, id) in board.occupants() {
            registry.register(id);
        }
        registry
    }

    /// Registers a piece with both flags cleared. Does nothing if already present.
    pub fn register(&mut self, id: PieceId) {
        if self.records.contains_key(&id) {
            return;
        }
        debug!(piece = %id, "registered piece");
        self.records.insert(id, PieceRecord::new(id));
    }

    /// Parses and registers a piece id given as text.
    ///
    /// Malformed ids are logged and rejected without touching the registry.
    pub fn register_str(&mut self, text: &str) -> Result<PieceId, CoreError> {
        match PieceId::parse(text) {
            Ok(id) => {
                self.register(id);
                Ok(id)
            }
            Err(e) => {
                warn!(piece = text, "rejected malformed piece id");
                Err(e)
            }
        }
    }

    /// Inserts a record as-is, replacing any previous entry for its id.
    pub(crate) fn insert(&mut self, record: PieceRecord) {
        self.records.insert(record.id, record);
    }

    /// Returns the record for a piece without creating it.
    #[inline]
    pub fn lookup(&self, id: PieceId) -> Option<&PieceRecord> {
        self.records.get(&id)
    }

    #[inline]
    pub(crate) fn lookup_mut(&mut self, id: PieceId) -> Option<&mut PieceRecord> {
        self.records.get_mut(&id)
    }

    /// Removes a piece, returning its record.
    pub fn remove(&mut self, id: PieceId) -> Option<PieceRecord> {
        self.records.remove(&id)
    }

    #[inline]
    pub fn contains(&self, id: PieceId) -> bool {
        self.records.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over all records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        self.records.values()
    }

    /// Returns the pseudo-legal moves of a piece on the given board.
    ///
    /// An unknown id is registered first. Returns an empty list if the piece is
    /// not on the board.
    pub fn moves_for(&mut self, id: PieceId, board: &Board) -> Vec<Move> {
        self.register(id);
        match board.find(id) {
            Some(at) => movegen::candidates(id, at, board, self),
            None => Vec::new(),
        }
    }

    /// Clears the double-step flag of every pawn of one color.
    pub(crate) fn clear_double_steps(&mut self, color: Color) {
        for record in self.records.values_mut() {
            if record.id.color() == color && record.just_double_stepped {
                record.just_double_stepped = false;
            }
        }
    }

    /// Drops every entry whose piece is not on the board.
    ///
    /// Returns the removed ids.
    pub fn reconcile(&mut self, board: &Board) -> Vec<PieceId> {
        let present = board.piece_ids();
        let stale: Vec<PieceId> = self
            .records
            .keys()
            .filter(|id| !present.contains(*id))
            .copied()
            .collect();
        for id in &stale {
            debug!(piece = %id, "dropping piece absent from board");
            self.records.remove(id);
        }
        stale
    }

    /// Returns one more than the highest registered instance number for the
    /// color and kind, or 1 if there is none.
    ///
    /// Numbers of removed pieces are not reserved and may be handed out again.
    /// Returns `None` when the highest number is already `u8::MAX`.
    pub fn next_instance_number(&self, color: Color, kind: PieceKind) -> Option<u8> {
        match self
            .records
            .keys()
            .filter(|id| id.color() == color && id.kind() == kind)
            .map(|id| id.number())
            .max()
        {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Compares the registered ids with the pieces on the board.
    pub fn verify(&self, board: &Board) -> Mismatch {
        let mut on_board: BTreeMap<PieceId, usize> = BTreeMap::new();
        for (_, id) in board.occupants() {
            *on_board.entry(id).or_default() += 1;
        }

        let only_on_board = on_board
            .keys()
            .filter(|id| !self.records.contains_key(*id))
            .copied()
            .collect();
        let only_in_registry = self
            .records
            .keys()
            .filter(|id| !on_board.contains_key(*id))
            .copied()
            .collect();
        let duplicated = on_board
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(&id, _)| id)
            .collect();
        Mismatch {
            only_on_board,
            only_in_registry,
            duplicated,
        }
    }
}
