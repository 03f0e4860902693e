//! Identity of one physical piece.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Color, CoreError, PieceKind};

/// The immutable identity of one piece: color, kind, and instance number.
///
/// Rendered as `<color><kind><number>`, e.g. `BP1` (White pawn 1) or `NQ2`
/// (Black queen 2).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PieceId {
    color: Color,
    kind: PieceKind,
    number: u8,
}

impl PieceId {
    /// Creates an id. Instance numbers start at 1.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, number: u8) -> Option<Self> {
        if number == 0 {
            return None;
        }
        Some(PieceId {
            color,
            kind,
            number,
        })
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Parses an id such as `BP1` or `NT2`.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::UnregisteredPiece(s.to_string());
        let mut chars = s.chars();
        let color = chars.next().and_then(Color::from_char).ok_or_else(invalid)?;
        let kind = chars
            .next()
            .and_then(PieceKind::from_char)
            .ok_or_else(invalid)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse::<u8>().map_err(|_| invalid())?;
        PieceId::new(color, kind, number).ok_or_else(invalid)
    }
}

impl FromStr for PieceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceId::parse(s)
    }
}

impl TryFrom<String> for PieceId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PieceId::parse(&value)
    }
}

impl From<PieceId> for String {
    fn from(id: PieceId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.color.to_char(),
            self.kind.to_char(),
            self.number
        )
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self)
    }
}
