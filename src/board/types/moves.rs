//! Descriptive move record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Position;

/// A piece travelling from `start` to `end`.
///
/// Move generation itself only produces target squares; this record exists
/// for display and logging by the layers built on top of it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    start: Position,
    piece: Piece,
    end: Position,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(start: Position, piece: Piece, end: Position) -> Self {
        Move { start, piece, end }
    }

    #[inline]
    #[must_use]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn piece(self) -> Piece {
        self.piece
    }

    #[inline]
    #[must_use]
    pub const fn end(self) -> Position {
        self.end
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece, self.start, self.end)
    }
}
