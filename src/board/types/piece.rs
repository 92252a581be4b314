//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Rank direction a pawn advances in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Forward {
    /// Towards rank 8 (+1)
    Up,
    /// Towards rank 1 (-1)
    Down,
}

impl Forward {
    /// Rank delta of a single pawn step.
    #[inline]
    #[must_use]
    pub const fn delta(self) -> i8 {
        match self {
            Forward::Up => 1,
            Forward::Down => -1,
        }
    }

    /// Rank a pawn moving this way starts on (1 going up, 6 going down).
    #[inline]
    #[must_use]
    pub const fn start_rank(self) -> u8 {
        match self {
            Forward::Up => 1,
            Forward::Down => 6,
        }
    }

    /// Direction used when the board follows the usual white-at-the-bottom layout.
    #[inline]
    #[must_use]
    pub const fn conventional(color: Color) -> Forward {
        match color {
            Color::White => Forward::Up,
            Color::Black => Forward::Down,
        }
    }
}

/// Piece kinds without color or direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a character (p, n, b, r, q, k; any case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Convert piece kind to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece on the board.
///
/// Pawns carry the rank direction they advance in, fixed when they are placed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn { color: Color, forward: Forward },
    Knight(Color),
    Bishop(Color),
    Rook(Color),
    Queen(Color),
    King(Color),
}

impl Piece {
    /// Create a piece of the given kind. Pawns get [`Forward::conventional`].
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        match kind {
            PieceKind::Pawn => Piece::pawn(color, Forward::conventional(color)),
            PieceKind::Knight => Piece::Knight(color),
            PieceKind::Bishop => Piece::Bishop(color),
            PieceKind::Rook => Piece::Rook(color),
            PieceKind::Queen => Piece::Queen(color),
            PieceKind::King => Piece::King(color),
        }
    }

    /// Create a pawn advancing in `forward`.
    #[inline]
    #[must_use]
    pub const fn pawn(color: Color, forward: Forward) -> Piece {
        Piece::Pawn { color, forward }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Piece::Pawn { color, .. }
            | Piece::Knight(color)
            | Piece::Bishop(color)
            | Piece::Rook(color)
            | Piece::Queen(color)
            | Piece::King(color) => color,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Knight(_) => PieceKind::Knight,
            Piece::Bishop(_) => PieceKind::Bishop,
            Piece::Rook(_) => PieceKind::Rook,
            Piece::Queen(_) => PieceKind::Queen,
            Piece::King(_) => PieceKind::King,
        }
    }

    /// Advance direction, for pawns only.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> Option<Forward> {
        match self {
            Piece::Pawn { forward, .. } => Some(forward),
            _ => None,
        }
    }

    /// True if `other` belongs to the opposing side.
    #[inline]
    #[must_use]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.color() != other.color()
    }

    /// Unicode glyph used by board renderers.
    #[must_use]
    pub const fn glyph(self) -> char {
        match (self.kind(), self.color()) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::Black) => '♚',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[must_use]
    pub fn to_fen_char(self) -> char {
        let c = self.kind().to_char();
        if self.color() == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
