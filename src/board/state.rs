use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::builder::BoardBuilder;
use super::{Color, Piece, Position, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// An 8×8 grid of optional occupants.
///
/// Each cell holds at most one piece. Move generation only ever reads a
/// board through `&Board`; mutation is reserved for setup and for the layers
/// that apply moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; SIZE]; SIZE], // [rank][file]
    bottom_color: Option<Color>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; SIZE]; SIZE],
            bottom_color: None,
        }
    }

    /// Standard starting arrangement with the side on rank 1 picked at random.
    #[must_use]
    pub fn standard() -> Self {
        Self::standard_with_rng(&mut rand::thread_rng())
    }

    /// Standard starting arrangement, reproducible from `seed`.
    #[must_use]
    pub fn standard_seeded(seed: u64) -> Self {
        Self::standard_with_rng(&mut StdRng::seed_from_u64(seed))
    }

    /// Standard starting arrangement; one coin flip from `rng` decides which
    /// color starts on ranks 1 and 2.
    pub fn standard_with_rng<R: Rng>(rng: &mut R) -> Self {
        let bottom = if rng.gen_bool(0.5) {
            Color::White
        } else {
            Color::Black
        };
        #[cfg(feature = "logging")]
        log::debug!("standard board: {bottom} starts on rank 1");
        BoardBuilder::starting_position(bottom).build()
    }

    /// Color placed on ranks 1 and 2 by a standard setup, if any.
    #[inline]
    #[must_use]
    pub const fn bottom_color(&self) -> Option<Color> {
        self.bottom_color
    }

    pub(crate) fn set_bottom_color(&mut self, color: Option<Color>) {
        self.bottom_color = color;
    }

    /// Occupant of `position`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[position.rank() as usize][position.file() as usize]
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.piece_at(position).is_some()
    }

    /// Put `piece` on `position`, returning whatever stood there before.
    pub fn set_piece(&mut self, position: Position, piece: Piece) -> Option<Piece> {
        self.squares[position.rank() as usize][position.file() as usize].replace(piece)
    }

    /// Empty `position`, returning its previous occupant.
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.squares[position.rank() as usize][position.file() as usize].take()
    }

    /// Every occupied square in a1..h8 order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Occupied squares of one color in a1..h8 order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }
}

/// Plain-text rendering: one line per rank starting at rank 1, a glyph or a
/// space per file.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, " ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
