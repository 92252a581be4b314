//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing placement strings.
//!
//! # Example
//! ```
//! use chess_moves::board::{BoardBuilder, Color, Forward, Piece, Position};
//!
//! let e1: Position = "e1".parse().unwrap();
//! let e8: Position = "e8".parse().unwrap();
//! let a2: Position = "a2".parse().unwrap();
//!
//! let board = BoardBuilder::new()
//!     .piece(e1, Piece::King(Color::White))
//!     .piece(e8, Piece::King(Color::Black))
//!     .piece(a2, Piece::pawn(Color::White, Forward::Up))
//!     .build();
//! assert_eq!(board.pieces().count(), 3);
//! ```

use super::{Board, Color, Forward, Piece, Position, BOARD_SIZE};

const BACK_RANK: [fn(Color) -> Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
    bottom_color: Option<Color>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the standard arrangement with `bottom` on
    /// ranks 1 and 2 (pawns advancing up) and the other color on ranks 7 and 8.
    #[must_use]
    pub fn starting_position(bottom: Color) -> Self {
        let mut builder = Self::new();
        let top = bottom.opponent();

        for (file, make) in (0..BOARD_SIZE).zip(BACK_RANK) {
            builder.push(file, 0, make(bottom));
            builder.push(file, BOARD_SIZE - 1, make(top));
            builder.push(file, Forward::Up.start_rank(), Piece::pawn(bottom, Forward::Up));
            builder.push(file, Forward::Down.start_rank(), Piece::pawn(top, Forward::Down));
        }

        builder.bottom_color = Some(bottom);
        builder
    }

    fn push(&mut self, file: u8, rank: u8, piece: Piece) {
        if let Ok(position) = Position::new(file, rank) {
            self.pieces.push((position, piece));
        }
    }

    /// Place a piece on the board, replacing any earlier placement there.
    #[must_use]
    pub fn piece(mut self, position: Position, piece: Piece) -> Self {
        self.pieces.retain(|(pos, _)| *pos != position);
        self.pieces.push((position, piece));
        self
    }

    /// Place a pawn that advances in `forward`, whatever its color.
    #[must_use]
    pub fn pawn(self, position: Position, color: Color, forward: Forward) -> Self {
        self.piece(position, Piece::pawn(color, forward))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|(pos, _)| *pos != position);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (position, piece) in self.pieces {
            board.set_piece(position, piece);
        }
        board.set_bottom_color(self.bottom_color);
        board
    }
}
