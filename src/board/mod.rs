//! Board representation and pseudo-legal move generation.
//!
//! A [`Board`] is an 8×8 grid of optional [`Piece`]s. Asking a piece for its
//! moves yields the target squares it could reach: board edges, blockers and
//! capture rules are honoured, and kings avoid attacked squares. Turn order,
//! castling, en passant and promotion are left to the layers that apply moves.
//!
//! # Example
//! ```
//! use chess_moves::board::{Board, Color};
//!
//! let board = Board::standard_seeded(42);
//! let moves = board.moves_for(Color::White);
//! assert_eq!(moves.len(), 20);
//! ```

mod builder;
mod error;
mod fen;
pub mod motion;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PlacementError, PositionError};
pub use movegen::CaptureRule;
pub use state::Board;
pub use types::{Axis, Color, Forward, Move, Piece, PieceKind, Position, BOARD_SIZE};
