//! Core board types.
//!
//! - `Position` and `Axis` - board coordinates
//! - `Color`, `Forward`, `PieceKind` and `Piece` - what stands on a square
//! - `Move` - descriptive start/piece/end record

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Forward, Piece, PieceKind};
pub use square::{Axis, Position, BOARD_SIZE};
