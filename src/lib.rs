pub mod board;
pub mod sync;

pub use board::{Board, Color, Move, Piece, Position};
pub use sync::SharedBoard;
