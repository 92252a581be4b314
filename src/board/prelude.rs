//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_moves::board::prelude::*;
//!
//! let e4: Position = "e4".parse().unwrap();
//! assert_eq!(straight(e4, 1, Axis::Rank).map(|p| p.to_string()), Some("e5".to_string()));
//! ```

pub use super::motion::{diagonal, straight};
pub use super::{
    Axis, Board, BoardBuilder, CaptureRule, Color, Forward, Move, Piece, PieceKind,
    PlacementError, Position, PositionError,
};
