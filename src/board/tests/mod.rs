//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `pieces.rs` - Per-piece generation rules
//! - `kings.rs` - King safety filtering
//! - `setup.rs` - Whole-board generation on standard setups
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Piece, Position};

pub(super) fn sq(s: &str) -> Position {
    s.parse().unwrap()
}

pub(super) fn squares(list: &[&str]) -> Vec<Position> {
    let mut out: Vec<Position> = list.iter().map(|s| sq(s)).collect();
    out.sort();
    out
}

pub(super) fn sorted_moves(board: &Board, from: &str) -> Vec<Position> {
    let mut moves = board.moves_from(sq(from));
    moves.sort();
    moves
}

pub(super) fn board_with(pieces: &[(&str, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(s, piece) in pieces {
        board.set_piece(sq(s), piece);
    }
    board
}
