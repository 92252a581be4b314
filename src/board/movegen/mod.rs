mod kings;
mod knights;
mod pawns;
mod sliders;

use super::motion::{BISHOP_STEPS, QUEEN_STEPS, ROOK_STEPS};
use super::{Board, Color, Move, Piece, Position};

/// How a candidate square may be entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaptureRule {
    /// Empty squares and enemy pieces are both fine.
    #[default]
    Either,
    /// Only an enemy piece makes the square reachable (pawn diagonals).
    Force,
    /// Only an empty square is reachable (pawn pushes).
    Forbid,
}

impl Piece {
    /// Pseudo-legal target squares for this piece standing on `from`.
    ///
    /// King targets are additionally filtered by [`Board::is_square_safe`];
    /// nothing else checks whether the mover's own king ends up attacked.
    #[must_use]
    pub fn get_moves(&self, from: Position, board: &Board) -> Vec<Position> {
        let moves = match *self {
            Piece::Pawn { forward, .. } => self.pawn_moves(from, forward, board),
            Piece::Knight(_) => self.knight_moves(from, board),
            Piece::Bishop(_) => self.cast_rays(from, board, &BISHOP_STEPS),
            Piece::Rook(_) => self.cast_rays(from, board, &ROOK_STEPS),
            Piece::Queen(_) => self.cast_rays(from, board, &QUEEN_STEPS),
            Piece::King(_) => self.king_moves(from, board),
        };
        #[cfg(feature = "logging")]
        log::trace!("{} on {}: {} targets", self, from, moves.len());
        moves
    }

    /// Shared legality gate for every candidate square.
    ///
    /// `None` (off the board) is never reachable and neither is a square held
    /// by a piece of the mover's own color.
    #[must_use]
    pub fn can_move_to(
        &self,
        candidate: Option<Position>,
        board: &Board,
        rule: CaptureRule,
    ) -> bool {
        let Some(target) = candidate else {
            return false;
        };
        match board.piece_at(target) {
            None => rule != CaptureRule::Force,
            Some(occupant) => rule != CaptureRule::Forbid && self.is_opponent_of(occupant),
        }
    }
}

impl Board {
    /// Targets of whatever stands on `from`; empty if the square is empty.
    #[must_use]
    pub fn moves_from(&self, from: Position) -> Vec<Position> {
        self.piece_at(from)
            .map(|piece| piece.get_moves(from, self))
            .unwrap_or_default()
    }

    /// Every pseudo-legal move of `color`, ordered by origin square (a1..h8).
    #[must_use]
    pub fn moves_for(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|(from, piece)| {
                piece
                    .get_moves(from, self)
                    .into_iter()
                    .map(move |to| Move::new(from, piece, to))
            })
            .collect()
    }
}
