use super::super::motion::{straight, KNIGHT_LEGS};
use super::super::{Board, Piece, Position};
use super::CaptureRule;

impl Piece {
    pub(super) fn knight_moves(&self, from: Position, board: &Board) -> Vec<Position> {
        let mut moves = Vec::with_capacity(8);
        for (long, axis) in KNIGHT_LEGS {
            let Some(pre_move) = straight(from, long, axis) else {
                continue;
            };
            for short in [-1, 1] {
                let candidate = straight(pre_move, short, axis.perpendicular());
                if self.can_move_to(candidate, board, CaptureRule::Either) {
                    moves.extend(candidate);
                }
            }
        }
        moves
    }
}
