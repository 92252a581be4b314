use super::super::motion::{diagonal, straight};
use super::super::{Axis, Board, Forward, Piece, Position};
use super::CaptureRule;

impl Piece {
    pub(super) fn pawn_moves(
        &self,
        from: Position,
        forward: Forward,
        board: &Board,
    ) -> Vec<Position> {
        let mut moves = Vec::with_capacity(4);
        let step = forward.delta();

        let one = straight(from, step, Axis::Rank);
        if self.can_move_to(one, board, CaptureRule::Forbid) {
            moves.extend(one);

            if from.rank() == forward.start_rank() {
                let two = straight(from, 2 * step, Axis::Rank);
                if self.can_move_to(two, board, CaptureRule::Forbid) {
                    moves.extend(two);
                }
            }
        }

        for delta_file in [-1, 1] {
            let capture = diagonal(from, step, delta_file);
            if self.can_move_to(capture, board, CaptureRule::Force) {
                moves.extend(capture);
            }
        }

        // En passant belongs to the move-application layer, which knows the last move.
        moves
    }
}
