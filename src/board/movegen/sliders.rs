use super::super::motion::Step;
use super::super::{Board, Piece, Position};
use super::CaptureRule;

impl Piece {
    /// Walk each ray until it leaves the board, meets a friendly piece, or
    /// has just included a capture.
    pub(super) fn cast_rays(&self, from: Position, board: &Board, steps: &[Step]) -> Vec<Position> {
        let mut moves = Vec::new();
        for &step in steps {
            let mut ray = step.apply(from);
            while self.can_move_to(ray, board, CaptureRule::Either) {
                let Some(target) = ray else {
                    break;
                };
                moves.push(target);
                if board.is_occupied(target) {
                    break;
                }
                ray = step.apply(target);
            }
        }
        moves
    }
}
