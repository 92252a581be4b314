use super::super::motion::{
    diagonal, straight, Step, BISHOP_STEPS, KNIGHT_LEGS, QUEEN_STEPS, ROOK_STEPS,
};
use super::super::{Board, Color, Piece, PieceKind, Position};
use super::CaptureRule;

impl Piece {
    pub(super) fn king_moves(&self, from: Position, board: &Board) -> Vec<Position> {
        let color = self.color();

        // Attacks are judged with the king lifted off its square so it cannot
        // retreat along the line of a slider that is checking it.
        let mut lifted = board.clone();
        if lifted.piece_at(from) == Some(*self) {
            lifted.remove_piece(from);
        }

        let mut moves = Vec::with_capacity(8);
        for step in QUEEN_STEPS {
            let candidate = step.apply(from);
            if !self.can_move_to(candidate, board, CaptureRule::Either) {
                continue;
            }
            let Some(target) = candidate else {
                continue;
            };
            if lifted.is_square_safe(target, color) {
                moves.push(target);
                continue;
            }
            #[cfg(feature = "logging")]
            log::trace!("{} on {}: {} is attacked", self, from, target);
        }
        moves
    }
}

impl Board {
    /// Whether `position` is free of attack by the side opposing `side`.
    ///
    /// A square holding one of `side`'s own pieces still counts as attacked
    /// when an enemy covers it, which keeps a king from capturing a defended
    /// piece.
    #[must_use]
    pub fn is_square_safe(&self, position: Position, side: Color) -> bool {
        !self.is_square_attacked(position, side.opponent())
    }

    /// Whether any piece of `attacker` covers `square`.
    ///
    /// Scans outwards from the target: knight jumps, king neighbours, pawn
    /// diagonals (honouring each pawn's own direction) and the first piece
    /// met along every straight and diagonal ray. Pawn pushes never attack.
    #[must_use]
    pub fn is_square_attacked(&self, square: Position, attacker: Color) -> bool {
        for (long, axis) in KNIGHT_LEGS {
            let Some(pre_move) = straight(square, long, axis) else {
                continue;
            };
            for short in [-1, 1] {
                let jump = straight(pre_move, short, axis.perpendicular());
                if self.holds(jump, attacker, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        if QUEEN_STEPS
            .iter()
            .any(|step| self.holds(step.apply(square), attacker, &[PieceKind::King]))
        {
            return true;
        }

        for delta_rank in [-1, 1] {
            for delta_file in [-1, 1] {
                let pawn = diagonal(square, delta_rank, delta_file).and_then(|p| self.piece_at(p));
                if let Some(Piece::Pawn { color, forward }) = pawn {
                    // The pawn sits at square + delta_rank and attacks square.
                    if color == attacker && forward.delta() == -delta_rank {
                        return true;
                    }
                }
            }
        }

        let straight_sliders = [PieceKind::Rook, PieceKind::Queen];
        if ROOK_STEPS
            .iter()
            .any(|&step| self.holds(self.first_occupied(square, step), attacker, &straight_sliders))
        {
            return true;
        }

        let diagonal_sliders = [PieceKind::Bishop, PieceKind::Queen];
        BISHOP_STEPS
            .iter()
            .any(|&step| self.holds(self.first_occupied(square, step), attacker, &diagonal_sliders))
    }

    fn holds(&self, pos: Option<Position>, color: Color, kinds: &[PieceKind]) -> bool {
        pos.and_then(|p| self.piece_at(p))
            .is_some_and(|piece| piece.color() == color && kinds.contains(&piece.kind()))
    }

    fn first_occupied(&self, from: Position, step: Step) -> Option<Position> {
        let mut current = from;
        loop {
            current = step.apply(current)?;
            if self.is_occupied(current) {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Forward;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_pawn_attacks_follow_its_direction() {
        let mut board = Board::empty();
        board.set_piece(sq("d4"), Piece::pawn(Color::Black, Forward::Up));
        assert!(board.is_square_attacked(sq("c5"), Color::Black));
        assert!(board.is_square_attacked(sq("e5"), Color::Black));
        assert!(!board.is_square_attacked(sq("c3"), Color::Black));
        assert!(!board.is_square_attacked(sq("d5"), Color::Black));
    }

    #[test]
    fn test_slider_attack_blocked() {
        let mut board = Board::empty();
        board.set_piece(sq("a1"), Piece::Rook(Color::White));
        assert!(board.is_square_attacked(sq("a8"), Color::White));
        board.set_piece(sq("a4"), Piece::Knight(Color::Black));
        assert!(board.is_square_attacked(sq("a4"), Color::White));
        assert!(!board.is_square_attacked(sq("a8"), Color::White));
    }

    #[test]
    fn test_no_attackers_is_safe() {
        let board = Board::empty();
        for pos in Position::all() {
            assert!(board.is_square_safe(pos, Color::White));
        }
    }
}
