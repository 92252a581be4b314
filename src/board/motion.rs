//! Movement primitives.
//!
//! Every candidate square the generator looks at comes out of [`straight`] or
//! [`diagonal`]. Both are pure and return `None` instead of leaving the board.

use super::types::{Axis, Position, BOARD_SIZE};

#[inline]
fn offset(coord: u8, delta: i8) -> Option<u8> {
    coord
        .checked_add_signed(delta)
        .filter(|&moved| moved < BOARD_SIZE)
}

/// Move `delta` squares along `axis`, keeping the other coordinate.
#[must_use]
pub fn straight(pos: Position, delta: i8, axis: Axis) -> Option<Position> {
    let (file, rank) = match axis {
        Axis::File => (offset(pos.file(), delta)?, pos.rank()),
        Axis::Rank => (pos.file(), offset(pos.rank(), delta)?),
    };
    Position::new(file, rank).ok()
}

/// File step first, then rank step from the intermediate square.
#[must_use]
pub fn diagonal(pos: Position, delta_rank: i8, delta_file: i8) -> Option<Position> {
    straight(pos, delta_file, Axis::File).and_then(|p| straight(p, delta_rank, Axis::Rank))
}

/// One step of a ray or a king move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Straight(i8, Axis),
    /// (delta rank, delta file)
    Diagonal(i8, i8),
}

impl Step {
    #[inline]
    pub(crate) fn apply(self, pos: Position) -> Option<Position> {
        match self {
            Step::Straight(delta, axis) => straight(pos, delta, axis),
            Step::Diagonal(delta_rank, delta_file) => diagonal(pos, delta_rank, delta_file),
        }
    }
}

pub(crate) const ROOK_STEPS: [Step; 4] = [
    Step::Straight(1, Axis::File),
    Step::Straight(-1, Axis::File),
    Step::Straight(1, Axis::Rank),
    Step::Straight(-1, Axis::Rank),
];

pub(crate) const BISHOP_STEPS: [Step; 4] = [
    Step::Diagonal(1, 1),
    Step::Diagonal(1, -1),
    Step::Diagonal(-1, 1),
    Step::Diagonal(-1, -1),
];

/// Rook directions followed by bishop directions. Also the king's eight neighbours.
pub(crate) const QUEEN_STEPS: [Step; 8] = [
    ROOK_STEPS[0],
    ROOK_STEPS[1],
    ROOK_STEPS[2],
    ROOK_STEPS[3],
    BISHOP_STEPS[0],
    BISHOP_STEPS[1],
    BISHOP_STEPS[2],
    BISHOP_STEPS[3],
];

/// Long leg of a knight jump; the short leg is ±1 on the perpendicular axis.
pub(crate) const KNIGHT_LEGS: [(i8, Axis); 4] = [
    (2, Axis::File),
    (-2, Axis::File),
    (2, Axis::Rank),
    (-2, Axis::Rank),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_straight_moves_one_axis() {
        assert_eq!(straight(sq("e4"), 2, Axis::File), Some(sq("g4")));
        assert_eq!(straight(sq("e4"), -3, Axis::Rank), Some(sq("e1")));
    }

    #[test]
    fn test_straight_off_board_is_none() {
        assert_eq!(straight(sq("a1"), -1, Axis::File), None);
        assert_eq!(straight(sq("h8"), 1, Axis::Rank), None);
        assert_eq!(straight(sq("g2"), 2, Axis::File), None);
        assert_eq!(straight(sq("b7"), i8::MAX, Axis::Rank), None);
        assert_eq!(straight(sq("b7"), i8::MIN, Axis::Rank), None);
    }

    #[test]
    fn test_diagonal_composes_both_axes() {
        assert_eq!(diagonal(sq("d4"), 1, 1), Some(sq("e5")));
        assert_eq!(diagonal(sq("d4"), -1, 1), Some(sq("e3")));
        assert_eq!(diagonal(sq("d4"), 2, -3), Some(sq("a6")));
    }

    #[test]
    fn test_diagonal_fails_if_either_leg_fails() {
        assert_eq!(diagonal(sq("h4"), 1, 1), None);
        assert_eq!(diagonal(sq("d8"), 1, 1), None);
        assert_eq!(diagonal(sq("a1"), -1, -1), None);
    }

    #[test]
    fn test_queen_steps_cover_all_neighbours() {
        let mut neighbours: Vec<Position> =
            QUEEN_STEPS.iter().filter_map(|s| s.apply(sq("d4"))).collect();
        neighbours.sort();
        let expected: Vec<Position> = ["c3", "d3", "e3", "c4", "e4", "c5", "d5", "e5"]
            .iter()
            .map(|s| sq(s))
            .collect();
        assert_eq!(neighbours, expected);
    }
}
