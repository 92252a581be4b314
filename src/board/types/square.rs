//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Number of files and ranks on the board.
pub const BOARD_SIZE: u8 = 8;

/// Which coordinate a straight step changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    File,
    Rank,
}

impl Axis {
    /// The other axis.
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Axis {
        match self {
            Axis::File => Axis::Rank,
            Axis::Rank => Axis::File,
        }
    }
}

/// A square on the board, identified by file (0 = a) and rank (0 = rank 1).
///
/// Both coordinates are always in `0..8`; the only way to build a `Position`
/// is through a bounds-checked constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Create a position, rejecting coordinates outside the board.
    pub fn new(file: u8, rank: u8) -> Result<Self, PositionError> {
        if file >= BOARD_SIZE {
            return Err(PositionError::FileOutOfBounds { file });
        }
        if rank >= BOARD_SIZE {
            return Err(PositionError::RankOutOfBounds { rank });
        }
        Ok(Position { file, rank })
    }

    /// File index (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank index (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Square index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_index(idx: usize) -> Self {
        debug_assert!(idx < 64);
        Position {
            file: (idx % BOARD_SIZE as usize) as u8,
            rank: (idx / BOARD_SIZE as usize) as u8,
        }
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        Position::new(file, rank)
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> Self {
        (pos.file, pos.rank)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(invalid()),
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return Err(invalid()),
        };

        Position::new(file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            Position::new(8, 0),
            Err(PositionError::FileOutOfBounds { file: 8 })
        );
        assert_eq!(
            Position::new(0, 9),
            Err(PositionError::RankOutOfBounds { rank: 9 })
        );
        assert!(Position::new(7, 7).is_ok());
    }

    #[test]
    fn test_display_is_algebraic() {
        assert_eq!(Position::new(0, 0).unwrap().to_string(), "a1");
        assert_eq!(Position::new(4, 3).unwrap().to_string(), "e4");
        assert_eq!(Position::new(7, 7).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        for bad in ["", "e", "i1", "a0", "a9", "e44", "E4"] {
            assert!(bad.parse::<Position>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_all_squares_in_index_order() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "a1");
        assert_eq!(all[63].to_string(), "h8");
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        for (idx, pos) in all.iter().enumerate() {
            assert_eq!(pos.index(), idx);
        }
    }

    #[test]
    fn test_axis_perpendicular() {
        assert_eq!(Axis::File.perpendicular(), Axis::Rank);
        assert_eq!(Axis::Rank.perpendicular(), Axis::File);
    }
}
