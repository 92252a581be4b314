//! Error types for board construction.

use std::fmt;

/// Error type for building a `Position` from raw coordinates or notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            PositionError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for piece-placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Placement must describe exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// Too many files in a rank (rank is 1-based)
    TooManyFiles { rank: usize, files: usize },
    /// Too few files in a rank (rank is 1-based)
    TooFewFiles { rank: usize, files: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            PlacementError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
