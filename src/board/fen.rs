use std::str::FromStr;

use super::error::PlacementError;
use super::{Board, Color, Piece, PieceKind, Position, BOARD_SIZE};

impl Board {
    /// Parse the piece-placement field of a FEN string (rank 8 first).
    ///
    /// Anything after the first whitespace-separated field is ignored, so a
    /// full FEN record is accepted too. Pawns get the conventional direction:
    /// white advances towards rank 8, black towards rank 1.
    pub fn try_from_placement(placement: &str) -> Result<Self, PlacementError> {
        let field = placement.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();
        if field.is_empty() || rows.len() != BOARD_SIZE as usize {
            return Err(PlacementError::WrongRankCount {
                found: if field.is_empty() { 0 } else { rows.len() },
            });
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank_label = BOARD_SIZE as usize - row_idx;
            let rank = (rank_label - 1) as u8;
            let mut files = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    files += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(PlacementError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let position = u8::try_from(files)
                    .ok()
                    .and_then(|file| Position::new(file, rank).ok())
                    .ok_or(PlacementError::TooManyFiles {
                        rank: rank_label,
                        files: files + 1,
                    })?;
                board.set_piece(position, Piece::new(kind, color));
                files += 1;
            }
            match files.cmp(&(BOARD_SIZE as usize)) {
                std::cmp::Ordering::Greater => {
                    return Err(PlacementError::TooManyFiles {
                        rank: rank_label,
                        files,
                    })
                }
                std::cmp::Ordering::Less => {
                    return Err(PlacementError::TooFewFiles {
                        rank: rank_label,
                        files,
                    })
                }
                std::cmp::Ordering::Equal => {}
            }
        }
        Ok(board)
    }

    /// Parse a piece-placement string.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_placement` for fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid piece placement")
    }

    /// Render the piece-placement field (rank 8 first).
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE as usize);
        for rank in (0..BOARD_SIZE).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..BOARD_SIZE {
                let occupant = Position::new(file, rank)
                    .ok()
                    .and_then(|pos| self.piece_at(pos));
                if let Some(piece) = occupant {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_placement(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Forward;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_start_placement_matches_white_bottom_setup() {
        let parsed = Board::from_placement(START);
        let built = crate::board::BoardBuilder::starting_position(Color::White).build();
        assert_eq!(parsed.to_placement(), built.to_placement());
        assert_eq!(parsed.pieces().collect::<Vec<_>>(), built.pieces().collect::<Vec<_>>());
    }

    #[test]
    fn test_full_fen_record_accepted() {
        let board: Board = "8/8/8/3p4/4N3/8/8/8 w - - 0 1".parse().unwrap();
        assert_eq!(board.pieces().count(), 2);
        assert_eq!(
            board.piece_at("d5".parse().unwrap()),
            Some(Piece::pawn(Color::Black, Forward::Down))
        );
        assert_eq!(board.to_placement(), "8/8/8/3p4/4N3/8/8/8");
    }

    #[test]
    fn test_rejects_bad_placements() {
        assert_eq!(
            Board::try_from_placement(""),
            Err(PlacementError::WrongRankCount { found: 0 })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8"),
            Err(PlacementError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/7x"),
            Err(PlacementError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/8K"),
            Err(PlacementError::TooManyFiles { rank: 1, files: 9 })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/44K"),
            Err(PlacementError::TooManyFiles { rank: 1, files: 9 })
        );
        assert_eq!(
            Board::try_from_placement("7/8/8/8/8/8/8/8"),
            Err(PlacementError::TooFewFiles { rank: 8, files: 7 })
        );
    }
}
