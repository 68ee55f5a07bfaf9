//! Piece-placement notation.
//!
//! Uses the placement field of FEN: rows separated by `/`, digits for runs of
//! empty cells, uppercase for White. The first row written is row 0 (Black's
//! back rank), which matches both FEN and this crate's orientation.

use std::fmt;

use super::error::LayoutError;
use super::{Board, Color, Piece, Position, BOARD_SIZE};

impl Board {
    /// Parse a board from a placement string.
    pub fn try_from_placement(placement: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    x += run as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    if x >= BOARD_SIZE {
                        return Err(LayoutError::RowTooLong { row: y, cells: x + 1 });
                    }
                    board.set_piece(Position(x, y), piece);
                    x += 1;
                }
            }
            if x > BOARD_SIZE {
                return Err(LayoutError::RowTooLong { row: y, cells: x });
            }
            if x < BOARD_SIZE {
                return Err(LayoutError::RowTooShort { row: y, cells: x });
            }
        }

        Ok(board)
    }

    /// Parse a board from a placement string.
    ///
    /// # Panics
    /// Panics if the placement is invalid. Use `try_from_placement` for
    /// fallible parsing.
    #[must_use]
    pub fn from_placement(placement: &str) -> Self {
        Self::try_from_placement(placement).expect("Invalid placement string")
    }

    /// Parse the first two FEN fields (placement and side to move). Any
    /// further fields are ignored; a missing side defaults to White.
    pub fn try_from_fen(fen: &str) -> Result<(Self, Color), LayoutError> {
        let mut parts = fen.split_whitespace();
        let board = Self::try_from_placement(parts.next().unwrap_or_default())?;
        let turn = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(LayoutError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };
        Ok((board, turn))
    }

    /// Convert the board to a placement string.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(BOARD_SIZE);
        for row in &self.squares {
            let mut out = String::new();
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE - y)?;
            for cell in row {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_start_placement_matches_new() {
        assert_eq!(Board::from_placement(START), Board::new());
        assert_eq!(Board::new().to_placement(), START);
    }

    #[test]
    fn test_placement_orientation() {
        let board = Board::from_placement("k7/8/8/8/8/8/8/7K");
        assert_eq!(board.piece_at(Position(0, 0)), Some(Piece::black(PieceKind::King)));
        assert_eq!(board.piece_at(Position(7, 7)), Some(Piece::white(PieceKind::King)));
    }

    #[test]
    fn test_fen_side_to_move() {
        let (_, turn) = Board::try_from_fen(&format!("{START} b - - 0 1")).unwrap();
        assert_eq!(turn, Color::Black);
        let (_, turn) = Board::try_from_fen(START).unwrap();
        assert_eq!(turn, Color::White);
        assert_eq!(
            Board::try_from_fen(&format!("{START} x")),
            Err(LayoutError::InvalidSideToMove { found: "x".to_string() })
        );
    }

    #[test]
    fn test_placement_errors() {
        assert_eq!(
            Board::try_from_placement("8/8/8"),
            Err(LayoutError::WrongRowCount { found: 3 })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/7z"),
            Err(LayoutError::InvalidPiece { char: 'z' })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/8K"),
            Err(LayoutError::RowTooLong { row: 7, cells: 9 })
        );
        assert_eq!(
            Board::try_from_placement("8/8/8/8/8/8/8/7"),
            Err(LayoutError::RowTooShort { row: 7, cells: 7 })
        );
    }

    #[test]
    fn test_display_draws_ranks_top_down() {
        let text = Board::new().to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("8 "));
        assert!(first.ends_with("r n b q k b n r"));
        assert!(text.ends_with("a b c d e f g h"));
    }
}
