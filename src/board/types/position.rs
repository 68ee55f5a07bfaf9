//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Board edge length.
pub const BOARD_SIZE: usize = 8;

/// A cell on the board, represented as (x, y).
///
/// `x` is the column (0 = the "a" file), `y` is the row with 0 at Black's
/// back rank and 7 at White's. Algebraic names therefore map `a8` to
/// `(0, 0)` and `h1` to `(7, 7)`.
///
/// Serialized as an `{ "x": .., "y": .. }` object; off-board coordinates are
/// rejected when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "Coords", try_from = "Coords"))]
pub struct Position(pub usize, pub usize); // (x, y)

#[cfg(feature = "serde")]
#[derive(Clone, Copy, Serialize, Deserialize)]
struct Coords {
    x: usize,
    y: usize,
}

#[cfg(feature = "serde")]
impl From<Position> for Coords {
    fn from(pos: Position) -> Self {
        Coords { x: pos.0, y: pos.1 }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Coords> for Position {
    type Error = PositionError;

    fn try_from(Coords { x, y }: Coords) -> Result<Self, Self::Error> {
        Position::try_from((x, y))
    }
}

impl Position {
    /// Create a new position with bounds checking
    #[must_use]
    pub fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Position(x, y))
        } else {
            None
        }
    }

    /// Column (0-7, 0 = file a)
    #[inline]
    #[must_use]
    pub const fn x(self) -> usize {
        self.0
    }

    /// Row (0-7, 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn y(self) -> usize {
        self.1
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < BOARD_SIZE && self.1 < BOARD_SIZE
    }

    /// Step by `(dx, dy)`, returning `None` when the result leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let x = self.0.checked_add_signed(dx)?;
        let y = self.1.checked_add_signed(dy)?;
        Position::new(x, y)
    }

    /// Iterate over all 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.0, self.1);
        }
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, BOARD_SIZE - self.1)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = PositionError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(x, y).ok_or(PositionError::OutOfBounds { x, y })
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let x = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let y = match bytes[1] {
            b @ b'1'..=b'8' => BOARD_SIZE - (b - b'0') as usize,
            _ => return Err(invalid()),
        };

        Ok(Position(x, y))
    }
}
