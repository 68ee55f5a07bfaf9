//! Destination lists produced by move generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::position::Position;

/// Destinations for a single piece, split into quiet moves and captures.
///
/// Recomputed per query and never stored on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSet {
    /// Destinations onto empty cells
    pub moves: Vec<Position>,
    /// Destinations holding an opposing piece
    pub captures: Vec<Position>,
}

impl MoveSet {
    #[must_use]
    pub fn new() -> Self {
        MoveSet::default()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len() + self.captures.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }

    /// True if `to` is either a move or a capture destination.
    #[must_use]
    pub fn contains(&self, to: Position) -> bool {
        self.moves.contains(&to) || self.captures.contains(&to)
    }

    #[must_use]
    pub fn is_capture(&self, to: Position) -> bool {
        self.captures.contains(&to)
    }

    /// Moves first, then captures.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.moves.iter().chain(self.captures.iter()).copied()
    }

    /// Keep only destinations accepted by `keep`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(Position) -> bool,
    {
        self.moves.retain(|&to| keep(to));
        self.captures.retain(|&to| keep(to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_yields_moves_before_captures() {
        let set = MoveSet {
            moves: vec![Position(1, 1), Position(2, 2)],
            captures: vec![Position(3, 3)],
        };
        let all: Vec<Position> = set.iter().collect();
        assert_eq!(all, vec![Position(1, 1), Position(2, 2), Position(3, 3)]);
        assert_eq!(set.len(), 3);
        assert!(set.is_capture(Position(3, 3)));
        assert!(!set.is_capture(Position(1, 1)));
    }

    #[test]
    fn test_retain_filters_both_lists() {
        let mut set = MoveSet {
            moves: vec![Position(0, 1), Position(0, 2)],
            captures: vec![Position(1, 1)],
        };
        set.retain(|to| to.x() == 0);
        assert_eq!(set.moves.len(), 2);
        assert!(set.captures.is_empty());
        set.retain(|_| false);
        assert!(set.is_empty());
    }
}
