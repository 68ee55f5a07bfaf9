//! Terminal-state detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Position};

/// Outcome of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    /// Play continues (the side to move may still be in check)
    #[default]
    Active,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// True if any piece of `color` has a move or capture that keeps its king
    /// safe. Scans pieces row-major and stops at the first legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color).any(|(from, piece)| {
            self.moves_for(from, piece)
                .iter()
                .any(|to| self.is_safe(from, to, piece))
        })
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Status of the position with `color` to move.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        if self.has_any_legal_move(color) {
            GameStatus::Active
        } else if self.is_in_check(color) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    /// Every legal `(from, to)` pair for `color`, row-major by source cell.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color) -> Vec<(Position, Position)> {
        self.pieces_of(color)
            .flat_map(|(from, piece)| {
                self.moves_for(from, piece)
                    .iter()
                    .filter(|&to| self.is_safe(from, to, piece))
                    .map(|to| (from, to))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
