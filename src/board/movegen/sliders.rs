use super::super::{Board, Color, MoveSet, Position, BOARD_SIZE};

/// Rank and file rays: down, up, right, left.
pub(crate) const STRAIGHT: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Diagonal rays: down-right, up-right, down-left, up-left.
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Walk each ray from `from` until the board edge, an occupied cell or
    /// `max_distance` steps.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Position,
        color: Color,
        directions: &[(isize, isize)],
        max_distance: Option<usize>,
        set: &mut MoveSet,
    ) {
        let limit = max_distance.unwrap_or(BOARD_SIZE - 1);
        for &(dx, dy) in directions {
            let mut current = from;
            for _ in 0..limit {
                let Some(next) = current.offset(dx, dy) else {
                    break;
                };
                if !self.push_target(next, color, set) {
                    break;
                }
                current = next;
            }
        }
    }
}
