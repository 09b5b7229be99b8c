//! Line-strength heuristic for a hypothetical placement
//!
//! Scores what a mark would achieve if placed on an empty cell, without
//! touching the board. For each orientation the run through the cell is
//! measured together with the number of open ends, and the best
//! orientation wins.

use crate::board::{Board, Mark, Pos};
use crate::rules::{Direction, MAX_STEPS};

use super::patterns::run_score;

/// Run through a cell along one orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunShape {
    /// Marks in the run, the hypothetical one included
    pub length: usize,
    /// Directions that stopped on an empty cell (0-2)
    pub open_ends: u32,
}

impl RunShape {
    #[inline]
    pub fn score(self) -> u32 {
        run_score(self.length, self.open_ends)
    }
}

/// Walk one way from `pos`, returning (same-mark count, stopped on empty).
///
/// An opposing mark or the step limit closes the end.
fn extend(board: &Board, pos: Pos, dx: i32, dy: i32, mark: Mark) -> (usize, bool) {
    let mut count = 0;
    for i in 1..=MAX_STEPS {
        let Some(p) = pos.offset(dx, dy, i) else {
            return (count, false);
        };
        match board.get(p) {
            None => return (count, true),
            Some(m) if m == mark => count += 1,
            Some(_) => return (count, false),
        }
    }
    (count, false)
}

/// Shape of the run `mark` would form at `pos` along `direction`
pub fn run_shape(board: &Board, pos: Pos, mark: Mark, direction: Direction) -> RunShape {
    let (dx, dy) = direction.delta();
    let (forward, forward_open) = extend(board, pos, dx, dy, mark);
    let (backward, backward_open) = extend(board, pos, -dx, -dy, mark);

    RunShape {
        length: 1 + forward + backward,
        open_ends: u32::from(forward_open) + u32::from(backward_open),
    }
}

/// Strength of placing `mark` at `pos`: best orientation score
#[must_use]
pub fn line_strength(board: &Board, pos: Pos, mark: Mark) -> u32 {
    Direction::ALL
        .iter()
        .map(|&direction| run_shape(board, pos, mark, direction).score())
        .max()
        .unwrap_or(0)
}
