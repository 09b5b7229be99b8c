//! Win condition checking for infinite Gomoku
//!
//! A move wins when it sits on an unbroken run of five or more marks of
//! its owner along a row, column or diagonal. Overlines count.

use tracing::debug;

use crate::board::{Board, Mark, Move, Pos};

/// Marks in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Farthest step taken from the placed mark in each direction
pub const MAX_STEPS: i32 = 4;

/// Line orientations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    /// All orientations in check order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dx, dy)` in the positive sense
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A winning run: same-mark cells, adjacent and collinear, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub mark: Mark,
    pub direction: Direction,
    pub cells: Vec<Pos>,
}

impl Line {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Collect consecutive `mark` cells stepping away from `from`.
///
/// Stops at the first cell that is empty, holds the other mark, or lies
/// beyond `MAX_STEPS`.
fn walk(board: &Board, from: Pos, dx: i32, dy: i32, mark: Mark) -> Vec<Pos> {
    let mut run = Vec::with_capacity(MAX_STEPS as usize);
    for i in 1..=MAX_STEPS {
        let Some(p) = from.offset(dx, dy, i) else {
            break;
        };
        if board.get(p) == Some(mark) {
            run.push(p);
        } else {
            break;
        }
    }
    run
}

/// Run through `pos` along `direction`, ordered from the negative end
pub fn line_through(board: &Board, pos: Pos, mark: Mark, direction: Direction) -> Vec<Pos> {
    let (dx, dy) = direction.delta();

    let mut line = walk(board, pos, -dx, -dy, mark);
    line.reverse();
    line.push(pos);
    line.extend(walk(board, pos, dx, dy, mark));
    line
}

/// Decide whether `last_move` completed five in a row.
///
/// Orientations are tried horizontal, vertical, diagonal, anti-diagonal;
/// the first winning one is returned.
pub fn detect(board: &Board, last_move: Move) -> Option<Line> {
    let pos = last_move.pos();
    let mark = last_move.mark;

    for direction in Direction::ALL {
        let cells = line_through(board, pos, mark, direction);
        if cells.len() >= WIN_LENGTH {
            debug!(%pos, %mark, ?direction, len = cells.len(), "five in a row");
            return Some(Line {
                mark,
                direction,
                cells,
            });
        }
    }
    None
}

/// Check the most recent move on the board, if any
pub fn check_last_move(board: &Board) -> Option<Line> {
    board.last_move().and_then(|mv| detect(board, mv))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[((i32, i32), Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in marks {
            board.place(pos.into(), mark).unwrap();
        }
        board
    }

    fn positions(cells: &[(i32, i32)]) -> Vec<Pos> {
        cells.iter().map(|&c| c.into()).collect()
    }

    #[test]
    fn test_single_mark_no_win() {
        let board = board_with(&[((0, 0), Mark::First)]);
        assert_eq!(detect(&board, Move::new(Pos::new(0, 0), Mark::First)), None);
    }

    #[test]
    fn test_five_horizontal() {
        let marks: Vec<_> = (0..5).map(|x| ((x, 3), Mark::First)).collect();
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(4, 3), Mark::First)).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.mark, Mark::First);
        assert_eq!(line.cells, positions(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn test_five_vertical() {
        let marks: Vec<_> = (-2..3).map(|y| ((7, y), Mark::Second)).collect();
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(7, 0), Mark::Second)).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.cells, positions(&[(7, -2), (7, -1), (7, 0), (7, 1), (7, 2)]));
    }

    #[test]
    fn test_five_diagonal() {
        let marks: Vec<_> = (0..5).map(|i| ((i, i), Mark::First)).collect();
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(0, 0), Mark::First)).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
        assert_eq!(line.cells, positions(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]));
    }

    #[test]
    fn test_five_anti_diagonal() {
        let marks: Vec<_> = (0..5).map(|i| ((i, -i), Mark::Second)).collect();
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(2, -2), Mark::Second)).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        // Ordered from the negative end of (1, -1): highest y first
        assert_eq!(line.cells, positions(&[(0, 0), (1, -1), (2, -2), (3, -3), (4, -4)]));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let marks: Vec<_> = (0..4).map(|x| ((x, 0), Mark::First)).collect();
        let board = board_with(&marks);
        assert_eq!(detect(&board, Move::new(Pos::new(3, 0), Mark::First)), None);
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let marks: Vec<_> = (0..6).map(|x| ((x, 0), Mark::First)).collect();
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(5, 0), Mark::First)).unwrap();
        assert_eq!(line.len(), 5, "walk is capped at four steps each way");

        let line = detect(&board, Move::new(Pos::new(2, 0), Mark::First)).unwrap();
        assert_eq!(line.len(), 6);
    }

    #[test]
    fn test_gap_breaks_run() {
        let board = board_with(&[
            ((0, 0), Mark::First),
            ((1, 0), Mark::First),
            ((2, 0), Mark::First),
            ((4, 0), Mark::First),
            ((5, 0), Mark::First),
        ]);
        assert_eq!(detect(&board, Move::new(Pos::new(5, 0), Mark::First)), None);
        assert_eq!(
            line_through(&board, Pos::new(5, 0), Mark::First, Direction::Horizontal),
            positions(&[(4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_opposing_mark_breaks_run() {
        let board = board_with(&[
            ((0, 0), Mark::First),
            ((1, 0), Mark::First),
            ((2, 0), Mark::Second),
            ((3, 0), Mark::First),
            ((4, 0), Mark::First),
            ((5, 0), Mark::First),
        ]);
        assert_eq!(detect(&board, Move::new(Pos::new(5, 0), Mark::First)), None);
    }

    #[test]
    fn test_line_excludes_cells_beyond_gap() {
        let board = board_with(&[
            ((-2, 0), Mark::First),
            ((0, 0), Mark::First),
            ((1, 0), Mark::First),
            ((2, 0), Mark::First),
            ((3, 0), Mark::First),
            ((4, 0), Mark::First),
        ]);
        let line = detect(&board, Move::new(Pos::new(0, 0), Mark::First)).unwrap();
        assert!(!line.contains(Pos::new(-2, 0)));
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_other_mark_line_ignored() {
        let marks: Vec<_> = (0..5).map(|x| ((x, 0), Mark::Second)).collect();
        let mut board = board_with(&marks);
        board.place(Pos::new(0, 1), Mark::First).unwrap();
        assert_eq!(detect(&board, Move::new(Pos::new(0, 1), Mark::First)), None);
    }

    #[test]
    fn test_horizontal_reported_first() {
        // (2, 2) completes both a row and a column
        let mut marks: Vec<_> = (0..5).map(|x| ((x, 2), Mark::First)).collect();
        marks.extend([0, 1, 3, 4].iter().map(|&y| ((2, y), Mark::First)));
        let board = board_with(&marks);

        let line = detect(&board, Move::new(Pos::new(2, 2), Mark::First)).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let marks: Vec<_> = (0..5).map(|y| ((0, y), Mark::First)).collect();
        let board = board_with(&marks);
        let mv = Move::new(Pos::new(0, 4), Mark::First);

        let first = detect(&board, mv);
        let second = detect(&board, mv);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(board.len(), 5);
    }

    #[test]
    fn test_missing_last_move_counts_only_present() {
        // Precondition broken: last move not on board. Walks still only
        // count real entries.
        let board = board_with(&[((1, 0), Mark::First), ((2, 0), Mark::First)]);
        assert_eq!(detect(&board, Move::new(Pos::new(0, 0), Mark::First)), None);
    }

    #[test]
    fn test_far_from_origin() {
        let base = i32::MAX - 4;
        let marks: Vec<_> = (0..5).map(|i| ((base + i, 0), Mark::First)).collect();
        let board = board_with(&marks);
        assert!(detect(&board, Move::new(Pos::new(i32::MAX, 0), Mark::First)).is_some());
    }

    #[test]
    fn test_end_to_end_alternating_match() {
        let order = [
            ((0, 0), Mark::First),
            ((5, 5), Mark::Second),
            ((1, 0), Mark::First),
            ((5, 6), Mark::Second),
            ((2, 0), Mark::First),
            ((5, 7), Mark::Second),
            ((3, 0), Mark::First),
            ((5, 8), Mark::Second),
            ((4, 0), Mark::First),
        ];
        let mut board = Board::new();
        for (i, &(pos, mark)) in order.iter().enumerate() {
            board.place(pos.into(), mark).unwrap();
            let result = check_last_move(&board);
            if i + 1 < order.len() {
                assert_eq!(result, None, "no win expected after move {}", i + 1);
            } else {
                let line = result.unwrap();
                assert_eq!(line.mark, Mark::First);
                assert_eq!(line.cells, positions(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
            }
        }
    }
}
