//! Board structure with move log

use std::collections::{BTreeSet, HashMap};

use super::{Mark, Move, Pos};
use crate::error::GameError;

/// Game board: coordinate-keyed marks plus the ordered move log.
///
/// Cells are write-once. The move log and the map are only changed
/// together through [`Board::place`].
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: HashMap<Pos, Mark>,
    moves: Vec<Move>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a board by replaying a move log
    pub fn from_moves(moves: &[Move]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for mv in moves {
            board.place(mv.pos(), mv.mark)?;
        }
        Ok(board)
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        self.cells.get(&pos).copied()
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.cells.contains_key(&pos)
    }

    /// Place a mark and append it to the move log.
    ///
    /// Fails without touching the board when the cell is taken.
    pub fn place(&mut self, pos: Pos, mark: Mark) -> Result<Move, GameError> {
        if self.cells.contains_key(&pos) {
            return Err(GameError::Occupied { pos });
        }
        self.cells.insert(pos, mark);
        let mv = Move::new(pos, mark);
        self.moves.push(mv);
        Ok(mv)
    }

    /// Moves in placement order
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// All placed cells (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.cells.iter().map(|(&pos, &mark)| (pos, mark))
    }

    /// Total marks on board
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Empty cells within Chebyshev distance `radius` of some mark.
    ///
    /// Ordered by x, then y. Only the rings around placed marks are
    /// visited, never the space between them.
    pub fn empty_neighbors(&self, radius: i32) -> Vec<Pos> {
        let mut found = BTreeSet::new();
        for &pos in self.cells.keys() {
            for dx in -radius..=radius {
                for dy in -radius..=radius {
                    let Some(p) = pos.offset(dx, dy, 1) else {
                        continue;
                    };
                    if self.is_empty(p) {
                        found.insert(p);
                    }
                }
            }
        }
        found.into_iter().collect()
    }
}
