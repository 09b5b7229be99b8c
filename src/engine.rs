//! Heuristic move advisor for the automated player
//!
//! Every empty cell near the existing marks is scored twice: once as an
//! attacking move for the advisor's own mark and once as a block against
//! the opponent. The composite favours attack by a fixed factor, and the
//! final choice is drawn at random from the best few candidates so play
//! stays near-optimal without being fully predictable.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Mark, MoveAdvisor, Pos};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::new();
//! board.place(Pos::new(0, 0), Mark::First).unwrap();
//!
//! let advisor = MoveAdvisor::new(Mark::Second);
//! let mut rng = StdRng::seed_from_u64(7);
//! let pos = advisor.propose(&board, &mut rng);
//! assert!(board.is_empty(pos));
//! ```

use rand::Rng;
use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::eval::line_strength;

/// Weight applied to the advisor's own line strength
pub const OFFENSE_WEIGHT: f64 = 1.2;

/// Chebyshev radius around existing marks that bounds the search
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Number of best candidates the final pick is drawn from
pub const TOP_CANDIDATES: usize = 3;

/// A scored empty cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub pos: Pos,
    /// Line strength if the advisor plays here
    pub offensive: u32,
    /// Line strength if the opponent plays here
    pub defensive: u32,
    /// `offensive * OFFENSE_WEIGHT + defensive`
    pub score: f64,
}

impl Candidate {
    fn evaluate(board: &Board, pos: Pos, mark: Mark) -> Self {
        let offensive = line_strength(board, pos, mark);
        let defensive = line_strength(board, pos, mark.opponent());
        Self {
            pos,
            offensive,
            defensive,
            score: f64::from(offensive) * OFFENSE_WEIGHT + f64::from(defensive),
        }
    }
}

/// Proposes moves for one side.
///
/// Holds no state besides the mark it plays; the same advisor can be
/// queried for any board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAdvisor {
    mark: Mark,
}

impl Default for MoveAdvisor {
    fn default() -> Self {
        Self::new(Mark::Second)
    }
}

impl MoveAdvisor {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    #[inline]
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Score every empty cell within reach of the existing marks, best first.
    ///
    /// Cells are taken column by column (x, then y) from the rings of
    /// radius `NEIGHBOR_RADIUS` around each mark; the sort is stable so
    /// equal scores keep that order.
    pub fn candidates(&self, board: &Board) -> Vec<Candidate> {
        let mut candidates: Vec<Candidate> = board
            .empty_neighbors(NEIGHBOR_RADIUS)
            .into_iter()
            .map(|pos| Candidate::evaluate(board, pos, self.mark))
            .collect();

        candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
        candidates
    }

    /// Pick the next placement.
    ///
    /// Chooses uniformly among the top `TOP_CANDIDATES`. An empty board
    /// gets the origin without scoring.
    pub fn propose<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Pos {
        if board.is_board_empty() {
            return Pos::ORIGIN;
        }

        let candidates = self.candidates(board);
        if candidates.is_empty() {
            return Pos::ORIGIN;
        }

        let top = &candidates[..candidates.len().min(TOP_CANDIDATES)];
        let choice = top[rng.gen_range(0..top.len())];
        debug!(
            mark = %self.mark,
            pos = %choice.pos,
            score = choice.score,
            considered = candidates.len(),
            "advisor move"
        );
        choice.pos
    }
}
