//! Board representation for infinite Gomoku

pub mod board;


use serde::{Deserialize, Serialize};
use std::fmt;

// Re-exports
pub use board::Board;

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first, rendered as X
    #[serde(rename = "X")]
    First,
    /// Moves second, rendered as O
    #[serde(rename = "O")]
    Second,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Cell coordinate on the unbounded grid
///
/// Orders by x, then y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `steps` times along `(dx, dy)`.
    ///
    /// Returns `None` when the result leaves the representable grid.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, steps: i32) -> Option<Pos> {
        let x = self.x.checked_add(dx.checked_mul(steps)?)?;
        let y = self.y.checked_add(dy.checked_mul(steps)?)?;
        Some(Pos { x, y })
    }

    /// Chebyshev (king-move) distance
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Pos::new(x, y)
    }
}

/// One placement in the replay log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "player")]
    pub mark: Mark,
}

impl Move {
    #[inline]
    pub const fn new(pos: Pos, mark: Mark) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            mark,
        }
    }

    #[inline]
    pub const fn pos(self) -> Pos {
        Pos::new(self.x, self.y)
    }
}
