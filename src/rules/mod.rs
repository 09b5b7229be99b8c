//! Game rules for infinite Gomoku
//!
//! Only one rule decides a match: five (or more) in a row.

pub mod win;

// Re-exports for convenient access
pub use win::{check_last_move, detect, line_through, Direction, Line, MAX_STEPS, WIN_LENGTH};
