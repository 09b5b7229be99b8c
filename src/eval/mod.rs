//! Move evaluation for the automated player

pub mod heuristic;
pub mod patterns;

pub use heuristic::{line_strength, run_shape, RunShape};
pub use patterns::{run_base, run_score, PatternScore};
