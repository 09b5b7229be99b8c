//! Infinite Gomoku: five in a row on an unbounded grid
//!
//! Two players alternate placing X and O on an integer grid with no edges.
//! The first to line up five of their marks horizontally, vertically or
//! diagonally wins. An optional computer opponent picks its moves with a
//! one-ply line-strength heuristic.
//!
//! # Architecture
//!
//! - [`board`]: Sparse board keyed by coordinate, plus the move log
//! - [`rules`]: Five-in-a-row detection through the last move
//! - [`eval`]: Line strength of a hypothetical placement
//! - [`engine`]: Move advisor ranking candidate cells
//! - [`game`]: Match loop with turn alternation and AI turns
//! - [`history`]: Persisted match records and win statistics
//! - [`config`] and [`cli`]: Settings file and command-line overrides
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameMode, Match, Players, Pos};
//! use gomoku::game::MoveOutcome;
//!
//! let mut game = Match::new(Players::new("Ann", "Ben"), GameMode::PvP);
//! for x in 0..4 {
//!     game.play(Pos::new(x, 0)).unwrap();
//!     game.play(Pos::new(x, 5)).unwrap();
//! }
//!
//! let outcome = game.play(Pos::new(4, 0)).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Won(_)));
//! assert_eq!(game.winner_name(), Some("Ann"));
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod history;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Move, Pos};
pub use config::Config;
pub use engine::{Candidate, MoveAdvisor};
pub use error::{GameError, StoreError};
pub use game::{GameMode, Match, Players};
pub use history::{MatchHistory, MatchRecord, Stats};
pub use rules::{detect, Direction, Line};
