//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe: player
//! login, the game board, match history and statistics.

mod app;
mod board_view;
mod game_state;
mod history_view;
mod login;
mod stats_view;
mod theme;

pub use app::{GomokuApp, Page};
pub use game_state::{AiState, GameState};
pub use login::LoginForm;
