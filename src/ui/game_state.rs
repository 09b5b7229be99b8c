//! Game state management for the Gomoku GUI
//!
//! Wraps a [`Match`] with the bits only the GUI needs: the paced computer
//! turn, the status message and the record waiting to be stored.

use std::time::{Duration, Instant};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::game::{GameMode, Match, MoveOutcome, Players};
use crate::history::MatchRecord;
use crate::Pos;

/// Computer turn pacing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiState {
    Idle,
    /// Answer once `due` has passed
    Waiting { due: Instant },
}

/// Main game state
pub struct GameState {
    pub game: Match,
    pub ai_state: AiState,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    ai_delay: Duration,
    rng: StdRng,
    finished_record: Option<MatchRecord>,
}

impl GameState {
    pub fn new(players: Players, mode: GameMode, ai_delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            game: Match::new(players, mode),
            ai_state: AiState::Idle,
            suggested_move: None,
            message: None,
            ai_delay,
            rng,
            finished_record: None,
        }
    }

    /// New match, same players.
    ///
    /// A finished record not yet taken stays available.
    pub fn reset(&mut self) {
        self.game.reset();
        self.ai_state = AiState::Idle;
        self.suggested_move = None;
        self.message = None;
    }

    /// Check if the computer is about to answer
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Waiting { .. })
    }

    /// Human click on `pos`
    pub fn try_place(&mut self, pos: Pos) {
        match self.game.play(pos) {
            Ok(outcome) => {
                self.message = None;
                self.after_move(outcome);
            }
            Err(err) => {
                debug!(%pos, %err, "placement rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Advance the computer's turn; call once per frame.
    ///
    /// Returns how long until the next call is useful.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.game.is_ai_turn() {
            self.ai_state = AiState::Idle;
            return None;
        }

        match self.ai_state {
            AiState::Idle => {
                self.ai_state = AiState::Waiting {
                    due: now + self.ai_delay,
                };
                Some(self.ai_delay)
            }
            AiState::Waiting { due } if now < due => Some(due - now),
            AiState::Waiting { .. } => {
                self.ai_state = AiState::Idle;
                match self.game.play_ai(&mut self.rng) {
                    Ok((_, outcome)) => self.after_move(outcome),
                    Err(err) => {
                        warn!(%err, "computer move failed");
                        self.message = Some(format!("Computer could not move: {err}"));
                    }
                }
                None
            }
        }
    }

    /// Request move suggestion for the side to move
    pub fn request_suggestion(&mut self) {
        if self.game.is_human_turn() {
            self.suggested_move = self.game.suggest(&mut self.rng);
        }
    }

    /// Record of the match that just ended, handed out once
    pub fn take_finished_record(&mut self) -> Option<MatchRecord> {
        self.finished_record.take()
    }

    fn after_move(&mut self, outcome: MoveOutcome) {
        self.suggested_move = None;
        if let MoveOutcome::Won(_) = outcome {
            self.finished_record = self.game.record(Utc::now());
        }
    }
}
