//! Match loop: owns the board, alternates turns, drives the automated player
//!
//! After every placement the last move is checked for five in a row. In
//! AI mode the advisor answers whenever its mark is to move; pacing the
//! answer is left to the caller.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, Move, Pos};
use crate::engine::MoveAdvisor;
use crate::error::GameError;
use crate::history::MatchRecord;
use crate::rules::{self, Line};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Player vs Player (hotseat)
    #[default]
    PvP,
    /// Player vs the heuristic advisor
    VsAi { ai_mark: Mark },
}

impl GameMode {
    /// Human plays X, advisor plays O
    pub fn vs_ai() -> Self {
        GameMode::VsAi {
            ai_mark: Mark::Second,
        }
    }
}

/// Display names; `player1` plays X, `player2` plays O
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    pub player1: String,
    pub player2: String,
}

impl Players {
    pub fn new(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
        }
    }

    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.player1,
            Mark::Second => &self.player2,
        }
    }
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Mark,
    pub winning_line: Line,
}

/// What a successful placement led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No win; `next` is to move
    Continue { next: Mark },
    /// The placement completed a line
    Won(GameResult),
}

/// One match between two players
#[derive(Debug, Clone)]
pub struct Match {
    players: Players,
    mode: GameMode,
    board: Board,
    current_turn: Mark,
    result: Option<GameResult>,
}

impl Match {
    pub fn new(players: Players, mode: GameMode) -> Self {
        Self {
            players,
            mode,
            board: Board::new(),
            current_turn: Mark::First,
            result: None,
        }
    }

    /// Start over with the same players and mode
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::First;
        self.result = None;
        debug!("match reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        self.board.moves()
    }

    #[inline]
    pub fn players(&self) -> &Players {
        &self.players
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    #[inline]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Name of the winning player, once decided
    pub fn winner_name(&self) -> Option<&str> {
        self.result.as_ref().map(|r| self.players.name(r.winner))
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::VsAi { ai_mark } => !self.is_over() && self.current_turn == ai_mark,
            GameMode::PvP => false,
        }
    }

    /// Check if a human may place now
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && !self.is_ai_turn()
    }

    /// Human placement for the side to move
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        self.execute_move(pos)
    }

    /// Let the advisor move for its side
    #[instrument(skip(self, rng), fields(turn = %self.current_turn))]
    pub fn play_ai<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Pos, MoveOutcome), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotYourTurn);
        }
        let pos = MoveAdvisor::new(self.current_turn).propose(&self.board, rng);
        let outcome = self.execute_move(pos)?;
        Ok((pos, outcome))
    }

    /// Suggest a move for whoever is to move (hint in hotseat play)
    pub fn suggest<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Pos> {
        if self.is_over() {
            return None;
        }
        Some(MoveAdvisor::new(self.current_turn).propose(&self.board, rng))
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<MoveOutcome, GameError> {
        let mark = self.current_turn;
        let mv = self.board.place(pos, mark)?;

        if let Some(line) = rules::detect(&self.board, mv) {
            info!(
                winner = self.players.name(mark),
                %mark,
                moves = self.board.len(),
                "match won"
            );
            let result = GameResult {
                winner: mark,
                winning_line: line,
            };
            self.result = Some(result.clone());
            return Ok(MoveOutcome::Won(result));
        }

        self.current_turn = mark.opponent();
        Ok(MoveOutcome::Continue {
            next: self.current_turn,
        })
    }

    /// Snapshot of a finished match for the history store
    pub fn record(&self, now: DateTime<Utc>) -> Option<MatchRecord> {
        let winner = self.winner_name()?;
        Some(MatchRecord::new(
            &self.players,
            Some(winner.to_string()),
            now,
            &self.board,
        ))
    }
}
