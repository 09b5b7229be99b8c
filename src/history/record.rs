//! Persisted match record.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark, Move, Pos};
use crate::error::GameError;
use crate::game::Players;

/// Finished match as stored in the history file.
///
/// `board` maps `"x,y"` keys to marks; `moves` is the full replay log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: String,
    /// Plays X.
    pub player1: String,
    /// Plays O.
    pub player2: String,
    /// Winner's name, if the match was decided.
    pub winner: Option<String>,
    /// When the match ended.
    pub date: DateTime<Utc>,
    /// Final position.
    #[serde(default)]
    pub board: BTreeMap<String, Mark>,
    /// Placements in order.
    #[serde(default)]
    pub moves: Vec<Move>,
}

/// Key of a cell in [`MatchRecord::board`].
pub fn cell_key(pos: Pos) -> String {
    format!("{},{}", pos.x, pos.y)
}

/// Inverse of [`cell_key`].
pub fn parse_cell_key(key: &str) -> Option<Pos> {
    let (x, y) = key.split_once(',')?;
    Some(Pos::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

impl MatchRecord {
    /// Snapshot a board.
    pub fn new(players: &Players, winner: Option<String>, date: DateTime<Utc>, board: &Board) -> Self {
        Self {
            id: date.timestamp_millis().to_string(),
            player1: players.player1.clone(),
            player2: players.player2.clone(),
            winner,
            date,
            board: board.iter().map(|(pos, mark)| (cell_key(pos), mark)).collect(),
            moves: board.moves().to_vec(),
        }
    }

    /// Cells of the final board; malformed keys are skipped.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Mark)> + '_ {
        self.board
            .iter()
            .filter_map(|(key, &mark)| parse_cell_key(key).map(|pos| (pos, mark)))
    }

    /// Rebuild the board from the move log.
    pub fn replay(&self) -> Result<Board, GameError> {
        Board::from_moves(&self.moves)
    }

    /// Name of the player holding `mark`.
    pub fn player_name(&self, mark: Mark) -> &str {
        match mark {
            Mark::First => &self.player1,
            Mark::Second => &self.player2,
        }
    }
}
