//! Error types.

use derive_more::{Display, Error, From};

use crate::board::Pos;

/// Rejected placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The cell already holds a mark.
    #[display("cell {pos} is already occupied")]
    Occupied {
        /// Cell that was targeted.
        pos: Pos,
    },
    /// The match already has a winner.
    #[display("game is over")]
    GameOver,
    /// The automated player is to move.
    #[display("not your turn")]
    NotYourTurn,
}

/// Failure reading or writing history and configuration files.
#[derive(Debug, Display, Error, From)]
pub enum StoreError {
    /// Filesystem access failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
    /// History JSON could not be encoded or decoded.
    #[display("history format error: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// Configuration TOML could not be parsed.
    #[display("config format error: {_0}")]
    #[from]
    Toml(toml::de::Error),
}
