//! Application settings read from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::StoreError;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

/// User-configurable settings.
///
/// Every field has a default, so a partial file (or none) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown for X.
    pub player1: String,
    /// Name shown for O in hotseat play.
    pub player2: String,
    /// Name shown for O when the computer plays it.
    pub ai_name: String,
    /// Start in player-vs-computer mode.
    pub vs_ai: bool,
    /// Pause before the computer answers, in milliseconds.
    pub ai_delay_ms: u64,
    /// Match history file.
    pub history_path: PathBuf,
    /// Fixed seed for the computer's random tie-breaking.
    pub seed: Option<u64>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player1: "Player 1".to_string(),
            player2: "Player 2".to_string(),
            ai_name: "Computer".to_string(),
            vs_ai: false,
            ai_delay_ms: 800,
            history_path: PathBuf::from("tictactoe_matches.json"),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Read `path`, falling back to defaults when it does not exist.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(text)?)
    }

    #[inline]
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Name of the O player for the chosen mode
    pub fn opponent_name(&self) -> &str {
        if self.vs_ai {
            &self.ai_name
        } else {
            &self.player2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ai_delay(), Duration::from_millis(800));
        assert_eq!(config.opponent_name(), "Player 2");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml_str("vs_ai = true\nseed = 7\nai_name = \"Bot\"\n").unwrap();
        assert!(config.vs_ai);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.opponent_name(), "Bot");
        assert_eq!(config.player1, "Player 1");
    }

    #[test]
    fn test_bad_toml_is_error() {
        let err = Config::from_toml_str("ai_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, StoreError::Toml(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        fs::write(&path, "player1 = \"Ann\"\nhistory_path = \"m.json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.player1, "Ann");
        assert_eq!(config.history_path, PathBuf::from("m.json"));
    }
}
