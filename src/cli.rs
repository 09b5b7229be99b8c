//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_CONFIG_PATH};

/// Infinite Gomoku - five in a row on an unbounded grid
#[derive(Parser, Debug)]
#[command(name = "infinite-gomoku")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Settings file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Match history file (JSON)
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Name of the X player
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the O player
    #[arg(long)]
    pub player2: Option<String>,

    /// Play against the computer
    #[arg(long)]
    pub ai: bool,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    pub ai_delay_ms: Option<u64>,

    /// Seed for the computer's tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Layer command-line values over the file settings
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.history {
            config.history_path = path.clone();
        }
        if let Some(name) = &self.player1 {
            config.player1 = name.clone();
        }
        if let Some(name) = &self.player2 {
            config.player2 = name.clone();
        }
        if self.ai {
            config.vs_ai = true;
        }
        if let Some(ms) = self.ai_delay_ms {
            config.ai_delay_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}
