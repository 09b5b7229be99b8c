//! Infinite Gomoku GUI
//!
//! A graphical interface for playing five in a row against a friend or the computer.

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::cli::Cli;
use gomoku::ui::GomokuApp;
use gomoku::{Config, MatchHistory};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load config from {}", cli.config.display()))?;
    let config = cli.apply(config);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();

    let history = MatchHistory::load(&config.history_path)
        .with_context(|| format!("failed to read history from {}", config.history_path.display()))?;
    info!(path = %config.history_path.display(), matches = history.len(), "history loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Infinite Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Infinite Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config, history)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}
