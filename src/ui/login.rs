//! Player name entry

use egui::{RichText, TextEdit};

use super::theme::*;
use crate::config::Config;
use crate::game::{GameMode, Players};

/// Login form contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub player1: String,
    pub player2: String,
    pub vs_ai: bool,
    ai_name: String,
}

impl LoginForm {
    pub fn from_config(config: &Config) -> Self {
        Self {
            player1: config.player1.clone(),
            player2: config.player2.clone(),
            vs_ai: config.vs_ai,
            ai_name: config.ai_name.clone(),
        }
    }

    /// Trimmed names and mode, or `None` while a name is blank
    pub fn submit(&self) -> Option<(Players, GameMode)> {
        let player1 = self.player1.trim();
        if player1.is_empty() {
            return None;
        }
        if self.vs_ai {
            return Some((Players::new(player1, self.ai_name.as_str()), GameMode::vs_ai()));
        }
        let player2 = self.player2.trim();
        if player2.is_empty() {
            return None;
        }
        Some((Players::new(player1, player2), GameMode::PvP))
    }

    /// Render the form; returns the players once "Start" is pressed
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<(Players, GameMode)> {
        let mut submitted = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(RichText::new("TIC-TAC-TOE ∞").size(32.0).strong().color(TEXT_PRIMARY));
            ui.label(RichText::new("Enter player names to start a match").size(14.0).color(TEXT_SECONDARY));
            ui.add_space(24.0);

            ui.label(RichText::new("Player 1 (X)").color(MARK_X));
            ui.add(TextEdit::singleline(&mut self.player1).hint_text("First player's name"));
            ui.add_space(12.0);

            ui.checkbox(&mut self.vs_ai, "Play against the computer");
            ui.add_space(8.0);

            if self.vs_ai {
                ui.label(RichText::new(format!("Player 2 (O): {}", self.ai_name)).color(MARK_O));
            } else {
                ui.label(RichText::new("Player 2 (O)").color(MARK_O));
                ui.add(TextEdit::singleline(&mut self.player2).hint_text("Second player's name"));
            }
            ui.add_space(20.0);

            let ready = self.submit();
            let start = ui.add_enabled(ready.is_some(), egui::Button::new(RichText::new("▶ Start game").size(16.0)));
            if start.clicked() {
                submitted = ready;
            }
        });

        submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed() {
        let mut form = LoginForm::from_config(&Config::default());
        form.player1 = "  Ann ".into();
        form.player2 = "Ben".into();

        let (players, mode) = form.submit().unwrap();
        assert_eq!(players, Players::new("Ann", "Ben"));
        assert_eq!(mode, GameMode::PvP);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut form = LoginForm::from_config(&Config::default());
        form.player2 = "   ".into();
        assert!(form.submit().is_none());
    }

    #[test]
    fn test_vs_ai_uses_ai_name() {
        let mut form = LoginForm::from_config(&Config::default());
        form.vs_ai = true;
        form.player2.clear();

        let (players, mode) = form.submit().unwrap();
        assert_eq!(players.player2, "Computer");
        assert!(matches!(mode, GameMode::VsAi { .. }));
    }
}
