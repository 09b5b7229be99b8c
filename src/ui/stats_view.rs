//! Win statistics page

use egui::{CornerRadius, Frame, ProgressBar, RichText};

use super::theme::*;
use crate::history::Stats;
use crate::Mark;

fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    Frame::new()
        .fill(CARD_BG)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(14.0)
        .show(ui, add_contents)
        .inner
}

pub fn show(ui: &mut egui::Ui, stats: &Stats) {
    ui.heading(RichText::new("Statistics").color(TEXT_PRIMARY));
    ui.add_space(12.0);

    ui.columns(3, |cols| {
        card(&mut cols[0], |ui| {
            ui.label(RichText::new(stats.total_games.to_string()).size(28.0).strong());
            ui.label(RichText::new("Games played").color(TEXT_MUTED));
        });
        card(&mut cols[1], |ui| {
            ui.label(RichText::new(stats.last_game_moves.to_string()).size(28.0).strong());
            ui.label(RichText::new("Moves in last game").color(TEXT_MUTED));
        });
        card(&mut cols[2], |ui| {
            ui.label(RichText::new(stats.leader().unwrap_or("-")).size(28.0).strong());
            ui.label(RichText::new("Leader").color(TEXT_MUTED));
        });
    });
    ui.add_space(12.0);

    ui.columns(2, |cols| {
        player_card(
            &mut cols[0],
            Mark::First,
            &stats.player1,
            stats.player1_wins,
            stats.player1_losses(),
            stats.player1_win_rate(),
        );
        player_card(
            &mut cols[1],
            Mark::Second,
            &stats.player2,
            stats.player2_wins,
            stats.player2_losses(),
            stats.player2_win_rate(),
        );
    });

    if stats.total_games == 0 {
        ui.vertical_centered(|ui| {
            ui.add_space(30.0);
            ui.label(RichText::new("Statistics appear after the first game").size(16.0).color(TEXT_SECONDARY));
        });
    }
}

fn player_card(ui: &mut egui::Ui, mark: Mark, name: &str, wins: usize, losses: usize, rate: f64) {
    card(ui, |ui| {
        ui.label(RichText::new(format!("{mark}  {name}")).size(18.0).strong().color(mark_color(mark)));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label("Wins");
            ui.label(RichText::new(wins.to_string()).strong());
        });
        ui.add(ProgressBar::new((rate / 100.0) as f32).fill(mark_color(mark)));
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{rate:.1}%")).size(20.0).strong());
            ui.label(RichText::new("win rate").color(TEXT_MUTED));
            ui.add_space(12.0);
            ui.label(RichText::new(losses.to_string()).size(20.0).strong());
            ui.label(RichText::new("losses").color(TEXT_MUTED));
        });
    });
}
