//! Match history browser

use chrono::Local;
use egui::{CornerRadius, Frame, RichText, ScrollArea};

use super::theme::*;
use crate::history::{MatchHistory, MatchRecord};
use crate::{Mark, Pos};

/// Selected match, if any
#[derive(Default)]
pub struct HistoryView {
    selected: Option<String>,
}

fn format_date(record: &MatchRecord) -> String {
    record.date.with_timezone(&Local).format("%d %B %Y, %H:%M").to_string()
}

impl HistoryView {
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, history: &MatchHistory) {
        ui.heading(RichText::new("Match history").color(TEXT_PRIMARY));
        ui.add_space(12.0);

        if history.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("No matches yet").size(20.0).color(TEXT_SECONDARY));
                ui.label(RichText::new("Play your first game!").color(TEXT_MUTED));
            });
            return;
        }

        let total = history.len();
        ScrollArea::vertical().show(ui, |ui| {
            for (index, record) in history.records().iter().enumerate() {
                let response = Frame::new()
                    .fill(CARD_BG)
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("Match #{}", total - index)).strong().color(TEXT_PRIMARY));
                            if record.winner.is_some() {
                                ui.label("🏆");
                            }
                        });
                        for mark in [Mark::First, Mark::Second] {
                            let name = record.player_name(mark);
                            let mut text = RichText::new(format!("{mark}  {name}")).color(mark_color(mark));
                            if record.winner.as_deref() == Some(name) {
                                text = text.strong();
                            }
                            ui.label(text);
                        }
                        ui.label(RichText::new(format_date(record)).size(11.0).color(TEXT_MUTED));
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    self.selected = Some(record.id.clone());
                }
                ui.add_space(8.0);
            }
        });

        self.show_detail(ctx, history);
    }

    /// Detail window for the selected match
    fn show_detail(&mut self, ctx: &egui::Context, history: &MatchHistory) {
        let Some(record) = self.selected.as_deref().and_then(|id| history.get(id)) else {
            return;
        };

        let mut open = true;
        egui::Window::new("Match details")
            .open(&mut open)
            .collapsible(false)
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("X  {}", record.player1)).color(MARK_X).strong());
                    ui.add_space(16.0);
                    ui.label(RichText::new(format!("O  {}", record.player2)).color(MARK_O).strong());
                });
                if let Some(winner) = &record.winner {
                    ui.label(RichText::new(format!("🏆 Winner: {winner}")).size(16.0).color(WIN_HIGHLIGHT));
                }
                ui.add_space(8.0);

                ui.label(RichText::new("Final board").strong());
                ScrollArea::both().max_height(260.0).show(ui, |ui| {
                    ui.label(RichText::new(render_board(record)).monospace());
                });
                ui.add_space(8.0);

                ui.label(RichText::new("Moves").strong());
                ScrollArea::vertical().id_salt("moves").max_height(200.0).show(ui, |ui| {
                    for (i, mv) in record.moves.iter().enumerate() {
                        ui.label(format!(
                            "Move {}: {} {} ({}, {})",
                            i + 1,
                            mv.mark,
                            record.player_name(mv.mark),
                            mv.x,
                            mv.y
                        ));
                    }
                });
                ui.add_space(8.0);
                ui.label(RichText::new(format_date(record)).size(11.0).color(TEXT_MUTED));
            });

        if !open {
            self.selected = None;
        }
    }
}

/// Text grid of the final board over its bounding box
pub fn render_board(record: &MatchRecord) -> String {
    let cells: Vec<(Pos, Mark)> = record.cells().collect();
    let Some(min_x) = cells.iter().map(|(p, _)| p.x).min() else {
        return String::new();
    };
    let max_x = cells.iter().map(|(p, _)| p.x).max().unwrap_or(min_x);
    let min_y = cells.iter().map(|(p, _)| p.y).min().unwrap_or(0);
    let max_y = cells.iter().map(|(p, _)| p.y).max().unwrap_or(min_y);

    let mut out = String::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let symbol = cells
                .iter()
                .find(|(p, _)| *p == Pos::new(x, y))
                .map_or('.', |(_, mark)| mark.symbol());
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Players;
    use crate::Board;
    use chrono::Utc;

    #[test]
    fn test_render_board_bounding_box() {
        let mut board = Board::new();
        board.place(Pos::new(-1, 0), Mark::First).unwrap();
        board.place(Pos::new(1, 1), Mark::Second).unwrap();
        let record = MatchRecord::new(&Players::new("A", "B"), None, Utc::now(), &board);

        assert_eq!(render_board(&record), "X..\n..O\n");
    }

    #[test]
    fn test_render_empty_board() {
        let record = MatchRecord::new(&Players::new("A", "B"), None, Utc::now(), &Board::new());
        assert_eq!(render_board(&record), "");
    }
}
