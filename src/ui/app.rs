//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::{info, warn};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::GameState;
use super::history_view::HistoryView;
use super::login::LoginForm;
use super::stats_view;
use super::theme::*;
use crate::config::Config;
use crate::game::GameMode;
use crate::history::{MatchHistory, Stats};
use crate::Mark;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Game,
    History,
    Stats,
}

/// Main Gomoku application
pub struct GomokuApp {
    config: Config,
    page: Page,
    login: LoginForm,
    state: Option<GameState>,
    history: MatchHistory,
    board_view: BoardView,
    history_view: HistoryView,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config, history: MatchHistory) -> Self {
        Self {
            login: LoginForm::from_config(&config),
            config,
            page: Page::Login,
            state: None,
            history,
            board_view: BoardView::default(),
            history_view: HistoryView::default(),
        }
    }

    /// Store the record of a match that just ended
    fn save_finished_match(&mut self) {
        let Some(record) = self.state.as_mut().and_then(GameState::take_finished_record) else {
            return;
        };
        info!(id = %record.id, winner = ?record.winner, "saving match");
        if let Err(err) = self.history.add_and_save(record) {
            warn!(%err, "could not save match history");
            if let Some(state) = self.state.as_mut() {
                state.message = Some(format!("Could not save history: {err}"));
            }
        }
    }

    /// Render the navigation bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label(RichText::new("TIC-TAC-TOE ∞").strong());
                ui.separator();
                for (page, label) in [
                    (Page::Game, "🎮 Game"),
                    (Page::History, "📜 History"),
                    (Page::Stats, "📊 Statistics"),
                ] {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Log out").clicked() {
                        self.state = None;
                        self.page = Page::Login;
                    }
                    if let Some(state) = &self.state {
                        let mode_text = match state.game.mode() {
                            GameMode::VsAi { .. } => "vs Computer",
                            GameMode::PvP => "Hotseat",
                        };
                        ui.label(mode_text);
                    }
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with players, actions and the move list
    fn render_side_panel(&mut self, ctx: &Context) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(300.0)
            .frame(Frame::new().fill(SIDE_PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                // Turn indicator card
                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    let players = state.game.players();
                    for mark in [Mark::First, Mark::Second] {
                        let mut text = RichText::new(format!("{mark}  {}", players.name(mark)))
                            .size(16.0)
                            .color(mark_color(mark));
                        if !state.game.is_over() && state.game.current_turn() == mark {
                            text = text.strong().underline();
                        }
                        ui.label(text);
                    }
                    let status = if state.is_ai_thinking() {
                        "Computer is thinking..."
                    } else if state.game.is_over() {
                        "Game over"
                    } else {
                        "Your turn"
                    };
                    ui.label(RichText::new(status).size(12.0).color(TEXT_SECONDARY));
                });
                ui.add_space(10.0);

                // Actions card
                Self::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        if ui.button("🔄 New game").clicked() {
                            state.reset();
                            self.board_view.center_on(crate::Pos::ORIGIN);
                        }
                        if ui.button("💡 Hint").clicked() {
                            state.request_suggestion();
                        }
                        if ui.button("⌖ Center").clicked() {
                            let target = state.game.board().last_move().map_or(crate::Pos::ORIGIN, |m| m.pos());
                            self.board_view.center_on(target);
                        }
                    });
                });

                // Game over card
                if let Some(winner) = state.game.winner_name() {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(WINNER_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(12.0)
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new(format!("🎉 Winner: {winner}! 🎉")).size(16.0).strong());
                        });
                }

                // Status message
                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Frame::new()
                        .fill(MESSAGE_BG)
                        .corner_radius(CornerRadius::same(8))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(format!("⚠ {msg}")).size(11.0).color(TEXT_PRIMARY));
                        });
                }

                ui.add_space(10.0);
                ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                ScrollArea::vertical().stick_to_bottom(true).show(ui, |ui| {
                    let players = state.game.players();
                    for (i, mv) in state.game.moves().iter().enumerate() {
                        ui.label(
                            RichText::new(format!(
                                "{}. {} {}: ({}, {})",
                                i + 1,
                                mv.mark,
                                players.name(mv.mark),
                                mv.x,
                                mv.y
                            ))
                            .color(mark_color(mv.mark)),
                        );
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        CentralPanel::default().show(ctx, |ui| {
            let overlay = BoardOverlay {
                current_turn: state.game.current_turn(),
                last_move: state.game.board().last_move().map(|m| m.pos()),
                suggested_move: state.suggested_move,
                winning_line: state.game.result().map(|r| r.winning_line.cells.as_slice()),
                accepts_input: state.game.is_human_turn(),
            };

            let clicked = self.board_view.show(ui, state.game.board(), &overlay);
            if let Some(pos) = clicked {
                state.try_place(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if self.page != Page::Game || ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            let step = if i.modifiers.shift { 5.0 } else { 1.0 };
            if i.key_pressed(egui::Key::ArrowLeft) {
                self.board_view.pan(-step, 0.0);
            }
            if i.key_pressed(egui::Key::ArrowRight) {
                self.board_view.pan(step, 0.0);
            }
            if i.key_pressed(egui::Key::ArrowUp) {
                self.board_view.pan(0.0, -step);
            }
            if i.key_pressed(egui::Key::ArrowDown) {
                self.board_view.pan(0.0, step);
            }

            if let Some(state) = self.state.as_mut() {
                // H - Get hint
                if i.key_pressed(egui::Key::H) {
                    state.request_suggestion();
                }
                // N - New game
                if i.key_pressed(egui::Key::N) {
                    state.reset();
                    self.board_view.center_on(crate::Pos::ORIGIN);
                }
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.page == Page::Login {
            CentralPanel::default().show(ctx, |ui| {
                if let Some((players, mode)) = self.login.show(ui) {
                    info!(player1 = %players.player1, player2 = %players.player2, ?mode, "players logged in");
                    self.state = Some(GameState::new(players, mode, self.config.ai_delay(), self.config.seed));
                    self.board_view = BoardView::default();
                    self.page = Page::Game;
                }
            });
            return;
        }

        self.save_finished_match();
        self.handle_input(ctx);

        if let Some(state) = self.state.as_mut() {
            if let Some(wait) = state.tick(Instant::now()) {
                ctx.request_repaint_after(wait);
            }
        }
        self.save_finished_match();

        self.render_menu_bar(ctx);
        match self.page {
            Page::Game => {
                self.render_side_panel(ctx);
                self.render_board(ctx);
            }
            Page::History => {
                CentralPanel::default().show(ctx, |ui| {
                    self.history_view.show(ctx, ui, &self.history);
                });
            }
            Page::Stats => {
                let players = self.state.as_ref().map(|s| s.game.players().clone());
                CentralPanel::default().show(ctx, |ui| {
                    if let Some(players) = players {
                        let stats = Stats::compute(self.history.records(), &players.player1, &players.player2);
                        stats_view::show(ui, &stats);
                    }
                });
            }
            Page::Login => {}
        }
    }
}
