//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::Mark;
use crate::rules::Outcome;

use super::board_view::BoardView;
use super::game_state::{GameState, Phase, AI_MARK, HUMAN_MARK};
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Engine Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "You: {}  Engine: {}",
                        HUMAN_MARK.symbol(),
                        AI_MARK.symbol()
                    ));
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

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_turn_card(ui);

                if let Phase::GameOver(result) = self.state.phase {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }
            });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (symbol, color, status) = match self.state.phase {
                Phase::AwaitingHuman => (HUMAN_MARK.symbol(), X_COLOR, "Your turn"),
                Phase::AwaitingAi => (AI_MARK.symbol(), O_COLOR, "Engine is thinking"),
                Phase::GameOver(_) => ("", TEXT_MUTED, "Game over"),
            };

            ui.horizontal(|ui| {
                if !symbol.is_empty() {
                    ui.label(RichText::new(symbol).size(28.0).strong().color(color));
                    ui.add_space(8.0);
                }
                ui.label(RichText::new(status).size(13.0).color(TEXT_SECONDARY));
            });
        });
    }

    /// Render game over card with the terminal result
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: Outcome) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let banner = match result {
                        Outcome::Win(Mark::X) => "X wins!",
                        Outcome::Win(_) => "O wins!",
                        Outcome::Draw => "It's a draw!",
                        Outcome::InProgress => "",
                    };
                    ui.label(RichText::new(banner).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(10.0);

                    if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card (invalid-move notices)
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(NOTICE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
            });
    }

    /// Render engine statistics card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                if let Some(pos) = result.best_move {
                    ui.label(
                        RichText::new(format!("Move: cell {}", pos.to_index()))
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                }
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            } else {
                ui.label(RichText::new("No search yet").size(11.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.winning_line,
                self.state.last_move,
                self.state.is_human_turn(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // D - Toggle engine panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The engine moves synchronously; the tree is tiny
        self.state.step_ai();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
