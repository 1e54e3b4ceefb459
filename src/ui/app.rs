//! Main application for the tic-tac-toe GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{
    CentralPanel, Color32, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel,
};

use super::board_view::BoardView;
use super::theme::*;
use crate::board::Mark;
use crate::game::{Game, GameMode};
use crate::rules::Outcome;

/// Delay before the computer answers. Presentation pacing only; the match
/// controller behaves identically with or without it.
const COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(300);

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    game: Game,
    board_view: BoardView,
    /// When the pending computer move fires
    computer_due: Option<Instant>,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            game: Game::default(),
            board_view: BoardView::default(),
            computer_due: None,
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Check whether the computer owns the current turn
    fn is_computer_turn(&self) -> bool {
        self.game.mode() == GameMode::HumanVsComputer
            && self.game.turn() == Mark::O
            && !self.game.is_over()
    }

    /// Schedule and fire the computer's reply
    fn drive_computer(&mut self) {
        if !self.is_computer_turn() {
            self.computer_due = None;
            return;
        }

        match self.computer_due {
            None => self.computer_due = Some(Instant::now() + COMPUTER_MOVE_DELAY),
            Some(due) if Instant::now() >= due => {
                self.game.computer_move();
                self.computer_due = None;
            }
            Some(_) => {}
        }
    }

    fn restart(&mut self) {
        self.game.restart();
        self.computer_due = None;
    }

    fn toggle_mode(&mut self) {
        let mode = match self.game.mode() {
            GameMode::HumanVsHuman => GameMode::HumanVsComputer,
            GameMode::HumanVsComputer => GameMode::HumanVsHuman,
        };
        self.game.set_mode(mode);
        self.restart();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer)").clicked() {
                        self.game.set_mode(GameMode::HumanVsComputer);
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("New Game (2 Players)").clicked() {
                        self.game.set_mode(GameMode::HumanVsHuman);
                        self.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart (R)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Search Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Show current mode
                    let mode_text = match self.game.mode() {
                        GameMode::HumanVsComputer => "You: X - Computer: O",
                        GameMode::HumanVsHuman => "2 Players - Hotseat",
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (symbol, color) = match self.game.turn() {
                Mark::X => ("X", X_MARK),
                Mark::O => ("O", O_MARK),
                Mark::Empty => ("-", TEXT_MUTED),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(28.0).strong().color(color));
                ui.add_space(8.0);

                let status = if self.game.is_over() {
                    ("Game over", STATUS_WAITING)
                } else if self.is_computer_turn() {
                    ("Computer thinking...", STATUS_WAITING)
                } else {
                    ("Your move", STATUS_READY)
                };
                ui.label(RichText::new(status.0).size(12.0).color(status.1));
            });
        });
    }

    /// Render score card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            self.render_score_row(ui, "X", X_MARK, self.game.score(Mark::X));
            ui.add_space(6.0);
            self.render_score_row(ui, "O", O_MARK, self.game.score(Mark::O));
        });
    }

    /// Render a single score row
    fn render_score_row(&self, ui: &mut egui::Ui, symbol: &str, color: Color32, wins: u32) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(16.0).strong().color(color));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} wins", wins))
                        .size(14.0)
                        .color(TEXT_SECONDARY),
                );
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(
                                RichText::new("Restart (R)").size(12.0).color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.restart();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if ui
                        .add(
                            egui::Label::new(
                                RichText::new("Mode (M)").size(12.0).color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click()),
                        )
                        .clicked()
                    {
                        self.toggle_mode();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Moves played: {}", self.game.board().mark_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render search debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(DEBUG_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = self.game.last_search() {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(11.0)
                                .color(TEXT_SECONDARY),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(11.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });

                    if let Some(pos) = result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("Played ({}, {})", pos.row, pos.col))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(
                        RichText::new("No search this round")
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, color) = match self.game.outcome() {
            Outcome::Won(Mark::X) => ("X WINS!", X_MARK),
            Outcome::Won(Mark::O) => ("O WINS!", O_MARK),
            Outcome::Draw => ("DRAW", STATUS_WAITING),
            _ => return,
        };

        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(22.0).strong().color(color));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(GAME_OVER_BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Round")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.restart();
                            }
                        });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let locked = self.game.is_over() || self.is_computer_turn();

            let clicked = self.board_view.show(
                ui,
                self.game.board(),
                self.game.turn(),
                self.game.last_move(),
                self.game.winning_line(),
                locked,
            );

            // Handle click
            if let Some(pos) = clicked {
                self.game.play_move(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // R - Restart round
            if i.key_pressed(egui::Key::R) {
                self.restart();
            }

            // M - Toggle mode
            if i.key_pressed(egui::Key::M) {
                self.toggle_mode();
            }

            // D - Toggle search panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Fire the computer's move once its delay elapses
        self.drive_computer();

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while a computer move is pending
        if self.computer_due.is_some() {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}
