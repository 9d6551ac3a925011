//! Main application for the Tic-Tac-Toe GUI

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::{marker_color, BoardView};
use super::game_state::GameState;
use super::theme::*;
use crate::{Difficulty, GameMode, GameOutcome, GameRng, Marker};

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    // New-game settings edited in the side panel
    setup_vs_computer: bool,
    setup_human: Marker,
    setup_difficulty: Difficulty,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, rng: GameRng, ai_delay: Duration) -> Self {
        let mode = GameMode::default();
        Self {
            state: GameState::new(mode, rng, ai_delay),
            board_view: BoardView::default(),
            show_debug: false,
            setup_vs_computer: true,
            setup_human: Marker::X,
            setup_difficulty: Difficulty::Hard,
        }
    }

    fn setup_mode(&self) -> GameMode {
        if self.setup_vs_computer {
            GameMode::HumanVsComputer {
                human: self.setup_human,
                difficulty: self.setup_difficulty,
            }
        } else {
            GameMode::HumanVsHuman
        }
    }

    fn start_new_game(&mut self) {
        let mode = self.setup_mode();
        self.state.new_game(mode);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer - X)").clicked() {
                        self.setup_vs_computer = true;
                        self.setup_human = Marker::X;
                        self.start_new_game();
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer - O)").clicked() {
                        self.setup_vs_computer = true;
                        self.setup_human = Marker::O;
                        self.start_new_game();
                        ui.close_menu();
                    }
                    if ui.button("New Game (Human vs Human)").clicked() {
                        self.setup_vs_computer = false;
                        self.start_new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.game.mode() {
                        GameMode::HumanVsComputer { human, difficulty } => {
                            format!("vs Computer ({}) - You: {}", difficulty, human)
                        }
                        GameMode::HumanVsHuman => "Human vs Human".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and settings
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_setup_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(22.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Whose turn it is and what is happening
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.game.current_turn();
            ui.horizontal(|ui| {
                ui.label(RichText::new(turn.to_string()).size(36.0).strong().color(marker_color(turn)));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new("TO MOVE").size(12.0).color(TEXT_MUTED));

                    let status = if self.state.game.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.game.is_computer_turn() {
                        ("Computer thinking...", STATUS_WAIT)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.game.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Mode, marker and difficulty for the next game
    fn render_setup_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEW GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.radio_value(&mut self.setup_vs_computer, true, "vs Computer");
                ui.radio_value(&mut self.setup_vs_computer, false, "2 Players");
            });

            ui.add_enabled_ui(self.setup_vs_computer, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("You play").color(TEXT_SECONDARY));
                    ui.selectable_value(&mut self.setup_human, Marker::X, "X");
                    ui.selectable_value(&mut self.setup_human, Marker::O, "O");
                });
                egui::ComboBox::from_label("Difficulty")
                    .selected_text(self.setup_difficulty.label())
                    .show_ui(ui, |ui| {
                        for difficulty in Difficulty::ALL {
                            ui.selectable_value(&mut self.setup_difficulty, difficulty, difficulty.label());
                        }
                    });
            });

            ui.add_space(8.0);
            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Game (N)").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.start_new_game();
                }
            });
        });
    }

    /// Last computer decision
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(RichText::new(format!("{:?}", result.strategy)).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    ui.label(
                        RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(RichText::new(format!("-> cell {}", pos + 1)).size(12.0).strong().color(WIN_HIGHLIGHT));
                    }
                }
                None => {
                    ui.label(RichText::new("Waiting for computer...").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let (headline, accent) = match self.state.game.outcome() {
            GameOutcome::Won(winner) => (format!("{} WINS!", winner), marker_color(winner)),
            GameOutcome::Draw => ("IT'S A TIE".to_string(), TEXT_PRIMARY),
            GameOutcome::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(accent));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new("Play again").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                let game = &self.state.game;
                let winning_line = game.winning_line();

                let clicked = self.board_view.show(
                    ui,
                    game.board(),
                    game.current_turn(),
                    game.last_move(),
                    winning_line,
                    self.state.accepts_input(),
                );

                if let Some(idx) = clicked {
                    if let Err(err) = self.state.try_place(idx) {
                        log::debug!("click on cell {} ignored: {}", idx, err);
                    }
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.start_new_game();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.poll_ai(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // A click this frame may have handed the turn to the computer
        let now = Instant::now();
        self.state.schedule_ai(now);
        if let Some(remaining) = self.state.ai_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }
}
