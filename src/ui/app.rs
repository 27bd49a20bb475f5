//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState};
use super::theme::*;
use crate::{Difficulty, Outcome, Player};

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default(), Difficulty::Medium),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self, mode: GameMode) {
        let difficulty = self.state.difficulty;
        self.state = GameState::new(mode, difficulty);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs CPU - play Black)").clicked() {
                        self.new_game(GameMode::PvC {
                            human_color: Player::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs CPU - play White)").clicked() {
                        self.new_game(GameMode::PvC {
                            human_color: Player::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (2 Players)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                        let selected = self.state.difficulty == difficulty;
                        if ui.radio(selected, difficulty.label()).clicked() {
                            self.state.difficulty = difficulty;
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvC { human_color } => format!(
                            "vs CPU ({}) - You: {}",
                            self.state.difficulty.label(),
                            player_name(human_color)
                        ),
                        GameMode::PvP => "2 Players - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                if self.show_debug {
                    self.render_debug_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(outcome) = self.state.session.outcome() {
                    self.render_game_over_card(ui, outcome);
                    ui.add_space(10.0);
                }

                if let Some(msg) = self.state.message.clone() {
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
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(
                RichText::new("OTHELLO")
                    .size(22.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.session.current_player();
            let (symbol, name, accent) = match turn {
                Some(Player::Black) => ("●", "BLACK", egui::Color32::from_rgb(70, 70, 75)),
                Some(Player::White) => ("○", "WHITE", egui::Color32::from_rgb(220, 220, 225)),
                None => ("", "GAME OVER", egui::Color32::from_rgb(60, 62, 66)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);
                if !symbol.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        symbol,
                        egui::FontId::proportional(26.0),
                        TEXT_PRIMARY,
                    );
                }

                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(17.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_cpu_busy() {
                        ("CPU thinking...", STATUS_WARNING)
                    } else if self.state.session.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_cpu_turn() {
                        ("CPU to move", TEXT_SECONDARY)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render score card with both disc counts
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let score = self.state.session.board().score();
            self.render_score_row(ui, Player::Black, score.black);
            ui.add_space(6.0);
            self.render_score_row(ui, Player::White, score.white);
        });
    }

    fn render_score_row(&self, ui: &mut egui::Ui, player: Player, count: u32) {
        let (symbol, color) = match player {
            Player::Black => ("●", egui::Color32::from_rgb(60, 60, 65)),
            Player::White => ("○", egui::Color32::from_rgb(200, 200, 205)),
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(symbol).size(18.0).color(color));
            ui.add_space(4.0);
            ui.label(
                RichText::new(player_name(player))
                    .size(13.0)
                    .color(TEXT_SECONDARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{count}"))
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
            });
        });
    }

    /// Render CPU debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CPU DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.cpu_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(11.0)
                        .color(STATUS_WARNING),
                );
            }

            if let Some(result) = &self.state.last_cpu_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(result.difficulty.label())
                                .size(11.0)
                                .strong()
                                .color(STATUS_OK),
                        );
                        ui.label(
                            RichText::new(format!("Score: {}", result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'a' + pos.col) as char;
                    let row = pos.row + 1;
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("→ {col}{row}"))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("No CPU move yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let score = self.state.session.board().score();
        let headline = match outcome {
            Outcome::Win(Player::Black) => "BLACK WINS",
            Outcome::Win(Player::White) => "WHITE WINS",
            Outcome::Draw => "DRAW",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(headline)
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("{} - {}", score.black, score.white))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(10.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
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
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            // Hints only when a human may act
            let accept_input = self.state.is_human_turn()
                && !self.state.is_cpu_busy()
                && !self.state.session.is_over();
            let legal_moves: Vec<_> = if accept_input {
                self.state.session.legal_moves().to_vec()
            } else {
                Vec::new()
            };

            let clicked = self.board_view.show(
                ui,
                self.state.session.board(),
                self.state.session.current_player(),
                &legal_moves,
                self.state.last_move,
                accept_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_disc(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::Black => "Black",
        Player::White => "White",
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Poll the CPU worker
        self.state.check_cpu_result();

        // Start the CPU when it's its turn
        if self.state.is_cpu_turn() && !self.state.is_cpu_busy() && !self.state.session.is_over() {
            self.state.start_cpu_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep painting while the CPU works or paces
        if self.state.is_cpu_busy() {
            ctx.request_repaint();
        }
    }
}
