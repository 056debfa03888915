use common::engine::{GameCommand, Mark, MatchStatus};
use common::feedback::{VIBRATION_MAX_INTENSITY, VIBRATION_MIN_INTENSITY};
use eframe::egui;
use ringbuffer::RingBuffer;
use tokio::sync::mpsc;

use super::board::BoardUi;
use super::confetti::Confetti;
use crate::config::Config;
use crate::state::{ClientCommand, GameView, SharedState};

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    config: Config,
    board_ui: BoardUi,
    confetti: Confetti,
    settings_open: bool,
    modal_open: bool,
    seen_banner: Option<String>,
}

impl GameApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            config,
            board_ui: BoardUi::new(),
            confetti: Confetti::new(),
            settings_open: false,
            modal_open: false,
            seen_banner: None,
        }
    }

    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    fn mark_color(&self, mark: Mark) -> egui::Color32 {
        match (mark, self.config.dark_mode) {
            (Mark::X, false) => egui::Color32::from_rgb(220, 50, 50),
            (Mark::X, true) => egui::Color32::from_rgb(235, 87, 87),
            (Mark::O, false) => egui::Color32::from_rgb(50, 50, 220),
            (Mark::O, true) => egui::Color32::from_rgb(100, 149, 237),
            (Mark::Empty, _) => egui::Color32::GRAY,
        }
    }

    // Opens the modal and fires the confetti exactly once per finished match.
    fn sync_result(&mut self, ctx: &egui::Context, view: &GameView) {
        if view.result_banner == self.seen_banner {
            return;
        }

        self.seen_banner = view.result_banner.clone();
        if view.result_banner.is_some() {
            self.modal_open = true;
            if matches!(view.status, MatchStatus::Won { .. }) {
                self.confetti.burst(ctx.input(|i| i.time));
            }
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context, view: &GameView) {
        egui::TopBottomPanel::top("status_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Tic Tac Toe");
                ui.separator();

                let (status_text, color) = match view.status {
                    MatchStatus::InProgress => (
                        format!("Player {}'s turn", view.current_mark),
                        self.mark_color(view.current_mark),
                    ),
                    MatchStatus::Won { mark, .. } => {
                        (format!("Player {} wins!", mark), self.mark_color(mark))
                    }
                    MatchStatus::Drawn => ("It's a draw!".to_string(), egui::Color32::GRAY),
                };
                ui.colored_label(color, status_text);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⚙ Settings").clicked() {
                        self.settings_open = true;
                    }
                });
            });
        });
    }

    fn render_score_panel(&mut self, ctx: &egui::Context, view: &GameView) {
        egui::SidePanel::right("score_panel")
            .default_width(170.0)
            .show(ctx, |ui| {
                ui.heading("Scores");
                ui.colored_label(
                    self.mark_color(Mark::X),
                    format!("Player X: {}", view.scores.wins_x),
                );
                ui.colored_label(
                    self.mark_color(Mark::O),
                    format!("Player O: {}", view.scores.wins_o),
                );

                ui.separator();
                if ui.button("New game").clicked() {
                    self.modal_open = false;
                    self.send(ClientCommand::Game(GameCommand::NewMatch));
                }
                if ui.button("Reset scores").clicked() {
                    self.send(ClientCommand::Game(GameCommand::ResetScores));
                }

                ui.separator();
                ui.label("History");
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in view.history.iter() {
                        ui.label(entry);
                    }
                });
            });
    }

    fn render_board_panel(&mut self, ctx: &egui::Context, view: &GameView) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                let (board_rect, clicked) =
                    self.board_ui
                        .show(ui, &view.board, view.status, self.config.dark_mode);

                if let Some(index) = clicked {
                    self.send(ClientCommand::Game(GameCommand::PlaceMark(index)));
                }

                if self.confetti.is_active() {
                    let now = ctx.input(|i| i.time);
                    self.confetti.paint(ui.painter(), board_rect, now);
                }
            });
        });
    }

    fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.settings_open {
            return;
        }

        let mut open = self.settings_open;
        let mut changed = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                changed |= ui.checkbox(&mut self.config.dark_mode, "Dark mode").changed();
                changed |= ui
                    .checkbox(&mut self.config.sound_enabled, "Sound effects")
                    .changed();
                changed |= ui
                    .checkbox(&mut self.config.vibration_enabled, "Vibration")
                    .changed();

                ui.add_enabled_ui(self.config.vibration_enabled, |ui| {
                    changed |= ui
                        .add(
                            egui::Slider::new(
                                &mut self.config.vibration_intensity,
                                VIBRATION_MIN_INTENSITY..=VIBRATION_MAX_INTENSITY,
                            )
                            .text("Vibration intensity"),
                        )
                        .changed();
                });
            });

        self.settings_open = open;
        if changed {
            self.send(ClientCommand::ApplySettings(self.config.clone()));
        }
    }

    fn render_result_modal(&mut self, ctx: &egui::Context, view: &GameView) {
        if !self.modal_open {
            return;
        }
        let Some(banner) = view.result_banner.clone() else {
            return;
        };

        egui::Window::new("Match over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(banner);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Play again").clicked() {
                            self.modal_open = false;
                            self.send(ClientCommand::Game(GameCommand::NewMatch));
                        }
                        if ui.button("Close").clicked() {
                            self.modal_open = false;
                        }
                    });
                });
            });
    }

    fn render_error_panel(&self, ctx: &egui::Context) {
        let Some(error) = self.shared_state.get_error() else {
            return;
        };

        egui::TopBottomPanel::bottom("error_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(egui::Color32::from_rgb(220, 50, 50), &error);
                if ui.button("Dismiss").clicked() {
                    self.shared_state.clear_error();
                }
            });
        });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.send(ClientCommand::Shutdown);
        }

        ctx.set_visuals(if self.config.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let view = self.shared_state.get_view();
        self.sync_result(ctx, &view);

        self.render_top_panel(ctx, &view);
        self.render_score_panel(ctx, &view);
        self.render_board_panel(ctx, &view);
        self.render_settings_window(ctx);
        self.render_result_modal(ctx, &view);
        self.render_error_panel(ctx);

        if self.confetti.is_active() {
            ctx.request_repaint();
        } else {
            // The game task publishes view updates asynchronously.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
