use common::engine::session::SessionCommand;
use common::games::snake::{
    MAX_APPLE_COUNT, MAX_TICK_INTERVAL_MS, MIN_APPLE_COUNT, MIN_TICK_INTERVAL_MS,
    WallCollisionMode,
};
use common::log;
use eframe::egui;
use egui::{Align, Layout};

use super::game::{render_board, render_game_over};
use crate::config::{ClientConfigManager, Config};
use crate::input::{InputAction, read_actions};
use crate::state::{AppState, CommandSender, SharedState};

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    config: Config,
    config_dirty: bool,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        config: Config,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            config,
            config_dirty: false,
        }
    }

    fn restart(&mut self) {
        let settings = self.config.game.to_session_settings();
        self.command_sender.send(SessionCommand::Restart(settings));
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for action in read_actions(ctx) {
            match action {
                InputAction::Turn(direction) => {
                    self.command_sender.send(SessionCommand::Turn(direction));
                }
                InputAction::Restart => self.restart(),
            }
        }
    }

    fn render_header(&self, ui: &mut egui::Ui, state: &AppState) {
        let score = state.snapshot().map(|s| s.score).unwrap_or(0);
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", score));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.heading(format!("Best: {}", self.shared_state.best_score()));
            });
        });
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let game = &mut self.config.game;
        let cell_count = game.to_session_settings().field_size().cell_count();
        let max_apples = MAX_APPLE_COUNT.min(cell_count / 4);

        ui.horizontal_wrapped(|ui| {
            let speed = ui.add(
                egui::Slider::new(
                    &mut game.tick_interval_ms,
                    MIN_TICK_INTERVAL_MS as u32..=MAX_TICK_INTERVAL_MS as u32,
                )
                .prefix("Speed: ")
                .suffix(" ms"),
            );
            let apples = ui.add(
                egui::Slider::new(
                    &mut game.apple_count,
                    MIN_APPLE_COUNT as u32..=max_apples as u32,
                )
                .prefix("Apples: "),
            );
            if speed.changed() || apples.changed() {
                self.config_dirty = true;
            }
        });

        ui.horizontal(|ui| {
            if ui.checkbox(&mut self.config.game.warp_walls, "Warp walls").changed() {
                let mode = WallCollisionMode::from_warp(self.config.game.warp_walls);
                self.command_sender
                    .send(SessionCommand::SetWallCollisionMode(mode));
                self.config_dirty = true;
            }
            if ui
                .checkbox(&mut self.config.appearance.gradient, "Gradient")
                .changed()
            {
                self.config_dirty = true;
            }
        });

        ui.small("Speed and apple count apply on restart. Arrows / WASD to steer.");
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save config: {}", e);
        }
        self.config_dirty = false;
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.handle_input(ctx);

        let state = self.shared_state.get_state();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui, &state);
            ui.separator();
            self.render_controls(ui);
            ui.separator();

            match state.snapshot() {
                Some(snapshot) => render_board(ui, snapshot, &self.config.appearance),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.spinner();
                    });
                }
            }
        });

        if let AppState::GameOver { notification, .. } = &state
            && render_game_over(ctx, notification, self.shared_state.best_score())
        {
            self.restart();
        }

        if self.config_dirty && !ctx.is_using_pointer() {
            self.save_config();
        }
    }
}
