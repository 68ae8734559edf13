use common::engine::session::GameOverNotification;
use common::games::snake::DeathReason;
use eframe::egui;

/// Death screen. Returns true when Restart was clicked.
pub fn render_game_over(
    ctx: &egui::Context,
    notification: &GameOverNotification,
    best_score: u32,
) -> bool {
    let mut restart_clicked = false;

    egui::Window::new("Game Over")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(death_message(notification.reason));
                ui.heading(format!("Final Score: {}", notification.score));
                ui.label(format!("Best: {}", best_score));
                if notification.is_new_best {
                    ui.label(
                        egui::RichText::new("New best score!")
                            .color(egui::Color32::GOLD)
                            .strong(),
                    );
                }
                ui.add_space(10.0);
                if ui.button("Restart").clicked() {
                    restart_clicked = true;
                }
                ui.small("or press Space / Enter");
            });
        });

    restart_clicked
}

fn death_message(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "You hit the wall",
        DeathReason::SelfCollision => "You ran into yourself",
    }
}
