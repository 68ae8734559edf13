use common::games::snake::{Point, SnakeSnapshot};
use eframe::egui;

use crate::colors::{APPLE_COLOR, parse_hex_color_or_default, segment_color};
use crate::config::AppearanceConfig;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x1e, 0x24);

/// Square canvas edge for the given free area.
pub fn canvas_side(available: egui::Vec2) -> f32 {
    (available.x * 0.8).min(available.y * 0.7).max(0.0)
}

pub fn cell_rect(origin: egui::Pos2, tile_size: f32, point: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + point.x as f32 * tile_size,
            origin.y + point.y as f32 * tile_size,
        ),
        egui::vec2(tile_size, tile_size),
    )
}

pub fn render_board(ui: &mut egui::Ui, snapshot: &SnakeSnapshot, appearance: &AppearanceConfig) {
    let side = canvas_side(ui.available_size());
    let cells_per_side = snapshot.field_size.width.max(snapshot.field_size.height).max(1);
    let tile_size = side / cells_per_side as f32;

    ui.vertical_centered(|ui| {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND_COLOR);

        for apple in &snapshot.apples {
            painter.rect_filled(cell_rect(origin, tile_size, *apple), 0.0, APPLE_COLOR);
        }

        let accent = parse_hex_color_or_default(&appearance.accent_color);
        let len = snapshot.segments.len();
        for (i, segment) in snapshot.segments.iter().enumerate() {
            let color = segment_color(i, len, appearance.gradient, accent).to_color32();
            painter.rect_filled(cell_rect(origin, tile_size, *segment), 0.0, color);
        }
    });
}
