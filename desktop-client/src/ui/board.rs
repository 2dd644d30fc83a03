use common::games::snake::{GameStatus, SnakeSnapshot};
use eframe::egui;

use crate::colors;

pub const HEADER_HEIGHT: f32 = 48.0;
pub const FOOTER_HEIGHT: f32 = 48.0;

/// Paints the field and returns `true` when "Play Again" was clicked.
pub fn render_board(
    ui: &mut egui::Ui,
    snapshot: &SnakeSnapshot,
    cell_size: f32,
    paused: bool,
) -> bool {
    let mut play_again = false;

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(format!("Score: {}", snapshot.score))
                .color(colors::SCORE_TEXT)
                .size(28.0)
                .strong(),
        );

        let side = snapshot.grid_size as f32 * cell_size;
        let (response, painter) =
            ui.allocate_painter(egui::Vec2::new(side, side), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, colors::BACKGROUND);

        let cell_rect = |x: usize, y: usize| {
            egui::Rect::from_min_size(
                rect.min + egui::vec2(x as f32 * cell_size, y as f32 * cell_size),
                egui::vec2(cell_size, cell_size),
            )
        };

        if let Some(food) = snapshot.food {
            painter.rect_filled(cell_rect(food.x, food.y).shrink(1.0), 3.0, colors::FOOD);
        }

        let len = snapshot.cells.len();
        // Tail first so the head stays on top when cells overlap after a collision.
        for (i, segment) in snapshot.cells.iter().enumerate().rev() {
            painter.rect_filled(
                cell_rect(segment.x, segment.y).shrink(1.0),
                2.0,
                colors::segment_color(i, len),
            );
        }

        let overlay = match snapshot.status {
            GameStatus::Running if paused => Some(("Paused", egui::Color32::WHITE)),
            GameStatus::Running => None,
            GameStatus::Lost(_) => Some(("Game Over!", colors::GAME_OVER_TEXT)),
            GameStatus::Won => Some(("You Win!", colors::WIN_TEXT)),
        };
        if let Some((text, color)) = overlay {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                text,
                egui::FontId::proportional(48.0),
                color,
            );
        }

        if snapshot.is_game_over() {
            ui.add_space(6.0);
            play_again = ui
                .button(egui::RichText::new("Play Again").size(20.0))
                .clicked();
        }
    });

    play_again
}
