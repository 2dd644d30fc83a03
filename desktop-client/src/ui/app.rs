use std::time::Instant;

use eframe::egui;

use crate::colors;
use crate::game_loop::GameLoop;
use crate::input::{self, Action};

use super::board::render_board;

pub struct SnakeApp {
    game_loop: GameLoop,
    cell_size: f32,
    last_frame: Instant,
}

impl SnakeApp {
    pub fn new(game_loop: GameLoop, cell_size: f32) -> Self {
        Self {
            game_loop,
            cell_size,
            last_frame: Instant::now(),
        }
    }

    fn handle_actions(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Turn(direction) => self.game_loop.push_input(direction),
                Action::TogglePause => self.game_loop.toggle_pause(),
                Action::Restart => {
                    if self.game_loop.state().is_game_over() {
                        self.game_loop.restart();
                    }
                }
            }
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_actions(input::poll_actions(ctx));

        let now = Instant::now();
        self.game_loop.advance(now - self.last_frame);
        self.last_frame = now;

        let snapshot = self.game_loop.state().snapshot();
        let paused = self.game_loop.is_paused();
        let mut play_again = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BACKGROUND).inner_margin(8.0))
            .show(ctx, |ui| {
                play_again = render_board(ui, &snapshot, self.cell_size, paused);
            });

        if play_again {
            self.game_loop.restart();
            ctx.request_repaint();
        } else if !snapshot.is_game_over() && !paused {
            ctx.request_repaint_after(self.game_loop.time_until_next_tick());
        }
    }
}
