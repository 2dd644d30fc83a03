use common::games::snake::Direction;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    TogglePause,
    Restart,
}

pub fn map_key(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::ArrowUp | egui::Key::W => Some(Action::Turn(Direction::Up)),
        egui::Key::ArrowRight | egui::Key::D => Some(Action::Turn(Direction::Right)),
        egui::Key::ArrowDown | egui::Key::S => Some(Action::Turn(Direction::Down)),
        egui::Key::ArrowLeft | egui::Key::A => Some(Action::Turn(Direction::Left)),
        egui::Key::P | egui::Key::Space => Some(Action::TogglePause),
        egui::Key::R | egui::Key::Enter => Some(Action::Restart),
        _ => None,
    }
}

/// Key presses of this frame, in the order they happened. Auto-repeat is ignored.
pub fn poll_actions(ctx: &egui::Context) -> Vec<Action> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => map_key(*key),
                _ => None,
            })
            .collect()
    })
}
