use super::types::{GameStatus, Point};

/// Owned copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSnapshot {
    pub grid_size: usize,
    /// Head first.
    pub cells: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub status: GameStatus,
}

impl SnakeSnapshot {
    pub fn is_game_over(&self) -> bool {
        !self.status.is_running()
    }
}
