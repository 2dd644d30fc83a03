mod game_state;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use game_state::SnakeGameState;
pub use settings::{
    SnakeSettings, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS, MAX_GRID_SIZE,
    MAX_TICK_INTERVAL_MS, MIN_GRID_SIZE, MIN_TICK_INTERVAL_MS,
};
pub use snake::Snake;
pub use snapshot::SnakeSnapshot;
pub use types::{DeathReason, Direction, GameStatus, Point};
