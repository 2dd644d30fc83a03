use std::time::Duration;

use common::config::Validate;
use common::games::snake::{SnakeSettings, DEFAULT_GRID_SIZE, DEFAULT_TICK_INTERVAL_MS};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: u32,
    pub tick_interval_ms: u32,
    /// Fixed food sequence for reproducible runs. A fresh seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn to_settings(&self) -> SnakeSettings {
        SnakeSettings {
            grid_size: self.grid_size as usize,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.to_settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE as u32,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS as u32,
            seed: None,
        }
    }
}
