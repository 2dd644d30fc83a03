use std::time::Duration;

use crate::config::Validate;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

pub const MIN_GRID_SIZE: usize = 5;
pub const MAX_GRID_SIZE: usize = 50;
pub const MIN_TICK_INTERVAL_MS: u64 = 50;
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeSettings {
    pub grid_size: usize,
    pub tick_interval: Duration,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(format!(
                "grid_size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        let tick_ms = self.tick_interval.as_millis();
        if tick_ms < MIN_TICK_INTERVAL_MS as u128 || tick_ms > MAX_TICK_INTERVAL_MS as u128 {
            return Err(format!(
                "tick interval must be between {}ms and {}ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            ));
        }
        Ok(())
    }
}
