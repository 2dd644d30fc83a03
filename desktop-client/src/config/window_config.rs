use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub cell_size: u32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size < 8 {
            return Err("cell_size must be at least 8".to_string());
        }
        if self.cell_size > 64 {
            return Err("cell_size must not exceed 64".to_string());
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { cell_size: 30 }
    }
}
