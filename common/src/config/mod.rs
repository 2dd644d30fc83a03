mod config_error;
mod config_format;
mod config_manager;
mod config_source;
mod validate;

pub use config_error::ConfigError;
pub use config_format::{ConfigFormat, YamlFormat};
pub use config_manager::ConfigManager;
pub use config_source::{ConfigSource, FileConfigSource};
#[cfg(test)]
pub(crate) use config_source::MemoryConfigSource;
pub use validate::Validate;
