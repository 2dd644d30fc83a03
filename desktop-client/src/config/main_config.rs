use std::path::PathBuf;

use common::config::{ConfigManager, FileConfigSource, Validate, YamlFormat};
use serde::{Deserialize, Serialize};

use super::{GameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "snake_config.yaml";

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Config stored next to the executable unless `path` points elsewhere.
pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileConfigSource, Config, YamlFormat> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(default_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub window: WindowConfig,
    #[serde(default)]
    pub verbose_logging: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.window.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigError, ConfigFormat, ConfigSource};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert_eq!(Config::default().game.grid_size, 20);
        assert_eq!(Config::default().game.tick_interval_ms, 150);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let format = YamlFormat::new();
        let serialized = format.serialize(&default_config).unwrap();
        let deserialized: Config = format.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            game: GameConfig {
                grid_size: 12,
                tick_interval_ms: 100,
                seed: Some(99),
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(file_path.clone()));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let reloaded = get_config_manager(Some(file_path.clone()));
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_missing_seed_and_verbose_fields_use_defaults() {
        let content = r#"
            game:
              grid_size: 15
              tick_interval_ms: 200
            window:
              cell_size: 24
        "#;
        let file_path = get_temp_file_path();
        FileConfigSource::new(file_path.clone()).write(content).unwrap();

        let config = get_config_manager(Some(file_path.clone())).get_config().unwrap();
        assert_eq!(config.game.seed, None);
        assert!(!config.verbose_logging);
        assert_eq!(config.window.cell_size, 24);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            game:
              grid_size: 3
              tick_interval_ms: 150
            window:
              cell_size: 30
        "#;
        let file_path = get_temp_file_path();
        FileConfigSource::new(file_path.clone())
            .write(invalid_config_content)
            .unwrap();

        let result = get_config_manager(Some(file_path.clone())).get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let _ = std::fs::remove_file(file_path);
    }
}
