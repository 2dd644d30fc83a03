use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use super::{ConfigError, ConfigFormat, ConfigSource, FileConfigSource, Validate, YamlFormat};

/// Loads a typed config once and hands out clones of the cached value.
pub struct ConfigManager<TSource, TConfig, TFormat = YamlFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    format: TFormat,
    source: TSource,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileConfigSource, TConfig, YamlFormat>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileConfigSource::new(path), YamlFormat)
    }
}

impl<TSource, TConfig, TFormat> ConfigManager<TSource, TConfig, TFormat>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TFormat: ConfigFormat<TConfig>,
{
    pub fn new(source: TSource, format: TFormat) -> Self {
        Self {
            format,
            source,
            config: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &TSource {
        &self.source
    }

    /// Returns the stored config, or `TConfig::default()` when the source is empty.
    /// A stored config that fails validation is an error, never silently replaced.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.source.read()? else {
            return Ok(TConfig::default());
        };

        let config = self.format.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized = self.format.serialize(config)?;
        self.source.write(&serialized)?;

        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigSource;

    #[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
    struct Sample {
        size: u32,
    }

    impl Default for Sample {
        fn default() -> Self {
            Self { size: 20 }
        }
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.size == 0 {
                return Err("size must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_empty_source_returns_default() {
        let manager: ConfigManager<_, Sample, _> =
            ConfigManager::new(MemoryConfigSource::default(), YamlFormat);
        assert_eq!(manager.get_config().unwrap(), Sample::default());
    }

    #[test]
    fn test_set_then_get_returns_stored_value() {
        let manager = ConfigManager::new(MemoryConfigSource::default(), YamlFormat);
        manager.set_config(&Sample { size: 7 }).unwrap();
        assert_eq!(manager.get_config().unwrap(), Sample { size: 7 });

        let stored = manager.source().read().unwrap().unwrap();
        assert!(stored.contains("size: 7"));
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let source = MemoryConfigSource::new(Some("size: 0\n".to_string()));
        let manager: ConfigManager<_, Sample, _> = ConfigManager::new(source, YamlFormat);
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unparseable_config_is_parse_error() {
        let source = MemoryConfigSource::new(Some("size: [not a number\n".to_string()));
        let manager: ConfigManager<_, Sample, _> = ConfigManager::new(source, YamlFormat);
        assert!(matches!(manager.get_config(), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_set_invalid_config_does_not_write() {
        let manager = ConfigManager::new(MemoryConfigSource::default(), YamlFormat);
        assert!(manager.set_config(&Sample { size: 0 }).is_err());
        assert!(manager.source().read().unwrap().is_none());
    }
}
