use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;

/// Where serialized config text comes from. `Ok(None)` means "nothing stored yet".
pub trait ConfigSource {
    fn read(&self) -> Result<Option<String>, ConfigError>;
    fn write(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfigSource {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io(format!("{}: {}", self.path.display(), err))),
        }
    }

    fn write(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.path, content)
            .map_err(|e| ConfigError::Io(format!("{}: {}", self.path.display(), e)))
    }
}

/// In-memory source for exercising `ConfigManager` without touching the disk.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryConfigSource {
    content: std::sync::Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryConfigSource {
    pub(crate) fn new(content: Option<String>) -> Self {
        Self {
            content: std::sync::Mutex::new(content),
        }
    }
}

#[cfg(test)]
impl ConfigSource for MemoryConfigSource {
    fn read(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content.lock().unwrap().clone())
    }

    fn write(&self, content: &str) -> Result<(), ConfigError> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }
}
