//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the board configuration
//! from the configuration file (~/.config/taskboard/config.toml).

use crate::paths::BoardPaths;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use taskboard_core::config::BoardConfig;
use taskboard_core::error::Result;

/// Configuration service that loads and caches the board configuration.
///
/// This implementation reads the configuration from config.toml and caches
/// it to avoid repeated file I/O operations. A missing or unreadable file
/// falls back to the default configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<BoardConfig>>>,
    config_path: PathBuf,
}

impl ConfigService {
    /// Creates a ConfigService at the default platform location.
    ///
    /// The configuration is loaded lazily on first access to avoid blocking
    /// during initialization.
    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a ConfigService with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let config_path = BoardPaths::new(base_dir).config_file()?;
        Ok(Self {
            config: Arc::new(RwLock::new(None)),
            config_path,
        })
    }

    /// Gets the board configuration, loading from file if not cached.
    pub fn get_config(&self) -> BoardConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!(
                "Falling back to default config, could not read {}: {err}",
                self.config_path.display()
            );
            BoardConfig::default()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads BoardConfig from the config file. A missing file is the
    /// default configuration, not an error.
    fn load_config(&self) -> Result<BoardConfig> {
        match fs::read_to_string(&self.config_path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BoardConfig::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_core::config::DEFAULT_BASE_URL;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(Some(dir.path())).unwrap();

        let config = service.get_config();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "base_url = \"https://tasks.example.com\"\n",
        )
        .unwrap();
        let service = ConfigService::new(Some(dir.path())).unwrap();

        let config = service.get_config();

        assert_eq!(config.base_url, "https://tasks.example.com");
    }

    #[test]
    fn test_cache_persists_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::new(Some(dir.path())).unwrap();
        assert_eq!(service.get_config().base_url, DEFAULT_BASE_URL);

        fs::write(
            dir.path().join("config.toml"),
            "base_url = \"https://tasks.example.com\"\n",
        )
        .unwrap();

        // Still the cached value
        assert_eq!(service.get_config().base_url, DEFAULT_BASE_URL);

        service.invalidate_cache();
        assert_eq!(service.get_config().base_url, "https://tasks.example.com");
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "base_url = [not toml").unwrap();
        let service = ConfigService::new(Some(dir.path())).unwrap();

        assert_eq!(service.get_config().base_url, DEFAULT_BASE_URL);
    }
}
