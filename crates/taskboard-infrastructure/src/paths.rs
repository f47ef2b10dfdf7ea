//! Unified path management for taskboard files.
//!
//! All persisted state (the auth token and the configuration file) lives
//! under one per-user configuration directory, resolved consistently across
//! platforms.

use std::path::{Path, PathBuf};
use taskboard_core::error::{BoardError, Result};

/// Unified path management for taskboard.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/taskboard/         # Config directory (XDG on Linux/macOS)
/// ├── config.toml              # Application configuration
/// └── token                    # Persisted auth token
/// ```
///
/// A base directory override replaces the platform directory entirely; tests
/// use it to keep state inside a temp dir.
pub struct BoardPaths {
    base: Option<PathBuf>,
}

impl BoardPaths {
    /// Creates a path resolver, optionally rooted at a custom base directory.
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the taskboard configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/taskboard/`)
    /// - `Err(BoardError::Config)`: Could not determine the platform directory
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }

        dirs::config_dir()
            .map(|dir| dir.join("taskboard"))
            .ok_or_else(|| BoardError::config("Cannot find home directory"))
    }

    /// Returns the path of the persisted token file.
    pub fn token_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("token"))
    }

    /// Returns the path of the configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override_wins() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let paths = BoardPaths::new(Some(dir.path()));

        assert_eq!(paths.config_dir().unwrap(), dir.path());
        assert_eq!(paths.token_file().unwrap(), dir.path().join("token"));
        assert_eq!(paths.config_file().unwrap(), dir.path().join("config.toml"));
    }
}
