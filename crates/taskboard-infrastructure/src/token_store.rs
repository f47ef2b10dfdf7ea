//! File-backed token store implementation.
//!
//! This module persists the single auth token as a file named `token` in the
//! taskboard config directory.

use crate::paths::BoardPaths;
use std::fs;
use std::path::{Path, PathBuf};
use taskboard_core::error::Result;
use taskboard_core::session::TokenStore;

/// Stores the auth token in a plain file.
///
/// Missing files read as "not logged in" rather than as errors, and clearing
/// an already-absent token is a no-op, so logout is idempotent.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store at the default platform location.
    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Creates a store with a custom base directory (for testing).
    pub fn new(base_dir: Option<&Path>) -> Result<Self> {
        let path = BoardPaths::new(base_dir).token_file()?;
        Ok(Self { path })
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim_end_matches('\n').to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        restrict_permissions(&self.path)?;
        tracing::debug!("Stored auth token at {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// The token file must be readable by the owner only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
