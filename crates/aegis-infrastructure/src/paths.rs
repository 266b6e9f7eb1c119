//! Unified path management for aegis configuration files.
//!
//! All configuration and secrets live under a single directory so every
//! service resolves files the same way.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.aegis/
//! ├── config.toml              # Application configuration
//! └── secret.json              # Sign-in credentials
//! ```

use aegis_core::error::{AegisError, Result};
use std::path::{Path, PathBuf};

/// Resolves paths for configuration and secret files.
///
/// A base directory can be supplied explicitly (used by tests); otherwise
/// `~/.aegis` is used.
#[derive(Debug, Clone)]
pub struct AegisPaths {
    base_dir: Option<PathBuf>,
}

impl AegisPaths {
    /// Creates a path resolver, optionally rooted at an explicit base
    /// directory instead of the home directory.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the aegis configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base_dir) = &self.base_dir {
            return Ok(base_dir.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(".aegis"))
            .ok_or_else(|| AegisError::config("cannot determine home directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("secret.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_dir_wins() {
        let paths = AegisPaths::new(Some(Path::new("/tmp/aegis-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/aegis-test/config.toml")
        );
        assert_eq!(
            paths.secret_file().unwrap(),
            PathBuf::from("/tmp/aegis-test/secret.json")
        );
    }
}
