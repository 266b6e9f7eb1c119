//! Configuration loading.
//!
//! Reads `config.toml` from the aegis configuration directory, falls back
//! to defaults when the file is missing, and lets environment variables
//! override file values. The parsed configuration is cached in memory.

use crate::paths::AegisPaths;
use aegis_core::config::{BackendConfig, ConsoleConfig};
use aegis_core::error::Result;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Environment variable overriding the backend base URL.
pub const ENV_BACKEND_URL: &str = "AEGIS_BACKEND_URL";
/// Environment variable overriding the backend API key.
pub const ENV_API_KEY: &str = "AEGIS_API_KEY";

/// Service loading the application configuration.
pub struct ConfigService {
    paths: AegisPaths,
    cached: RwLock<Option<ConsoleConfig>>,
}

impl ConfigService {
    /// Creates a service resolving files under the default directory, or an
    /// explicit base directory when given.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            paths: AegisPaths::new(base_dir),
            cached: RwLock::new(None),
        }
    }

    /// Loads the configuration, applying environment overrides.
    ///
    /// A missing file yields defaults; a malformed file is an error.
    pub fn load(&self) -> Result<ConsoleConfig> {
        self.load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an explicit environment lookup, so
    /// overrides can be exercised deterministically.
    pub fn load_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<ConsoleConfig> {
        {
            let cached = self.cached.read().unwrap();
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let path = self.paths.config_file()?;
        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            toml::from_str(&raw)?
        } else {
            tracing::debug!("no config file at {}, using defaults", path.display());
            ConsoleConfig::default()
        };
        apply_env_overrides(&mut config, &lookup);

        *self.cached.write().unwrap() = Some(config.clone());
        Ok(config)
    }
}

fn apply_env_overrides(config: &mut ConsoleConfig, lookup: &impl Fn(&str) -> Option<String>) {
    if let Some(base_url) = lookup(ENV_BACKEND_URL) {
        match &mut config.backend {
            Some(backend) => backend.base_url = base_url,
            None => {
                config.backend = Some(BackendConfig {
                    base_url,
                    api_key: None,
                });
            }
        }
    }
    if let Some(api_key) = lookup(ENV_API_KEY) {
        // An API key is only meaningful once a backend is configured.
        if let Some(backend) = &mut config.backend {
            backend.api_key = Some(api_key);
        }
    }
}
