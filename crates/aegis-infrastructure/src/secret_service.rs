//! Secret loading.
//!
//! Reads sign-in credentials from `secret.json` in the aegis configuration
//! directory, with environment variables taking precedence. A missing file
//! simply means no credentials are configured; the application then fails
//! closed when an operation needs a session.
//!
//! # Security Note
//!
//! Secrets never appear in log output or error messages.

use crate::paths::AegisPaths;
use aegis_core::auth::Credentials;
use aegis_core::config::SecretConfig;
use aegis_core::error::Result;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Environment variable overriding the sign-in identifier.
pub const ENV_IDENTIFIER: &str = "AEGIS_IDENTIFIER";
/// Environment variable overriding the sign-in secret.
pub const ENV_SECRET: &str = "AEGIS_SECRET";

/// Service loading sign-in credentials.
pub struct SecretService {
    paths: AegisPaths,
    cached: RwLock<Option<SecretConfig>>,
}

impl SecretService {
    /// Creates a service resolving files under the default directory, or an
    /// explicit base directory when given.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            paths: AegisPaths::new(base_dir),
            cached: RwLock::new(None),
        }
    }

    /// Loads the secret configuration, applying environment overrides.
    pub fn load(&self) -> Result<SecretConfig> {
        self.load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`load`](Self::load) with an explicit environment lookup.
    pub fn load_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<SecretConfig> {
        {
            let cached = self.cached.read().unwrap();
            if let Some(secrets) = cached.as_ref() {
                return Ok(secrets.clone());
            }
        }

        let path = self.paths.secret_file()?;
        let mut secrets: SecretConfig = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            SecretConfig::default()
        };

        // Both variables must be present for an override; a lone identifier
        // or secret is ignored.
        if let (Some(identifier), Some(secret)) = (lookup(ENV_IDENTIFIER), lookup(ENV_SECRET)) {
            secrets.credentials = Some(Credentials::new(identifier, secret));
        }

        *self.cached.write().unwrap() = Some(secrets.clone());
        Ok(secrets)
    }
}
