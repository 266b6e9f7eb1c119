use crate::auth::Credentials;
use serde::{Deserialize, Serialize};

fn default_scan_interval_ms() -> u64 {
    2000
}

fn default_reply_interval_ms() -> u64 {
    1000
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConsoleConfig {
    /// Hosted backend to authenticate against and mirror records to.
    /// When absent, the in-memory development backend is used.
    #[serde(default)]
    pub backend: Option<BackendConfig>,
    #[serde(default = "default_scan_interval_ms")]
    pub scan_interval_ms: u64,
    #[serde(default = "default_reply_interval_ms")]
    pub reply_interval_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend: None,
            scan_interval_ms: default_scan_interval_ms(),
            reply_interval_ms: default_reply_interval_ms(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert!(config.backend.is_none());
        assert_eq!(config.scan_interval_ms, 2000);
        assert_eq!(config.reply_interval_ms, 1000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ConsoleConfig = toml::from_str("scan_interval_ms = 50").unwrap();
        assert_eq!(config.scan_interval_ms, 50);
        assert_eq!(config.reply_interval_ms, 1000);
        assert!(config.backend.is_none());
    }

    #[test]
    fn test_backend_section() {
        let raw = r#"
            [backend]
            base_url = "https://backend.example.com"
            api_key = "public-anon-key"
        "#;
        let config: ConsoleConfig = toml::from_str(raw).unwrap();
        let backend = config.backend.expect("backend section should parse");
        assert_eq!(backend.base_url, "https://backend.example.com");
        assert_eq!(backend.api_key.as_deref(), Some("public-anon-key"));
    }
}
