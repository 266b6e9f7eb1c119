//! Error types for the Aegis application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Aegis application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum AegisError {
    /// A scan was requested while another one is still running
    #[error("A scan is already in progress")]
    ScanInProgress,

    /// Authentication error (sign-in failed or no usable credentials)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Record store error (persistence layer)
    #[error("Record store error: {collection} - {message}")]
    Store {
        collection: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AegisError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Creates a Store error
    pub fn store(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            collection: collection.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a ScanInProgress error
    pub fn is_scan_in_progress(&self) -> bool {
        matches!(self, Self::ScanInProgress)
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }

    /// Check if this is a Store error
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store { .. })
    }

    /// Check if this is a Config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AegisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AegisError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AegisError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AegisError>`.
pub type Result<T> = std::result::Result<T, AegisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_helpers() {
        assert!(AegisError::auth("bad secret").is_auth());
        assert!(AegisError::store("scan_results", "timeout").is_store());
        assert!(AegisError::config("missing file").is_config());
        assert!(AegisError::ScanInProgress.is_scan_in_progress());
    }

    #[test]
    fn test_store_error_message_includes_collection() {
        let err = AegisError::store("chat_history", "connection reset");
        assert_eq!(
            err.to_string(),
            "Record store error: chat_history - connection reset"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AegisError = io_err.into();
        assert!(matches!(err, AegisError::Io { .. }));
    }
}
