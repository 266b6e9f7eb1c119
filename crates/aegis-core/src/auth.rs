//! Authentication gateway trait and session types.
//!
//! Defines the interface for the external authentication collaborator. The
//! application only ever checks whether a session exists and signs in when
//! one does not; it never inspects token contents.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque authenticated session issued by the auth gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    access_token: String,
}

impl Session {
    /// Creates a session wrapping an access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Returns the raw access token for use in outgoing requests.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

/// A credential pair used to establish a session when none exists.
///
/// Credentials are supplied through configuration, never hardcoded. When no
/// credentials are configured and no session exists, operations fail closed
/// with an authentication error.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account identifier (e.g., an email address).
    pub identifier: String,
    /// Account secret.
    pub secret: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

// The secret must never reach logs or error output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// An abstract gateway for session management.
///
/// This trait decouples the application from the specific authentication
/// backend (hosted service, local development gateway, test double).
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Returns the current session, if any.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: an authenticated session exists
    /// - `Ok(None)`: no session
    /// - `Err(_)`: the gateway could not be consulted
    async fn current_session(&self) -> Result<Option<Session>>;

    /// Establishes a session from a credential pair.
    ///
    /// # Errors
    ///
    /// Returns `AegisError::Auth` on invalid credentials or an unreachable
    /// service.
    async fn sign_in(&self, identifier: &str, secret: &str) -> Result<Session>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("operator@example.com", "hunter2");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("operator@example.com"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_session_exposes_token() {
        let session = Session::new("abc123");
        assert_eq!(session.access_token(), "abc123");
    }
}
