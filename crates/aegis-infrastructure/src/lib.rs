//! Infrastructure layer: concrete implementations of the boundary
//! collaborators defined in `aegis-core`.
//!
//! Two backends are provided for authentication and record storage: an
//! in-memory pair for development and offline use, and an HTTP pair for a
//! hosted backend. Configuration and secrets are loaded from the filesystem
//! with environment overrides.

pub mod config_service;
pub mod http_auth_gateway;
pub mod http_record_store;
pub mod in_memory_auth_gateway;
pub mod in_memory_record_store;
pub mod paths;
pub mod secret_service;
pub mod tokio_delay;

pub use config_service::ConfigService;
pub use http_auth_gateway::HttpAuthGateway;
pub use http_record_store::HttpRecordStore;
pub use in_memory_auth_gateway::InMemoryAuthGateway;
pub use in_memory_record_store::InMemoryRecordStore;
pub use paths::AegisPaths;
pub use secret_service::SecretService;
pub use tokio_delay::TokioDelay;
