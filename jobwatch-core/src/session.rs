//! Authenticated session contract
//!
//! The monitor never authenticates on its own; it consumes an already
//! established session through the `AuthSession` capability bundle. Keeping
//! this a trait lets cached-token sessions, freshly authenticated sessions,
//! and test fakes all drive the same monitor.

use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Service catalog returned alongside an auth token
///
/// Carried opaquely: the monitor never inspects it, and callers that need
/// endpoint lookup deserialize it themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog(pub serde_json::Value);

/// Capability bundle exposed by an authenticated session
///
/// Implementations must be safe to share across many concurrent monitor
/// workers; all accessors are read-only.
pub trait AuthSession: Send + Sync {
    /// Auth token identifier, sent as the `X-Auth-Token` header
    fn id(&self) -> &str;

    /// Opaque token expiry as reported by the identity service
    fn expires(&self) -> &str;

    /// Service catalog issued with the token
    fn service_catalog(&self) -> &ServiceCatalog;

    /// Shared HTTP execution capability
    ///
    /// Injected per session rather than held as a process-wide singleton so
    /// tests and individual jobs can carry their own client configuration.
    fn http(&self) -> &Client;
}

/// Session backed by an already-issued token
///
/// The simplest `AuthSession` implementation: no renewal, no caching. Useful
/// when the caller performed the credential exchange elsewhere, and in tests.
#[derive(Debug, Clone)]
pub struct StaticSession {
    token_id: String,
    expires: String,
    catalog: ServiceCatalog,
    client: Client,
}

impl StaticSession {
    pub fn new(token_id: impl Into<String>, expires: impl Into<String>, client: Client) -> Self {
        Self {
            token_id: token_id.into(),
            expires: expires.into(),
            catalog: ServiceCatalog::default(),
            client,
        }
    }

    /// Attach the service catalog issued with the token
    pub fn with_catalog(mut self, catalog: ServiceCatalog) -> Self {
        self.catalog = catalog;
        self
    }
}

impl AuthSession for StaticSession {
    fn id(&self) -> &str {
        &self.token_id
    }

    fn expires(&self) -> &str {
        &self.expires
    }

    fn service_catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    fn http(&self) -> &Client {
        &self.client
    }
}
