//! HTTP Transport Port
//!
//! Defines the single capability the lookups need from the network:
//! perform a GET and hand back status and body.

use crate::domain::error::TransportError;
use async_trait::async_trait;

/// Status and raw body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Only 200 counts as success; other 2xx codes are treated as failures.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Outbound HTTP client.
///
/// Implementations may pool connections internally but must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue one GET. Any HTTP status is a successful transport outcome.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}
