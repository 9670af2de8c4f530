//! Reqwest HTTP Transport
//!
//! Implements HttpTransport on top of a pooled reqwest client.

use crate::domain::error::{TransportError, TransportErrorKind};
use crate::domain::ports::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP transport backed by `reqwest::Client`.
///
/// The request timeout lives here, not in the lookups themselves.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("iss-flyover/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;

        tracing::trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(HttpResponse { status, body })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_body() || err.is_decode() {
        TransportErrorKind::Body
    } else if err.is_builder() || err.is_request() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };

    TransportError::new(kind, err.to_string()).with_source(err)
}
