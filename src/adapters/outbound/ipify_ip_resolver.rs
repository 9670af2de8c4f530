//! ipify Public IP Resolver
//!
//! Implements IpResolver using the ipify echo service.

use crate::domain::error::{FlyoverError, Stage};
use crate::domain::ports::{HttpTransport, IpResolver};
use crate::domain::value_objects::IpAddress;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

const STAGE: Stage = Stage::IpLookup;

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// Public IP resolver backed by `api.ipify.org`.
pub struct IpifyIpResolver {
    transport: Arc<dyn HttpTransport>,
    url: String,
}

impl IpifyIpResolver {
    /// `url` is requested as-is and must return `{"ip": "..."}`.
    pub fn new(transport: Arc<dyn HttpTransport>, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: url.into(),
        }
    }
}

#[async_trait]
impl IpResolver for IpifyIpResolver {
    async fn resolve_my_ip(&self) -> Result<IpAddress, FlyoverError> {
        let response = self
            .transport
            .get(&self.url)
            .await
            .map_err(|source| FlyoverError::transport(STAGE, source))?;

        if !response.is_ok() {
            return Err(FlyoverError::HttpStatus {
                stage: STAGE,
                status: response.status,
                body: response.body,
            });
        }

        let parsed: IpifyResponse =
            serde_json::from_str(&response.body).map_err(|e| FlyoverError::parse(STAGE, e))?;

        let ip = IpAddress::parse(&parsed.ip).map_err(|e| {
            FlyoverError::parse(STAGE, format!("{:?} is not an IP address: {}", parsed.ip, e))
        })?;

        tracing::debug!("public IP resolved: {}", ip);
        Ok(ip)
    }
}
