//! ipwho.is Geo Resolver
//!
//! Implements GeoResolver using the ipwho.is geolocation API.
//!
//! ipwho.is reports failures in the payload (`"success": false`) rather than
//! through the HTTP status, so the status code is not consulted here.

use crate::domain::entities::Coordinates;
use crate::domain::error::{FlyoverError, Stage};
use crate::domain::ports::{GeoResolver, HttpTransport};
use crate::domain::value_objects::{CoordinateValue, IpAddress};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

pub const DEFAULT_GEO_LOOKUP_URL: &str = "http://ipwho.is";

const STAGE: Stage = Stage::GeoLookup;

#[derive(Debug, Deserialize)]
struct IpWhoIsResponse {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    ip: Option<Value>,
    #[serde(default)]
    latitude: Option<CoordinateValue>,
    #[serde(default)]
    longitude: Option<CoordinateValue>,
}

/// Geolocation resolver backed by `ipwho.is`.
pub struct IpWhoIsGeoResolver {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl IpWhoIsGeoResolver {
    /// The address is appended to `base_url` as a path segment.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    fn lookup_url(&self, ip: &IpAddress) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), ip)
    }
}

/// Render a payload field the way it appears in the JSON, strings unquoted.
fn render(value: &Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "absent".to_string(),
    }
}

fn require(value: Option<CoordinateValue>, field: &str) -> Result<CoordinateValue, FlyoverError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        Some(_) => Err(FlyoverError::parse(STAGE, format!("empty `{}`", field))),
        None => Err(FlyoverError::parse(STAGE, format!("missing field `{}`", field))),
    }
}

#[async_trait]
impl GeoResolver for IpWhoIsGeoResolver {
    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates, FlyoverError> {
        let response = self
            .transport
            .get(&self.lookup_url(ip))
            .await
            .map_err(|source| FlyoverError::transport(STAGE, source))?;

        let parsed: IpWhoIsResponse =
            serde_json::from_str(&response.body).map_err(|e| FlyoverError::parse(STAGE, e))?;

        if parsed.success != Some(Value::Bool(true)) {
            return Err(FlyoverError::Service {
                stage: STAGE,
                success: render(&parsed.success),
                message: render(&parsed.message),
                ip: render(&parsed.ip),
            });
        }

        let coords = Coordinates {
            latitude: require(parsed.latitude, "latitude")?,
            longitude: require(parsed.longitude, "longitude")?,
        };

        tracing::debug!(
            "coordinates for {}: lat={} lon={}",
            ip,
            coords.latitude,
            coords.longitude
        );

        Ok(coords)
    }
}
