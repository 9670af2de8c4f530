//! ISS Flyover Pass Predictor
//!
//! Implements PassPredictor using the iss-flyover JSON API.

use crate::domain::entities::{Coordinates, PassList};
use crate::domain::error::{FlyoverError, Stage};
use crate::domain::ports::{HttpTransport, PassPredictor};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

pub const DEFAULT_FLYOVER_URL: &str = "https://iss-flyover.herokuapp.com/json/";

const STAGE: Stage = Stage::PassPrediction;

/// Only `response` is read; records are taken as-is without checking that
/// every pass carries a risetime and duration.
#[derive(Debug, Deserialize)]
struct FlyoverResponse {
    response: PassList,
}

/// Pass predictor backed by the iss-flyover service.
pub struct FlyoverPassPredictor {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl FlyoverPassPredictor {
    /// Latitude and longitude are added to `base_url` as `lat`/`lon` query parameters.
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    fn prediction_url(&self, coords: &Coordinates) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}lat={}&lon={}",
            self.base_url, separator, coords.latitude, coords.longitude
        )
    }
}

#[async_trait]
impl PassPredictor for FlyoverPassPredictor {
    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList, FlyoverError> {
        let response = self
            .transport
            .get(&self.prediction_url(coords))
            .await
            .map_err(|source| FlyoverError::transport(STAGE, source))?;

        if !response.is_ok() {
            return Err(FlyoverError::HttpStatus {
                stage: STAGE,
                status: response.status,
                body: response.body,
            });
        }

        let parsed: FlyoverResponse =
            serde_json::from_str(&response.body).map_err(|e| FlyoverError::parse(STAGE, e))?;

        let incomplete = parsed
            .response
            .iter()
            .filter(|p| p.risetime.is_none() || p.duration.is_none())
            .count();
        if incomplete > 0 {
            tracing::debug!(
                "{} of {} passes lack risetime or duration",
                incomplete,
                parsed.response.len()
            );
        }

        Ok(parsed.response)
    }
}
