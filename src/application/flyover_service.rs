//! Flyover Service - Main application use case
//!
//! Chains the three lookups: public IP, then coordinates for that IP, then
//! ISS passes over those coordinates.

use crate::domain::entities::PassList;
use crate::domain::error::FlyoverError;
use crate::domain::ports::{GeoResolver, IpResolver, PassPredictor};
use std::sync::Arc;

/// Flyover service - main application use case.
///
/// Each step starts only after the previous one has produced its value, and
/// the first failure ends the run. Errors are returned exactly as the failing
/// step produced them; they already carry the stage.
///
/// The service holds no per-call state, so one instance can serve any number
/// of concurrent lookups.
pub struct FlyoverService {
    ip_resolver: Arc<dyn IpResolver>,
    geo_resolver: Arc<dyn GeoResolver>,
    pass_predictor: Arc<dyn PassPredictor>,
}

impl FlyoverService {
    /// Create a new flyover service.
    pub fn new(
        ip_resolver: Arc<dyn IpResolver>,
        geo_resolver: Arc<dyn GeoResolver>,
        pass_predictor: Arc<dyn PassPredictor>,
    ) -> Self {
        Self {
            ip_resolver,
            geo_resolver,
            pass_predictor,
        }
    }

    /// Find the next ISS passes over wherever this process is running.
    ///
    /// # Returns
    /// The passes in upstream order, or the error of the first step that failed
    pub async fn next_passes_for_current_location(&self) -> Result<PassList, FlyoverError> {
        // 1. Who are we?
        let ip = self
            .ip_resolver
            .resolve_my_ip()
            .await
            .map_err(Self::log_failure)?;
        tracing::info!("public IP is {}", ip);

        // 2. Where are we?
        let coords = self
            .geo_resolver
            .resolve_coordinates(&ip)
            .await
            .map_err(Self::log_failure)?;
        tracing::info!(
            "located {} at lat={} lon={}",
            ip,
            coords.latitude,
            coords.longitude
        );

        // 3. When does the station come over?
        let passes = self
            .pass_predictor
            .predict_passes(&coords)
            .await
            .map_err(Self::log_failure)?;
        tracing::info!("{} upcoming passes", passes.len());

        Ok(passes)
    }

    fn log_failure(err: FlyoverError) -> FlyoverError {
        tracing::warn!("{} failed: {}", err.stage().as_str(), err);
        err
    }
}
