//! Pass Predictor Port

use crate::domain::entities::{Coordinates, PassList};
use crate::domain::error::FlyoverError;
use async_trait::async_trait;

/// Source of upcoming ISS passes for a location.
#[async_trait]
pub trait PassPredictor: Send + Sync {
    /// Predict the next passes over `coords`, in upstream order.
    async fn predict_passes(&self, coords: &Coordinates) -> Result<PassList, FlyoverError>;
}
