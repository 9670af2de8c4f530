//! GeoIP Resolver Port
//!
//! Defines the interface for resolving IP addresses to geographic locations.

use crate::domain::entities::Coordinates;
use crate::domain::error::FlyoverError;
use crate::domain::value_objects::IpAddress;
use async_trait::async_trait;

/// Resolver for IP address to geographic coordinates.
///
/// This is an outbound port that abstracts the geolocation service.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    /// Resolve an IP address to latitude and longitude.
    ///
    /// Fails with the stage set to `GeoLookup`.
    async fn resolve_coordinates(&self, ip: &IpAddress) -> Result<Coordinates, FlyoverError>;
}
