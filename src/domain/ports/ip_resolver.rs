//! Public IP Resolver Port

use crate::domain::error::FlyoverError;
use crate::domain::value_objects::IpAddress;
use async_trait::async_trait;

/// Resolver for the caller's own public IP address.
#[async_trait]
pub trait IpResolver: Send + Sync {
    /// Ask an external echo service which address our requests come from.
    async fn resolve_my_ip(&self) -> Result<IpAddress, FlyoverError>;
}
