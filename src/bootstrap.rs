//! Composition root: wires the outbound adapters into a FlyoverService.

use crate::adapters::outbound::{
    FlyoverPassPredictor, IpWhoIsGeoResolver, IpifyIpResolver, ReqwestTransport,
};
use crate::application::FlyoverService;
use crate::config::Config;
use crate::domain::ports::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// Build the service against the real HTTP stack.
pub fn build_flyover_service(cfg: &Config) -> anyhow::Result<FlyoverService> {
    let transport = ReqwestTransport::new(Duration::from_secs(cfg.http_timeout_secs))?;
    Ok(build_with_transport(cfg, Arc::new(transport)))
}

/// Build the service with all three lookups sharing `transport`.
pub fn build_with_transport(cfg: &Config, transport: Arc<dyn HttpTransport>) -> FlyoverService {
    let ip_resolver = Arc::new(IpifyIpResolver::new(
        transport.clone(),
        cfg.ip_lookup_url.clone(),
    ));
    let geo_resolver = Arc::new(IpWhoIsGeoResolver::new(
        transport.clone(),
        cfg.geo_lookup_url.clone(),
    ));
    let pass_predictor = Arc::new(FlyoverPassPredictor::new(
        transport,
        cfg.flyover_url.clone(),
    ));

    FlyoverService::new(ip_resolver, geo_resolver, pass_predictor)
}
