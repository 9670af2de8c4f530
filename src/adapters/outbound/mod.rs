mod flyover_pass_predictor;
mod ipify_ip_resolver;
mod ipwhois_geo_resolver;
mod reqwest_transport;

#[cfg(test)]
pub(crate) mod scripted_transport;

pub use flyover_pass_predictor::{FlyoverPassPredictor, DEFAULT_FLYOVER_URL};
pub use ipify_ip_resolver::{IpifyIpResolver, DEFAULT_IP_LOOKUP_URL};
pub use ipwhois_geo_resolver::{IpWhoIsGeoResolver, DEFAULT_GEO_LOOKUP_URL};
pub use reqwest_transport::ReqwestTransport;
