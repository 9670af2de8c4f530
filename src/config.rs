use crate::adapters::outbound::{
    DEFAULT_FLYOVER_URL, DEFAULT_GEO_LOOKUP_URL, DEFAULT_IP_LOOKUP_URL,
};
use serde::Deserialize;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Upstream services
    pub ip_lookup_url: String,
    pub geo_lookup_url: String,
    pub flyover_url: String,

    // Transport
    pub http_timeout_secs: u64,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_lookup_url: DEFAULT_IP_LOOKUP_URL.to_string(),
            geo_lookup_url: DEFAULT_GEO_LOOKUP_URL.to_string(),
            flyover_url: DEFAULT_FLYOVER_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            debug: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ip_lookup_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("ip_lookup_url"));
        }
        if self.geo_lookup_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("geo_lookup_url"));
        }
        if self.flyover_url.trim().is_empty() {
            return Err(ConfigError::EmptyUrl("flyover_url"));
        }
        if self.http_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyUrl(&'static str),
    #[error("http_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Build the configuration from an arbitrary variable source.
pub fn load_config_from<F>(var: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let ip_lookup_url = var("ISSFLYOVER_IP_LOOKUP_URL")
        .unwrap_or_else(|| DEFAULT_IP_LOOKUP_URL.to_string());

    let geo_lookup_url = var("ISSFLYOVER_GEO_LOOKUP_URL")
        .unwrap_or_else(|| DEFAULT_GEO_LOOKUP_URL.to_string());

    let flyover_url = var("ISSFLYOVER_FLYOVER_URL")
        .unwrap_or_else(|| DEFAULT_FLYOVER_URL.to_string());

    let http_timeout_secs = var("ISSFLYOVER_HTTP_TIMEOUT_SECS")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

    let debug = var("DEBUG").is_some();

    let cfg = Config {
        ip_lookup_url,
        geo_lookup_url,
        flyover_url,
        http_timeout_secs,
        debug,
    };
    cfg.validate()?;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.ip_lookup_url, "https://api.ipify.org?format=json");
        assert_eq!(cfg.geo_lookup_url, "http://ipwho.is");
        assert_eq!(cfg.flyover_url, "https://iss-flyover.herokuapp.com/json/");
        assert_eq!(cfg.http_timeout_secs, 10);
        assert!(!cfg.debug);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_config_defaults() {
        let cfg = load(&[]).unwrap();
        let default = Config::default();
        assert_eq!(cfg.ip_lookup_url, default.ip_lookup_url);
        assert_eq!(cfg.geo_lookup_url, default.geo_lookup_url);
        assert_eq!(cfg.flyover_url, default.flyover_url);
        assert_eq!(cfg.http_timeout_secs, default.http_timeout_secs);
    }

    #[test]
    fn test_load_config_with_custom_urls() {
        let cfg = load(&[
            ("ISSFLYOVER_IP_LOOKUP_URL", "http://127.0.0.1:9000/ip"),
            ("ISSFLYOVER_GEO_LOOKUP_URL", "http://127.0.0.1:9000/geo"),
            ("ISSFLYOVER_FLYOVER_URL", "http://127.0.0.1:9000/json/"),
        ])
        .unwrap();
        assert_eq!(cfg.ip_lookup_url, "http://127.0.0.1:9000/ip");
        assert_eq!(cfg.geo_lookup_url, "http://127.0.0.1:9000/geo");
        assert_eq!(cfg.flyover_url, "http://127.0.0.1:9000/json/");
    }

    #[test]
    fn test_load_config_with_timeout() {
        let cfg = load(&[("ISSFLYOVER_HTTP_TIMEOUT_SECS", "30")]).unwrap();
        assert_eq!(cfg.http_timeout_secs, 30);
    }

    #[test]
    fn test_load_config_parse_error_uses_default() {
        let cfg = load(&[("ISSFLYOVER_HTTP_TIMEOUT_SECS", "not_a_number")]).unwrap();
        assert_eq!(cfg.http_timeout_secs, 10); // default
    }

    #[test]
    fn test_load_config_with_debug() {
        let cfg = load(&[("DEBUG", "1")]).unwrap();
        assert!(cfg.debug);
    }

    #[test]
    fn test_load_config_rejects_empty_url() {
        let err = load(&[("ISSFLYOVER_GEO_LOOKUP_URL", "  ")]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::EmptyUrl("geo_lookup_url"))
        );
    }

    #[test]
    fn test_load_config_rejects_zero_timeout() {
        let err = load(&[("ISSFLYOVER_HTTP_TIMEOUT_SECS", "0")]).unwrap_err();
        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_config_debug() {
        let cfg = Config::default();
        let debug_str = format!("{:?}", cfg);
        assert!(debug_str.contains("flyover_url"));
        assert!(debug_str.contains("ipwho.is"));
    }
}
