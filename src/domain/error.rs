//! Error taxonomy for the flyover lookup chain.
//!
//! Every failure names the stage that produced it so callers can tell an IP
//! lookup outage from a geolocation refusal without inspecting message text.

use std::fmt;
use thiserror::Error;

/// Step of the lookup chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    IpLookup,
    GeoLookup,
    PassPrediction,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IpLookup => "ip_lookup",
            Self::GeoLookup => "geo_lookup",
            Self::PassPrediction => "pass_prediction",
        }
    }

    /// Human readable activity, used in error messages.
    pub fn activity(&self) -> &'static str {
        match self {
            Self::IpLookup => "fetching IP",
            Self::GeoLookup => "fetching coordinates",
            Self::PassPrediction => "fetching ISS pass times",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.activity())
    }
}

/// What went wrong below the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// DNS or TCP/TLS connection failure
    Connect,
    /// Request did not complete in time
    Timeout,
    /// Response body could not be read
    Body,
    /// URL could not be turned into a request
    Request,
    Other,
}

/// A GET that could not complete.
///
/// The client library's own error, when there is one, stays reachable through
/// `source()`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}

/// Coarse failure class, for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    HttpStatus,
    Service,
    Parse,
}

/// Failure of one of the three lookups.
#[derive(Debug, Error)]
pub enum FlyoverError {
    #[error("transport error when {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: TransportError,
    },

    #[error("Status Code {status} when {stage}: {body}")]
    HttpStatus {
        stage: Stage,
        status: u16,
        body: String,
    },

    #[error(
        "Success status was {success}. Server message says: {message} when fetching for IP {ip}"
    )]
    Service {
        stage: Stage,
        success: String,
        message: String,
        ip: String,
    },

    #[error("invalid response when {stage}: {reason}")]
    Parse { stage: Stage, reason: String },
}

impl FlyoverError {
    pub fn transport(stage: Stage, source: TransportError) -> Self {
        Self::Transport { stage, source }
    }

    pub fn parse(stage: Stage, reason: impl fmt::Display) -> Self {
        Self::Parse {
            stage,
            reason: reason.to_string(),
        }
    }

    /// Stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Transport { stage, .. }
            | Self::HttpStatus { stage, .. }
            | Self::Service { stage, .. }
            | Self::Parse { stage, .. } => *stage,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::HttpStatus { .. } => ErrorKind::HttpStatus,
            Self::Service { .. } => ErrorKind::Service,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }
}
