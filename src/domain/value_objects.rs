//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;
use std::net::{AddrParseError, IpAddr};
use std::str::FromStr;

/// Public IP address of the caller, as reported by the IP lookup service.
///
/// The textual form is validated as IPv4 or IPv6 but kept verbatim, since it
/// is only ever forwarded to the geolocation service as an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IpAddress {
    text: String,
}

impl IpAddress {
    /// Validate and wrap an IP address string.
    pub fn parse(s: &str) -> Result<Self, AddrParseError> {
        s.parse::<IpAddr>()?;
        Ok(Self { text: s.to_string() })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for IpAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl FromStr for IpAddress {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A latitude or longitude exactly as the geolocation service sent it.
///
/// Services disagree on whether coordinates are JSON numbers or decimal
/// strings. A string is kept as its decoded text and a number as the literal
/// that appeared in the payload, so `45.50` or `1e2` reach the pass
/// prediction query digit for digit.
///
/// Deserializing reads the raw JSON token and therefore needs serde_json's
/// own deserializer (`from_str`, `from_slice`, `from_reader`).
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateValue {
    /// JSON number literal, verbatim
    Number(String),
    Text(String),
}

impl CoordinateValue {
    /// True for a blank string. Numbers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    /// Classify one raw JSON token.
    fn from_raw_json(raw: &str) -> Result<Self, String> {
        let raw = raw.trim();
        match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
            Value::Number(_) => Ok(Self::Number(raw.to_string())),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(format!(
                "invalid coordinate {}, expected a number or a string",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CoordinateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::from_raw_json(raw.get()).map_err(de::Error::custom)
    }
}

impl Serialize for CoordinateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => RawValue::from_string(n.clone())
                .map_err(ser::Error::custom)?
                .serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for CoordinateValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for CoordinateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) | Self::Text(n) => f.write_str(n),
        }
    }
}
