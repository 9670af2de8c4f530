//! Domain Entities - Core business objects
//!
//! These entities represent the core concepts of the flyover domain.
//! They are created per lookup, passed forward and never mutated.

use crate::domain::value_objects::CoordinateValue;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Geographic position resolved from an IP address.
///
/// Both fields are present and non-empty whenever a geolocation lookup
/// succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: CoordinateValue,
    pub longitude: CoordinateValue,
}

impl Coordinates {
    pub fn new(latitude: impl Into<CoordinateValue>, longitude: impl Into<CoordinateValue>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// A single predicted ISS pass over a location.
///
/// Fields that are missing, null, or not an integer in the upstream record
/// stay `None` instead of failing the whole prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassRecord {
    /// Start of the pass, Unix epoch seconds
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub risetime: Option<i64>,
    /// Length of the pass in seconds
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub duration: Option<i64>,
}

fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_i64())
}

impl PassRecord {
    pub fn new(risetime: i64, duration: i64) -> Self {
        Self {
            risetime: Some(risetime),
            duration: Some(duration),
        }
    }
}

/// Passes in the order the prediction service returned them.
pub type PassList = Vec<PassRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Coordinates Tests =====

    #[test]
    fn test_coordinates_new_from_strings() {
        let coords = Coordinates::new("45.5016889", "-73.567256");

        assert_eq!(coords.latitude.to_string(), "45.5016889");
        assert_eq!(coords.longitude.to_string(), "-73.567256");
    }

    #[test]
    fn test_coordinates_deserialize_mixed_forms() {
        let coords: Coordinates =
            serde_json::from_str(r#"{"latitude": 49.2827291, "longitude": "-123.1207375"}"#)
                .unwrap();

        assert!(matches!(coords.latitude, CoordinateValue::Number(_)));
        assert_eq!(coords.latitude.to_string(), "49.2827291");
        assert_eq!(
            coords.longitude,
            CoordinateValue::Text("-123.1207375".to_string())
        );
    }

    // ===== PassRecord Tests =====

    #[test]
    fn test_pass_record_full() {
        let pass: PassRecord =
            serde_json::from_str(r#"{"risetime": 1609459200, "duration": 600}"#).unwrap();

        assert_eq!(pass, PassRecord::new(1609459200, 600));
    }

    #[test]
    fn test_pass_record_missing_fields_are_none() {
        let pass: PassRecord = serde_json::from_str(r#"{"duration": 42}"#).unwrap();
        assert_eq!(pass.risetime, None);
        assert_eq!(pass.duration, Some(42));

        let empty: PassRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.risetime, None);
        assert_eq!(empty.duration, None);
    }

    #[test]
    fn test_pass_record_wrong_types_are_none() {
        let pass: PassRecord =
            serde_json::from_str(r#"{"risetime": 1609465000.0, "duration": 420}"#).unwrap();
        assert_eq!(pass.risetime, None);
        assert_eq!(pass.duration, Some(420));

        let pass: PassRecord =
            serde_json::from_str(r#"{"risetime": "1609465000", "duration": null}"#).unwrap();
        assert_eq!(pass, PassRecord { risetime: None, duration: None });
    }

    #[test]
    fn test_pass_record_ignores_unknown_fields() {
        let pass: PassRecord =
            serde_json::from_str(r#"{"risetime": 1, "duration": 2, "mag": -3.1}"#).unwrap();
        assert_eq!(pass, PassRecord::new(1, 2));
    }

    #[test]
    fn test_pass_list_keeps_order() {
        let passes: PassList = serde_json::from_str(
            r#"[{"risetime": 300, "duration": 1}, {"risetime": 100, "duration": 2}]"#,
        )
        .unwrap();

        assert_eq!(passes[0].risetime, Some(300));
        assert_eq!(passes[1].risetime, Some(100));
    }
}
