//! Vehicle record and its JSON representation.
//!
//! A vehicle serializes to an object with exactly four string fields:
//! `id`, `model`, `make` and `type`. Absent or `null` fields decode to
//! the empty string rather than failing.

use serde::{Deserialize, Deserializer, Serialize};

/// A vehicle record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    /// Lookup and delete key
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,

    /// Free-form model name
    #[serde(deserialize_with = "null_as_empty")]
    pub model: String,

    /// Free-form manufacturer name
    #[serde(deserialize_with = "null_as_empty")]
    pub make: String,

    /// Free-form category, e.g. "hatchback"
    #[serde(rename = "type", deserialize_with = "null_as_empty")]
    pub vehicle_type: String,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        model: impl Into<String>,
        make: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            make: make.into(),
            vehicle_type: vehicle_type.into(),
        }
    }

    /// Replace the identifier, keeping every other field
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// True when no identifier has been assigned yet
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_type_field_name() {
        let vehicle = Vehicle::new("1", "Nexon", "Tata", "hatchback");
        let value = serde_json::to_value(&vehicle).unwrap();

        assert_eq!(
            value,
            json!({"id": "1", "model": "Nexon", "make": "Tata", "type": "hatchback"})
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let vehicle: Vehicle = serde_json::from_str(r#"{"model": "Nexon"}"#).unwrap();

        assert_eq!(vehicle.model, "Nexon");
        assert_eq!(vehicle.id, "");
        assert_eq!(vehicle.make, "");
        assert_eq!(vehicle.vehicle_type, "");
        assert!(!vehicle.has_id());
    }

    #[test]
    fn test_null_fields_pass_through_as_empty() {
        let vehicle: Vehicle =
            serde_json::from_str(r#"{"id": "7", "model": null, "make": null, "type": null}"#)
                .unwrap();

        assert_eq!(vehicle, Vehicle::new("7", "", "", ""));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let vehicle: Vehicle =
            serde_json::from_str(r#"{"id": "1", "colour": "red"}"#).unwrap();
        assert_eq!(vehicle.id, "1");
    }

    #[test]
    fn test_non_string_field_rejected() {
        let result = serde_json::from_str::<Vehicle>(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let samples = [
            Vehicle::new("1", "Nexon", "Tata", "hatchback"),
            Vehicle::new("", "", "", ""),
            Vehicle::new("a\"b", "line\nbreak", "ünïcødé", " "),
        ];

        for original in samples {
            let encoded = serde_json::to_string(&original).unwrap();
            let decoded: Vehicle = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn test_with_id() {
        let vehicle = Vehicle::new("1", "Nexon", "Tata", "hatchback").with_id("2");
        assert_eq!(vehicle.id, "2");
        assert_eq!(vehicle.model, "Nexon");
    }
}
