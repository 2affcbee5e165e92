//! Observation documents
//!
//! Observations travel between the server, the local store and the views as
//! GeoJSON-style features. This module turns one such document into an
//! [`ObservationModel`]:
//!
//! ```json
//! {
//!   "id": "123e4567-e89b-12d3-a456-426614174000",
//!   "author": "J. Doe",
//!   "timestamp": "2024-03-01T12:00:00Z",
//!   "geometry": { "type": "Point", "coordinates": [-98.765432, 12.345678] },
//!   "provider": "gps",
//!   "accuracy": 4.5,
//!   "properties": { "Weather": "Sunny", "Count": 3 }
//! }
//! ```
//!
//! GeoJSON orders positions as `[longitude, latitude]`. Coordinates are not
//! range-checked here; a bad coordinate is still a faithful record of what
//! the device reported.

use serde::Deserialize;
use serde_json::Value;

use crate::common::parse_datetime;
use crate::entities::ObservationModel;
use crate::error::DomainError;
use crate::ids::ObservationId;
use crate::value_objects::{Coordinate, LocationAccuracy, ObservationProperties};

/// Wire shape of an observation feature
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDocument {
    pub id: String,
    pub author: String,
    /// RFC3339 timestamp
    pub timestamp: String,
    pub geometry: GeometryDocument,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeometryDocument {
    #[serde(rename = "type")]
    pub geometry_type: String,
    #[serde(default)]
    pub coordinates: Value,
}

impl GeometryDocument {
    fn point(&self) -> Result<Coordinate, DomainError> {
        if self.geometry_type != "Point" {
            return Err(DomainError::validation(format!(
                "Unsupported geometry type: {}",
                self.geometry_type
            )));
        }
        let position = self
            .coordinates
            .as_array()
            .ok_or_else(|| DomainError::validation("Point coordinates must be an array"))?;
        let component = |index: usize| {
            position
                .get(index)
                .and_then(Value::as_f64)
                .ok_or_else(|| DomainError::validation("Point needs numeric longitude and latitude"))
        };
        let longitude = component(0)?;
        let latitude = component(1)?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

impl TryFrom<ObservationDocument> for ObservationModel {
    type Error = DomainError;

    fn try_from(document: ObservationDocument) -> Result<Self, Self::Error> {
        let id: ObservationId = document.id.parse()?;
        let timestamp = parse_datetime(&document.timestamp)?;
        let coordinate = document.geometry.point()?;

        let mut observation = ObservationModel::new(id, coordinate, timestamp, document.author)
            .with_properties(ObservationProperties::from_json(document.properties));

        if let (Some(provider), Some(meters)) = (document.provider, document.accuracy) {
            observation = observation.with_accuracy(LocationAccuracy::new(provider, meters));
        }
        Ok(observation)
    }
}

impl ObservationModel {
    /// Build an observation from a JSON feature value.
    pub fn from_json(value: Value) -> Result<Self, DomainError> {
        let document: ObservationDocument = serde_json::from_value(value)
            .map_err(|e| DomainError::parse(format!("Malformed observation document: {}", e)))?;
        document.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::PropertyValue;
    use serde_json::json;

    fn feature() -> Value {
        json!({
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "author": "J. Doe",
            "timestamp": "2024-03-01T12:00:00Z",
            "geometry": { "type": "Point", "coordinates": [-98.765432, 12.345678] },
            "provider": "gps",
            "accuracy": 4.5,
            "properties": { "Weather": "Sunny", "Count": 3, "Notes": null }
        })
    }

    #[test]
    fn converts_feature_to_observation() {
        let observation = ObservationModel::from_json(feature()).unwrap();

        assert_eq!(observation.author(), "J. Doe");
        assert_eq!(observation.coordinate(), Coordinate::new(12.345678, -98.765432));
        assert_eq!(
            observation.accuracy(),
            Some(&LocationAccuracy::new("gps", 4.5))
        );
        let keys: Vec<&str> = observation.properties().keys().collect();
        assert_eq!(keys, vec!["Weather", "Count", "Notes"]);
        assert_eq!(
            observation.properties().get("Count"),
            Some(&PropertyValue::Integer(3))
        );
    }

    #[test]
    fn keeps_out_of_range_coordinate() {
        let mut value = feature();
        value["geometry"]["coordinates"] = json!([0.0, 91.0]);
        let observation = ObservationModel::from_json(value).unwrap();
        assert!(!observation.coordinate().is_valid());
    }

    #[test]
    fn accuracy_requires_provider() {
        let mut value = feature();
        value["provider"] = Value::Null;
        let observation = ObservationModel::from_json(value).unwrap();
        assert!(observation.accuracy().is_none());
    }

    #[test]
    fn rejects_non_point_geometry() {
        let mut value = feature();
        value["geometry"] = json!({
            "type": "LineString",
            "coordinates": [[0.0, 0.0], [1.0, 1.0]]
        });
        let err = ObservationModel::from_json(value).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let mut value = feature();
        value["timestamp"] = json!("March 1st");
        let err = ObservationModel::from_json(value).unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = ObservationModel::from_json(json!({ "id": "x" })).unwrap_err();
        assert!(err.to_string().contains("Malformed observation document"));
    }
}
