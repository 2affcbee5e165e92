//! Observation Entity
//!
//! A geolocated, timestamped field report with an author and an ordered set
//! of typed properties. The data layer creates and owns observations; views
//! only read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ObservationId;
use crate::value_objects::{Coordinate, LocationAccuracy, ObservationProperties, PropertyValue};

/// A single field observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationModel {
    id: ObservationId,
    /// Where the observation was made
    coordinate: Coordinate,
    /// When the observation was made
    timestamp: DateTime<Utc>,
    /// Display name of the reporting user
    author: String,
    /// Author-ordered properties
    properties: ObservationProperties,
    /// Accuracy of the location fix, when the device reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accuracy: Option<LocationAccuracy>,
}

impl ObservationModel {
    pub fn new(
        id: ObservationId,
        coordinate: Coordinate,
        timestamp: DateTime<Utc>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id,
            coordinate,
            timestamp,
            author: author.into(),
            properties: ObservationProperties::new(),
            accuracy: None,
        }
    }

    // Builder methods

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    pub fn with_properties(mut self, properties: ObservationProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_accuracy(mut self, accuracy: LocationAccuracy) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    // Read accessors

    pub fn id(&self) -> ObservationId {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn properties(&self) -> &ObservationProperties {
        &self.properties
    }

    pub fn accuracy(&self) -> Option<&LocationAccuracy> {
        self.accuracy.as_ref()
    }
}
