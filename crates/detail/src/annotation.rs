//! Map annotation derivation
//!
//! Derives the single map marker for an observation. Zoom, span and tile
//! rendering belong to the host map widget; this only supplies where the
//! marker goes and what its callout says.

use mage_domain::{Coordinate, ObservationModel};
use serde::Serialize;

use crate::error::{DetailError, DetailResult};
use crate::format::ValueFormatter;

/// Marker for one observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapAnnotation {
    /// Exactly the observation's coordinate
    pub coordinate: Coordinate,
    /// Author
    pub title: String,
    /// Formatted timestamp
    pub subtitle: String,
    /// Accuracy callout, e.g. `"GPS ± 4.50m"`; absent for manual locations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MapAnnotationController {
    formatter: ValueFormatter,
}

impl MapAnnotationController {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self { formatter }
    }

    /// Annotation for `observation`, or `InvalidCoordinate` when its
    /// coordinate is out of range. Bad coordinates are reported, never clamped.
    pub fn annotation_for(&self, observation: &ObservationModel) -> DetailResult<MapAnnotation> {
        let coordinate = observation
            .coordinate()
            .validate()
            .map_err(|_| DetailError::invalid_coordinate(observation.coordinate()))?;

        Ok(MapAnnotation {
            coordinate,
            title: observation.author().to_string(),
            subtitle: self.formatter.timestamp(&observation.timestamp()),
            accuracy: observation.accuracy().and_then(|a| a.display_text()),
        })
    }
}
