//! Errors surfaced by the detail feeds
//!
//! All three are data-integrity or caller errors, never transient: retrying
//! the same call with the same input always fails the same way.

use mage_domain::{Coordinate, PropertyKind};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetailError {
    /// Row requested outside `[0, row_count)`
    #[error("Row index {index} out of bounds for {count} rows")]
    IndexOutOfBounds { index: isize, count: usize },

    /// Property value of a kind the table cannot display
    #[error("Property '{key}' has unsupported type: {kind}")]
    UnsupportedPropertyType { key: String, kind: PropertyKind },

    /// Coordinate outside latitude [-90, 90] or longitude [-180, 180]
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

impl DetailError {
    pub fn index_out_of_bounds(index: isize, count: usize) -> Self {
        Self::IndexOutOfBounds { index, count }
    }

    pub fn unsupported_property_type(key: impl Into<String>, kind: PropertyKind) -> Self {
        Self::UnsupportedPropertyType {
            key: key.into(),
            kind,
        }
    }

    pub fn invalid_coordinate(coordinate: Coordinate) -> Self {
        Self::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}

pub type DetailResult<T> = Result<T, DetailError>;
