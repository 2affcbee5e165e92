//! Unified error types for the domain layer
//!
//! Provides the error type for building and validating observation records,
//! so adapters that ingest observations never have to fall back to String errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Coordinate outside the WGS84 latitude/longitude ranges
    #[error("Invalid coordinate: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Validation failed (e.g., missing or malformed document fields)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an invalid coordinate error carrying the offending values.
    pub fn invalid_coordinate(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinate {
            latitude,
            longitude,
        }
    }

    /// Creates a validation error for structural problems in incoming data.
    ///
    /// Use this when an observation document cannot describe a valid record:
    /// - Geometry is not a point
    /// - Coordinate arrays are too short
    /// - Required fields are empty
    ///
    /// # Example
    /// ```ignore
    /// if author.is_empty() {
    ///     return Err(DomainError::validation("Observation author cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(format!("Invalid timestamp: {}", err))
    }
}

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        Self::Parse(format!("Invalid observation id: {}", err))
    }
}
