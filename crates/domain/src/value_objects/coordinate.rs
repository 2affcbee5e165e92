//! WGS84 coordinate value object

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A WGS84 geographic coordinate in decimal degrees.
///
/// Construction never validates: an observation can carry bad upstream
/// data, and consumers decide whether to reject it via [`Coordinate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180.0 to 180.0)
    pub longitude: f64,
}

impl Coordinate {
    pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
    pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are inside their ranges. NaN is never valid.
    pub fn is_valid(&self) -> bool {
        Self::LATITUDE_RANGE.contains(&self.latitude)
            && Self::LONGITUDE_RANGE.contains(&self.longitude)
    }

    /// Returns the coordinate unchanged, or `InvalidCoordinate`. Never clamps.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(DomainError::invalid_coordinate(self.latitude, self.longitude))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_boundaries() {
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            assert!(Coordinate::new(lat, lon).is_valid(), "({lat}, {lon})");
        }
    }

    #[test]
    fn rejects_out_of_range_without_clamping() {
        let err = Coordinate::new(91.0, 0.0).validate().unwrap_err();
        assert_eq!(err, DomainError::invalid_coordinate(91.0, 0.0));

        assert!(Coordinate::new(0.0, -180.000001).validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::NAN).is_valid());
    }
}
