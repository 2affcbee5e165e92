//! Value objects - immutable data describing parts of an observation

mod accuracy;
mod coordinate;
mod property;

pub use accuracy::LocationAccuracy;
pub use coordinate::Coordinate;
pub use property::{ObservationProperties, PropertyKind, PropertyValue};
