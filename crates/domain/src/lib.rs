//! MAGE domain: the observation read model shared by the data layer and views.

pub mod common;
pub mod document;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use common::{format_timestamp, parse_datetime};
pub use document::{GeometryDocument, ObservationDocument};
pub use entities::ObservationModel;
pub use error::DomainError;
pub use ids::ObservationId;
pub use value_objects::{
    Coordinate, LocationAccuracy, ObservationProperties, PropertyKind, PropertyValue,
};
