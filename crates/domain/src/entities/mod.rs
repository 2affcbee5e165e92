//! Domain entities - Core business objects with identity

mod observation;

pub use observation::ObservationModel;
