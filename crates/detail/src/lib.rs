//! MAGE observation detail
//!
//! Turns one observation into the three feeds a detail screen renders:
//! header text, a single map annotation and a pull-based property table.
//! Widget wiring stays in the host view layer.

pub mod annotation;
pub mod error;
pub mod format;
pub mod presenter;
pub mod settings;
pub mod table;
pub mod view;


pub use annotation::{MapAnnotation, MapAnnotationController};
pub use error::{DetailError, DetailResult};
pub use format::{format_number, ValueFormatter};
pub use presenter::{BindOutcome, DetailSnapshot, HeaderText, ObservationDetailPresenter};
pub use settings::{DetailSettings, MAX_COORDINATE_PRECISION};
pub use table::{PropertyRow, PropertyTable, PropertyTableAdapter};
pub use view::DetailView;
