//! Common utility functions shared by the domain and the detail presenter.
//!
//! Pure functions only: no side effects, no I/O.

pub mod datetime;

pub use datetime::{format_timestamp, parse_datetime};
