//! Text formatting rules shared by the header, the property table and the
//! map annotation.
//!
//! Every function here is pure and locale-invariant: the same input always
//! produces byte-identical output.

use chrono::{DateTime, Utc};
use mage_domain::{format_timestamp, Coordinate, PropertyValue};

use crate::error::{DetailError, DetailResult};
use crate::settings::{DetailSettings, MAX_COORDINATE_PRECISION};

/// Formats observation values for display using one set of [`DetailSettings`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueFormatter {
    settings: DetailSettings,
}

impl ValueFormatter {
    pub fn new(settings: DetailSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DetailSettings {
        &self.settings
    }

    /// `"lat, lon"` at the configured precision, e.g. `"39.627295, -104.899002"`.
    ///
    /// Precision is capped at [`MAX_COORDINATE_PRECISION`].
    pub fn coordinate(&self, coordinate: Coordinate) -> String {
        let precision = self.settings.coordinate_precision.min(MAX_COORDINATE_PRECISION);
        format!(
            "{:.*}, {:.*}",
            precision, coordinate.latitude, precision, coordinate.longitude
        )
    }

    pub fn timestamp(&self, instant: &DateTime<Utc>) -> String {
        format_timestamp(instant)
    }

    pub fn boolean(&self, value: bool) -> &str {
        if value {
            &self.settings.true_literal
        } else {
            &self.settings.false_literal
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.settings.missing_placeholder
    }

    /// Display text for the property `key`.
    ///
    /// Nested maps, and lists inside lists, have no display rule and fail with
    /// `UnsupportedPropertyType` instead of being stringified.
    pub fn property(&self, key: &str, value: &PropertyValue) -> DetailResult<String> {
        match value {
            PropertyValue::List(items) if items.is_empty() => Ok(self.placeholder().to_string()),
            PropertyValue::List(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.scalar(key, item))
                    .collect::<DetailResult<Vec<_>>>()?;
                Ok(parts.join(&self.settings.list_separator))
            }
            other => self.scalar(key, other),
        }
    }

    fn scalar(&self, key: &str, value: &PropertyValue) -> DetailResult<String> {
        match value {
            PropertyValue::Null => Ok(self.placeholder().to_string()),
            PropertyValue::Bool(b) => Ok(self.boolean(*b).to_string()),
            PropertyValue::Integer(i) => Ok(i.to_string()),
            PropertyValue::Unsigned(u) => Ok(u.to_string()),
            PropertyValue::Number(n) => Ok(format_number(*n)),
            PropertyValue::Text(s) => Ok(s.clone()),
            PropertyValue::Date(d) => Ok(self.timestamp(d)),
            PropertyValue::Point(c) => Ok(self.coordinate(*c)),
            PropertyValue::List(_) | PropertyValue::Map(_) => {
                Err(DetailError::unsupported_property_type(key, value.kind()))
            }
        }
    }
}

/// Shortest decimal that round-trips, without a decimal point for integral
/// values and never in exponent notation. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mage_domain::{ObservationProperties, PropertyKind};

    fn formatter() -> ValueFormatter {
        ValueFormatter::default()
    }

    #[test]
    fn numbers_have_no_trailing_zeros() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(4.5), "4.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn coordinate_uses_fixed_precision() {
        let text = formatter().coordinate(Coordinate::new(39.627295, -104.899002));
        assert_eq!(text, "39.627295, -104.899002");

        let text = formatter().coordinate(Coordinate::new(1.0, 2.5));
        assert_eq!(text, "1.000000, 2.500000");
    }

    #[test]
    fn coordinate_precision_is_configurable() {
        let f = ValueFormatter::new(DetailSettings {
            coordinate_precision: 2,
            ..DetailSettings::default()
        });
        assert_eq!(f.coordinate(Coordinate::new(12.345678, -98.765432)), "12.35, -98.77");
    }

    #[test]
    fn oversized_precision_is_capped() {
        let f = ValueFormatter::new(DetailSettings {
            coordinate_precision: 70_000,
            ..DetailSettings::default()
        });
        let text = f.coordinate(Coordinate::new(1.5, -2.25));
        let (lat, lon) = text.split_once(", ").unwrap();
        assert_eq!(lat.split_once('.').unwrap().1.len(), MAX_COORDINATE_PRECISION);
        assert_eq!(lon, "-2.25000000000000000");
    }

    #[test]
    fn integers_print_exactly() {
        let f = formatter();
        assert_eq!(
            f.property("Serial", &PropertyValue::Unsigned(12345678901234567891)).unwrap(),
            "12345678901234567891"
        );
        assert_eq!(
            f.property("Offset", &PropertyValue::Integer(-9007199254740993)).unwrap(),
            "-9007199254740993"
        );
    }

    #[test]
    fn text_is_verbatim() {
        let value = PropertyValue::Text("  text area field\n".into());
        assert_eq!(formatter().property("Notes", &value).unwrap(), "  text area field\n");
    }

    #[test]
    fn null_uses_placeholder_not_empty() {
        let text = formatter().property("Notes", &PropertyValue::Null).unwrap();
        assert_eq!(text, "—");
        assert!(!text.is_empty());
    }

    #[test]
    fn booleans_use_configured_literals() {
        let f = ValueFormatter::new(DetailSettings {
            true_literal: "YES".into(),
            false_literal: "NO".into(),
            ..DetailSettings::default()
        });
        assert_eq!(f.property("Verified", &PropertyValue::Bool(true)).unwrap(), "YES");
        assert_eq!(f.property("Verified", &PropertyValue::Bool(false)).unwrap(), "NO");
    }

    #[test]
    fn dates_match_header_timestamp_form() {
        let when = Utc.with_ymd_and_hms(2017, 2, 10, 10, 20, 0).unwrap();
        let f = formatter();
        assert_eq!(
            f.property("Seen", &PropertyValue::Date(when)).unwrap(),
            f.timestamp(&when)
        );
        assert_eq!(f.timestamp(&when), "2017-02-10T10:20:00Z");
    }

    #[test]
    fn lists_are_joined() {
        let value = PropertyValue::List(vec!["Purple".into(), "Blue".into()]);
        assert_eq!(formatter().property("Colors", &value).unwrap(), "Purple, Blue");
        assert_eq!(
            formatter().property("Colors", &PropertyValue::List(vec![])).unwrap(),
            "—"
        );
    }

    #[test]
    fn points_use_coordinate_text() {
        let value = PropertyValue::Point(Coordinate::new(39.627295, -104.899002));
        assert_eq!(
            formatter().property("Location", &value).unwrap(),
            "39.627295, -104.899002"
        );
    }

    #[test]
    fn maps_are_rejected() {
        let value = PropertyValue::Map(ObservationProperties::new());
        let err = formatter().property("Details", &value).unwrap_err();
        assert_eq!(
            err,
            DetailError::unsupported_property_type("Details", PropertyKind::Map)
        );
    }

    #[test]
    fn nested_lists_are_rejected() {
        let value = PropertyValue::List(vec![PropertyValue::List(vec!["a".into()])]);
        let err = formatter().property("Grid", &value).unwrap_err();
        assert!(matches!(
            err,
            DetailError::UnsupportedPropertyType { kind: PropertyKind::List, .. }
        ));
    }
}
