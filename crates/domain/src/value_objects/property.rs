//! Observation property values
//!
//! Observations carry an arbitrary, author-ordered set of typed key/value
//! properties. Order is meaningful: upstream forms group related fields, and
//! consumers must see them in the order they were declared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;

/// The kind of a property value, used in diagnostics and error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Null,
    Bool,
    Number,
    Text,
    Date,
    List,
    Point,
    Map,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Null => "null",
            PropertyKind::Bool => "bool",
            PropertyKind::Number => "number",
            PropertyKind::Text => "text",
            PropertyKind::Date => "date",
            PropertyKind::List => "list",
            PropertyKind::Point => "point",
            PropertyKind::Map => "map",
        }
    }
}

impl std::fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single property value on an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Field present but without a value
    Null,
    Bool(bool),
    /// Whole number kept exactly as reported
    Integer(i64),
    /// Whole number above `i64::MAX`
    Unsigned(u64),
    Number(f64),
    Text(String),
    Date(DateTime<Utc>),
    /// Multi-select answers
    List(Vec<PropertyValue>),
    /// Location-valued field
    Point(Coordinate),
    /// Nested object
    Map(ObservationProperties),
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Null => PropertyKind::Null,
            PropertyValue::Bool(_) => PropertyKind::Bool,
            PropertyValue::Integer(_) | PropertyValue::Unsigned(_) | PropertyValue::Number(_) => {
                PropertyKind::Number
            }
            PropertyValue::Text(_) => PropertyKind::Text,
            PropertyValue::Date(_) => PropertyKind::Date,
            PropertyValue::List(_) => PropertyKind::List,
            PropertyValue::Point(_) => PropertyKind::Point,
            PropertyValue::Map(_) => PropertyKind::Map,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Convert a JSON value, keeping object key order.
    ///
    /// Integers stay exact. A GeoJSON point object (`{"type": "Point",
    /// "coordinates": [lon, lat]}`) becomes a `Point`; any other object is a
    /// `Map`. Dates only arrive through the Rust API.
    pub fn from_json(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => PropertyValue::Null,
            Value::Bool(b) => PropertyValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PropertyValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    PropertyValue::Unsigned(u)
                } else {
                    n.as_f64()
                        .map(PropertyValue::Number)
                        .unwrap_or(PropertyValue::Null)
                }
            }
            Value::String(s) => PropertyValue::Text(s),
            Value::Array(items) => {
                PropertyValue::List(items.into_iter().map(PropertyValue::from_json).collect())
            }
            Value::Object(map) => match geojson_point(&map) {
                Some(coordinate) => PropertyValue::Point(coordinate),
                None => PropertyValue::Map(ObservationProperties::from_json(map)),
            },
        }
    }
}

/// Position of a GeoJSON `Point` object; GeoJSON orders it `[lon, lat]`.
fn geojson_point(map: &serde_json::Map<String, serde_json::Value>) -> Option<Coordinate> {
    if map.get("type").and_then(serde_json::Value::as_str) != Some("Point") {
        return None;
    }
    match map.get("coordinates")?.as_array()?.as_slice() {
        [lon, lat, ..] => Some(Coordinate::new(lat.as_f64()?, lon.as_f64()?)),
        _ => None,
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => PropertyValue::Integer(i),
            Err(_) => PropertyValue::Unsigned(value),
        }
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Integer(i64::from(value))
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Date(value)
    }
}

impl From<Coordinate> for PropertyValue {
    fn from(value: Coordinate) -> Self {
        PropertyValue::Point(value)
    }
}

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PropertyValue::Null)
    }
}

/// Insertion-ordered property mapping.
///
/// Keys are unique. Re-inserting a key replaces its value in place so the
/// key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationProperties {
    entries: Vec<(String, PropertyValue)>,
}

impl ObservationProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub(crate) fn from_json(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, PropertyValue::from_json(v)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ObservationProperties
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}
