//! Property table projection
//!
//! Projects an observation's properties into display rows. Rows keep the
//! order the properties were authored in; the table never re-sorts, since
//! upstream forms group related fields deliberately.

use mage_domain::{ObservationModel, ObservationProperties};
use serde::Serialize;

use crate::error::{DetailError, DetailResult};
use crate::format::ValueFormatter;

/// One formatted key/value row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    /// Display label
    pub key: String,
    /// Formatted value, never empty for a missing value
    pub value: String,
    /// Stable position, equal to the property's index
    pub order: usize,
}

/// Projects properties into rows with a fixed formatter
#[derive(Debug, Clone, Default)]
pub struct PropertyTableAdapter {
    formatter: ValueFormatter,
}

impl PropertyTableAdapter {
    pub fn new(formatter: ValueFormatter) -> Self {
        Self { formatter }
    }

    /// Project every property, failing on the first unsupported value.
    ///
    /// Output depends only on `properties` and the formatter settings.
    pub fn project(&self, properties: &ObservationProperties) -> DetailResult<PropertyTable> {
        let rows = properties
            .iter()
            .enumerate()
            .map(|(order, (key, value))| {
                Ok(PropertyRow {
                    key: key.to_string(),
                    value: self.formatter.property(key, value)?,
                    order,
                })
            })
            .collect::<DetailResult<Vec<_>>>()?;
        Ok(PropertyTable { rows })
    }

    pub fn table_for(&self, observation: &ObservationModel) -> DetailResult<PropertyTable> {
        self.project(observation.properties())
    }
}

/// Pull-based row source for a table widget: ask for `row_count`, then
/// request each visible index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyTable {
    rows: Vec<PropertyRow>,
}

impl PropertyTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row at `index`. Indices are signed to match host table APIs; anything
    /// outside `[0, row_count)` is `IndexOutOfBounds`.
    pub fn row(&self, index: isize) -> DetailResult<&PropertyRow> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.rows.get(i))
            .ok_or_else(|| DetailError::index_out_of_bounds(index, self.rows.len()))
    }

    pub fn rows(&self) -> &[PropertyRow] {
        &self.rows
    }
}
