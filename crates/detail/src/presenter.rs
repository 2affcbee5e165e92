//! Observation detail presenter
//!
//! Mediates between one bound observation and the three regions of the
//! detail screen: the header labels, the map marker and the property table.
//! All derived state lives in a single [`DetailSnapshot`] that is built in
//! full before it replaces the previous one, so readers never see header,
//! marker and rows from different observations.
//!
//! The presenter runs on the thread that owns the detail view. Hosts that
//! receive observations on another thread marshal the `bind` call back to
//! that thread first.

use std::sync::Arc;

use mage_domain::ObservationModel;
use serde::Serialize;

use crate::annotation::{MapAnnotation, MapAnnotationController};
use crate::error::{DetailError, DetailResult};
use crate::format::ValueFormatter;
use crate::settings::DetailSettings;
use crate::table::{PropertyRow, PropertyTable, PropertyTableAdapter};
use crate::view::DetailView;

/// Header label text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderText {
    pub author: String,
    /// `"lat, lon"` at fixed precision
    pub location: String,
    /// ISO-8601 UTC
    pub timestamp: String,
}

/// Everything derived from one observation
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSnapshot {
    observation: Arc<ObservationModel>,
    header: HeaderText,
    annotation: DetailResult<MapAnnotation>,
    table: PropertyTable,
}

impl DetailSnapshot {
    pub fn observation(&self) -> &Arc<ObservationModel> {
        &self.observation
    }

    pub fn header(&self) -> &HeaderText {
        &self.header
    }

    pub fn annotation(&self) -> Result<&MapAnnotation, &DetailError> {
        self.annotation.as_ref()
    }

    pub fn table(&self) -> &PropertyTable {
        &self.table
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindOutcome {
    /// Derived state was rebuilt
    Refreshed,
    /// Same observation already bound; nothing recomputed
    Unchanged,
}

#[derive(Debug, Clone, Default)]
pub struct ObservationDetailPresenter {
    formatter: ValueFormatter,
    table_adapter: PropertyTableAdapter,
    annotations: MapAnnotationController,
    snapshot: Option<DetailSnapshot>,
}

impl ObservationDetailPresenter {
    pub fn new(settings: DetailSettings) -> Self {
        let formatter = ValueFormatter::new(settings);
        Self {
            table_adapter: PropertyTableAdapter::new(formatter.clone()),
            annotations: MapAnnotationController::new(formatter.clone()),
            formatter,
            snapshot: None,
        }
    }

    /// Bind `observation`, replacing whatever was bound.
    ///
    /// Binding an observation equal to the bound one is a no-op. If the
    /// property table cannot be built the error is returned and the previous
    /// state stays in place. An out-of-range coordinate does not fail the
    /// bind; it is reported by [`annotation`](Self::annotation).
    pub fn bind(&mut self, observation: Arc<ObservationModel>) -> DetailResult<BindOutcome> {
        if let Some(current) = &self.snapshot {
            if Arc::ptr_eq(&current.observation, &observation)
                || *current.observation == *observation
            {
                tracing::trace!(observation_id = %observation.id(), "Observation already bound");
                return Ok(BindOutcome::Unchanged);
            }
        }

        let table = self.table_adapter.table_for(&observation).map_err(|e| {
            tracing::warn!(
                observation_id = %observation.id(),
                error = %e,
                "Cannot bind observation: property table projection failed"
            );
            e
        })?;

        let annotation = self.annotations.annotation_for(&observation);
        if let Err(e) = &annotation {
            tracing::warn!(
                observation_id = %observation.id(),
                error = %e,
                "Bound observation has no map annotation"
            );
        }

        let header = HeaderText {
            author: observation.author().to_string(),
            location: self.formatter.coordinate(observation.coordinate()),
            timestamp: self.formatter.timestamp(&observation.timestamp()),
        };

        tracing::debug!(
            observation_id = %observation.id(),
            rows = table.row_count(),
            "Bound observation"
        );

        self.snapshot = Some(DetailSnapshot {
            observation,
            header,
            annotation,
            table,
        });
        Ok(BindOutcome::Refreshed)
    }

    /// Drop the bound observation and everything derived from it.
    pub fn unbind(&mut self) {
        if let Some(previous) = self.snapshot.take() {
            tracing::debug!(observation_id = %previous.observation.id(), "Unbound observation");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn observation(&self) -> Option<&Arc<ObservationModel>> {
        self.snapshot.as_ref().map(|s| &s.observation)
    }

    pub fn snapshot(&self) -> Option<&DetailSnapshot> {
        self.snapshot.as_ref()
    }

    /// Header text, or empty strings while nothing is bound.
    pub fn header_text(&self) -> HeaderText {
        self.snapshot
            .as_ref()
            .map(|s| s.header.clone())
            .unwrap_or_default()
    }

    pub fn row_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.table.row_count())
    }

    pub fn row(&self, index: isize) -> DetailResult<&PropertyRow> {
        match &self.snapshot {
            Some(s) => s.table.row(index),
            None => Err(DetailError::index_out_of_bounds(index, 0)),
        }
    }

    /// `Ok(None)` while unbound; `InvalidCoordinate` when the bound
    /// observation's coordinate is out of range.
    pub fn annotation(&self) -> DetailResult<Option<&MapAnnotation>> {
        match &self.snapshot {
            None => Ok(None),
            Some(s) => s.annotation.as_ref().map(Some).map_err(DetailError::clone),
        }
    }

    /// Push the current state to the host view in one call.
    pub fn render_into(&self, view: &mut dyn DetailView) {
        match &self.snapshot {
            Some(snapshot) => view.present(snapshot),
            None => view.clear(),
        }
    }
}
