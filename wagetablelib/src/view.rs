//! View coordinator: the one owner of mutable view state.
//!
//! The coordinator holds the current criteria, the last record set delivered
//! by a provider, and the sort state. The displayed view is derived from the
//! record set and sort state every time it is asked for; it is never stored.
//!
//! ## Request lifecycle
//!
//! ```text
//! Idle ──submit_search──▶ Loading ──resolve(Ok)──▶ Idle
//!                            │
//!                            └──resolve(Err)──▶ Failed (records kept)
//! ```
//!
//! Every search gets a sequence number. Only the response to the most recent
//! search is applied; responses to superseded searches are dropped, so the
//! record set never reflects an out-of-order delivery.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::data::{FilterCriteria, WageField, WageProvider, WageRecord};
use crate::error::{ProviderError, WageError};
use crate::output::{export, ExportFile, ExportFormat, ExportOptions, WageTable};
use crate::query::{DisplayedView, SortEngine, SortState};
use crate::Result;

/// Request status of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewStatus {
    /// No request in flight
    #[default]
    Idle,
    /// A request was issued and has not been resolved
    Loading,
    /// The latest request failed; the previous records are still shown
    Failed,
}

/// Handle for an issued search, used to deliver its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    criteria: FilterCriteria,
}

impl SearchTicket {
    /// Sequence number of the request.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Criteria the request was issued with.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }
}

/// What happened to a delivered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Records replaced with the response
    Applied,
    /// The request failed; records left as they were
    Failed,
    /// A newer search was issued; the response was discarded
    Stale,
}

/// Owns criteria, records and sort state, and derives the displayed view.
#[derive(Debug)]
pub struct ViewCoordinator {
    engine: SortEngine,
    export_options: ExportOptions,
    criteria: FilterCriteria,
    records: Vec<WageRecord>,
    sort: SortState,
    last_seq: u64,
    in_flight: Option<u64>,
    error: Option<ProviderError>,
}

impl ViewCoordinator {
    /// Create an empty, idle coordinator with default export options.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: SortEngine::new()?,
            export_options: ExportOptions::default(),
            criteria: FilterCriteria::show_all(),
            records: Vec::new(),
            sort: SortState::default(),
            last_seq: 0,
            in_flight: None,
            error: None,
        })
    }

    /// Builder: set the options used by [`Self::export_current_view`].
    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    /// Issue a search. Any search still in flight is superseded.
    pub fn submit_search(&mut self, criteria: FilterCriteria) -> SearchTicket {
        if let Some(previous) = self.in_flight {
            debug!(seq = previous, "superseding in-flight search");
        }
        self.last_seq += 1;
        self.in_flight = Some(self.last_seq);
        self.criteria = criteria.clone();
        debug!(seq = self.last_seq, %criteria, "search issued");
        SearchTicket {
            seq: self.last_seq,
            criteria,
        }
    }

    /// Deliver the provider's response to a search.
    ///
    /// A success replaces the record set wholesale and clears any error.
    /// A failure keeps the record set and records the error. Either way the
    /// sort state is untouched.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        response: std::result::Result<Vec<WageRecord>, ProviderError>,
    ) -> Resolution {
        if self.in_flight != Some(ticket.seq) {
            debug!(seq = ticket.seq, latest = self.last_seq, "discarding stale response");
            return Resolution::Stale;
        }
        self.in_flight = None;
        match response {
            Ok(records) => {
                info!(seq = ticket.seq, count = records.len(), "search results applied");
                self.records = records;
                self.error = None;
                Resolution::Applied
            }
            Err(err) => {
                warn!(seq = ticket.seq, error = %err, "search failed; keeping previous records");
                self.error = Some(err);
                Resolution::Failed
            }
        }
    }

    /// Issue a search, fetch from `provider` and apply the response.
    pub fn search<P>(&mut self, provider: &P, criteria: FilterCriteria) -> Result<()>
    where
        P: WageProvider + ?Sized,
    {
        let ticket = self.submit_search(criteria);
        match provider.fetch(ticket.criteria()) {
            Ok(records) => {
                self.resolve(&ticket, Ok(records));
                Ok(())
            }
            Err(err) => {
                self.resolve(&ticket, Err(err.clone()));
                Err(err.into())
            }
        }
    }

    /// Application startup: load everything (no fragment, all years).
    pub fn startup<P>(&mut self, provider: &P) -> Result<()>
    where
        P: WageProvider + ?Sized,
    {
        self.search(provider, FilterCriteria::show_all())
    }

    /// Header click on `field`: flip direction on the active column,
    /// otherwise switch to `field` descending.
    pub fn set_sort(&mut self, field: WageField) -> SortState {
        self.sort = self.sort.click(field);
        debug!(field = %self.sort.field, direction = ?self.sort.direction, "sort changed");
        self.sort
    }

    /// Replace the sort state outright.
    pub fn set_sort_state(&mut self, state: SortState) {
        self.sort = state;
        debug!(field = %state.field, direction = ?state.direction, "sort set");
    }

    /// The current records in display order.
    pub fn displayed_view(&self) -> DisplayedView {
        self.engine.view(&self.records, self.sort)
    }

    /// The displayed view formatted for presentation.
    pub fn table(&self) -> WageTable {
        WageTable::from_view(&self.displayed_view())
    }

    /// Export the displayed view with today's (UTC) date in the file name.
    pub fn export_current_view(&self, format: ExportFormat) -> Result<ExportFile> {
        self.export_current_view_on(format, Utc::now().date_naive())
    }

    /// Export the displayed view, naming the file after `date`.
    ///
    /// Refused while a search is in flight.
    pub fn export_current_view_on(&self, format: ExportFormat, date: NaiveDate) -> Result<ExportFile> {
        if self.is_loading() {
            return Err(WageError::Busy);
        }
        let view = self.displayed_view();
        Ok(export(&view.records, format, &self.export_options, date))
    }

    /// Current request status.
    pub fn status(&self) -> ViewStatus {
        if self.in_flight.is_some() {
            ViewStatus::Loading
        } else if self.error.is_some() {
            ViewStatus::Failed
        } else {
            ViewStatus::Idle
        }
    }

    /// Whether a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Failure of the latest search, until a later search succeeds.
    pub fn error(&self) -> Option<&ProviderError> {
        self.error.as_ref()
    }

    /// Criteria of the latest search.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Current sort state.
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    /// Number of records held.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Options used for exports.
    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }
}
