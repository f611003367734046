//! Sort engine: orders wage records for display and export.
//!
//! The data pipeline is:
//! 1. Raw records (whatever order the provider returned)
//! 2. DisplayedView (sorted by the current `SortState`)
//! 3. WageTable / export file (formatted strings or bytes)
//!
//! Sorting never touches its input; it always returns a fresh sequence.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::collation::KoreanCollator;
use super::options::{SortDirection, SortState};
use crate::data::{WageField, WageRecord};
use crate::Result;

/// Records in display order together with the sort that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedView {
    /// Sort applied to `records`
    pub sort: SortState,
    /// Records in display order
    pub records: Vec<WageRecord>,
}

impl DisplayedView {
    /// Number of records shown.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Orders record sequences by a single column.
#[derive(Debug)]
pub struct SortEngine {
    collator: KoreanCollator,
}

impl SortEngine {
    /// Create a sort engine with Korean collation for text columns.
    pub fn new() -> Result<Self> {
        Ok(Self {
            collator: KoreanCollator::new()?,
        })
    }

    /// Ascending comparison of two records on `field`.
    ///
    /// Unit price compares numerically; every other column uses Korean collation.
    pub fn compare(&self, a: &WageRecord, b: &WageRecord, field: WageField) -> Ordering {
        match (a.text(field), b.text(field)) {
            (Some(left), Some(right)) => self.collator.compare(left, right),
            _ => a.unit_price.cmp(&b.unit_price),
        }
    }

    /// Return `records` ordered by `field` in `direction`.
    ///
    /// Descending is the ascending comparison reversed. The sort is stable,
    /// so records with equal keys keep their input order in both directions
    /// and sorting an already sorted sequence changes nothing.
    pub fn sort(
        &self,
        records: &[WageRecord],
        field: WageField,
        direction: SortDirection,
    ) -> Vec<WageRecord> {
        let mut sorted = records.to_vec();
        match direction {
            SortDirection::Ascending => sorted.sort_by(|a, b| self.compare(a, b, field)),
            SortDirection::Descending => {
                sorted.sort_by(|a, b| self.compare(a, b, field).reverse())
            }
        }
        sorted
    }

    /// Sort `records` by `state` into a displayed view.
    pub fn view(&self, records: &[WageRecord], state: SortState) -> DisplayedView {
        DisplayedView {
            sort: state,
            records: self.sort(records, state.field, state.direction),
        }
    }
}
