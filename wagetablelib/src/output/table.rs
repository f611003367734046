//! Table-ready data structures for wage output.
//!
//! This module provides `WageTable`, a presentation-ready data structure
//! that can be rendered to a terminal or serialized to JSON.
//!
//! WageTable is a pure presentation layer - it only formats data, no
//! filtering or sorting logic. The rows arrive already in display order.

use serde::{Deserialize, Serialize};

use crate::data::{WageField, WageRecord};
use crate::query::{DisplayedView, SortState};

/// Message shown when a search returns nothing.
pub const NO_RESULTS: &str = "검색 결과가 없습니다";

/// A single data row, every cell formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in column order
    pub values: Vec<String>,
}

/// Table-ready wage data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageTable {
    /// Column headers; the active sort column carries `↑` or `↓`
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Result count line, e.g. "총 2건의 결과"
    pub footer: String,
    /// Sort that produced the row order
    pub sort: SortState,
}

impl WageTable {
    /// Format a displayed view.
    pub fn from_view(view: &DisplayedView) -> Self {
        Self::from_records(&view.records, view.sort)
    }

    /// Format records that are already in display order.
    pub fn from_records(records: &[WageRecord], sort: SortState) -> Self {
        let headers = WageField::ALL
            .iter()
            .map(|&field| {
                if field == sort.field {
                    format!("{} {}", field.korean_label(), sort.direction.indicator())
                } else {
                    field.korean_label().to_string()
                }
            })
            .collect();
        let rows = records
            .iter()
            .map(|r| TableRow {
                values: vec![
                    r.job_type.clone(),
                    r.region.clone(),
                    format_won(r.unit_price),
                    r.effective_date.clone(),
                ],
            })
            .collect();

        WageTable {
            headers,
            rows,
            footer: format!("총 {}건의 결과", records.len()),
            sort,
        }
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Format an amount as Korean won with thousands separators, e.g. `₩150,000`.
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₩{}", grouped)
}
