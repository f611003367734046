//! # wagetablelib
//!
//! A tabular data engine for labor-wage unit prices: search criteria in,
//! a deterministically ordered view out, and byte-exact CSV/tab-delimited
//! exports of whatever is on screen.
//!
//! ## Overview
//!
//! Records come from a [`WageProvider`] (a statistics service, a JSON file,
//! memory). The [`ViewCoordinator`] keeps the latest record set and the sort
//! state, and derives the displayed view on demand:
//!
//! - **Data**: `WageRecord`, `FilterCriteria`, providers
//! - **Query**: `SortEngine` with Korean collation for text columns
//! - **Output**: `WageTable` for display, `export` for CSV/TXT files
//! - **View**: request sequencing, sort toggling, export of the current view
//!
//! ## Features
//!
//! - **Korean collation**: job types and regions sort in 가나다 order
//! - **Stable single-column sort**: header-click semantics, descending by default
//! - **Latest-only responses**: stale provider responses never overwrite newer ones
//! - **Pure data types**: no rendering, no network I/O
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wagetablelib::{ExportFormat, InMemoryProvider, ViewCoordinator, WageField, WageRecord};
//!
//! let provider = InMemoryProvider::new(vec![
//!     WageRecord::new("건축목공", "서울", 150000, "2024-03-01"),
//!     WageRecord::new("건축일반시공", "부산", 130000, "2023-11-15"),
//! ]);
//!
//! let mut view = ViewCoordinator::new().unwrap();
//! view.startup(&provider).unwrap();
//!
//! // Default sort: unit price, descending
//! assert_eq!(view.displayed_view().records[0].job_type, "건축목공");
//!
//! // Click the region header
//! view.set_sort(WageField::Region);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
//! let file = view.export_current_view_on(ExportFormat::Csv, date).unwrap();
//! assert_eq!(file.file_name, "노임단가_2024-05-07.csv");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod view;

pub use data::{
    load_records, FilterCriteria, InMemoryProvider, JsonFileProvider, WageField, WageProvider,
    WageRecord, YearFilter, ALL_YEARS, YEAR_OPTIONS,
};
pub use error::{ProviderError, WageError};
pub use output::{
    export, export_file_name, format_won, serialize, ExportFile, ExportFormat, ExportOptions,
    HeaderLabels, QuoteStyle, TableRow, WageTable, DEFAULT_FILE_PREFIX, NO_RESULTS,
};
pub use query::{DisplayedView, KoreanCollator, SortDirection, SortEngine, SortState};
pub use view::{Resolution, SearchTicket, ViewCoordinator, ViewStatus};

/// Result type for wagetablelib operations
pub type Result<T> = std::result::Result<T, WageError>;
