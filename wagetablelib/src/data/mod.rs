//! Data: the wage record model, search criteria and providers.
//!
//! This module covers the first stage of the pipeline, getting raw records
//! in. It provides:
//!
//! - **Records**: `WageRecord` and its columns (`WageField`)
//! - **Criteria**: `FilterCriteria` built from search-form input
//! - **Providers**: the `WageProvider` seam plus file and in-memory sources
//!
//! ## Example
//!
//! ```rust
//! use wagetablelib::data::{FilterCriteria, InMemoryProvider, WageProvider, WageRecord};
//!
//! let provider = InMemoryProvider::new(vec![
//!     WageRecord::new("건축목공", "서울", 150000, "2024-03-01"),
//!     WageRecord::new("건축일반시공", "부산", 130000, "2023-11-15"),
//! ]);
//! let records = provider.fetch(&FilterCriteria::build("목공", "2024")).unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod criteria;
pub mod provider;
pub mod record;

pub use criteria::{FilterCriteria, YearFilter, ALL_YEARS, YEAR_OPTIONS};
pub use provider::{load_records, InMemoryProvider, JsonFileProvider, WageProvider};
pub use record::{WageField, WageRecord};
