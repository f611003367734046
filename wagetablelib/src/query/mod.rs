//! Query processing: order records for display.
//!
//! This module handles the second stage of the pipeline - turning the raw
//! record set into the displayed order. It provides:
//!
//! - **Options**: Sort configuration (`SortState`, `SortDirection`)
//! - **Collation**: Korean string ordering for text columns
//! - **SortEngine**: Produces a `DisplayedView` without touching its input
//!
//! ## Example
//!
//! ```rust
//! use wagetablelib::data::{WageField, WageRecord};
//! use wagetablelib::query::{SortDirection, SortEngine};
//!
//! let engine = SortEngine::new().unwrap();
//! let records = vec![
//!     WageRecord::new("건축목공", "서울", 150000, "2024-03-01"),
//!     WageRecord::new("건축일반시공", "부산", 130000, "2023-11-15"),
//! ];
//! let sorted = engine.sort(&records, WageField::Region, SortDirection::Ascending);
//! assert_eq!(sorted[0].region, "부산");
//! ```

pub mod collation;
pub mod options;
pub mod sort;

pub use collation::KoreanCollator;
pub use options::{SortDirection, SortState};
pub use sort::{DisplayedView, SortEngine};
