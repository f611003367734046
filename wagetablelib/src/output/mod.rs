//! Output formatting: present the displayed view as a table or export file.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **WageTable**: Table-ready headers, rows and result count
//! - **Export**: Byte-exact CSV and tab-delimited files
//!
//! Both are pure presentation layers. All ordering happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use wagetablelib::data::WageRecord;
//! use wagetablelib::output::{export, ExportFormat, ExportOptions};
//!
//! let records = vec![WageRecord::new("건축목공", "서울", 150000, "2024-03-01")];
//! let date = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
//! let file = export(&records, ExportFormat::Csv, &ExportOptions::new(), date);
//! assert_eq!(file.file_name, "노임단가_2024-05-07.csv");
//! ```

pub mod export;
pub mod table;

pub use export::{
    export, export_file_name, serialize, ExportFile, ExportFormat, ExportOptions, HeaderLabels,
    QuoteStyle, DEFAULT_FILE_PREFIX,
};
pub use table::{format_won, TableRow, WageTable, NO_RESULTS};
