//! Export of the displayed view to delimited text files.
//!
//! Two layouts are produced, byte for byte:
//!
//! - **CSV**: `jobType,region,unitPrice,effectiveDate` header, text fields
//!   wrapped in double quotes, unit price bare.
//! - **Tab-delimited**: same header and fields joined by tabs, no quoting.
//!
//! Rows are separated by `\n`; the header line always ends with `\n` and the
//! last data row has no terminator. Columns are always in table order,
//! whatever the current sort.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::{WageField, WageRecord};
use crate::error::WageError;
use crate::Result;

/// Default file name prefix ("labor unit price").
pub const DEFAULT_FILE_PREFIX: &str = "노임단가";

/// Export file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    /// Comma-separated values (`.csv`)
    Csv,
    /// Tab-delimited text (`.txt`)
    TabDelimited,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::TabDelimited => "txt",
        }
    }

    /// MIME type of the produced content.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::TabDelimited => "text/plain;charset=utf-8",
        }
    }

    fn separator(self) -> char {
        match self {
            ExportFormat::Csv => ',',
            ExportFormat::TabDelimited => '\t',
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = WageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" | "tsv" | "tab" | "text" => Ok(ExportFormat::TabDelimited),
            _ => Err(WageError::InvalidFormat(s.to_string())),
        }
    }
}

/// Header labels, one per column in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabels([String; 4]);

impl HeaderLabels {
    /// `jobType, region, unitPrice, effectiveDate`
    pub fn canonical() -> Self {
        Self(WageField::ALL.map(|f| f.name().to_string()))
    }

    /// `직종, 지역, 단가, 기준일`
    pub fn korean() -> Self {
        Self(WageField::ALL.map(|f| f.korean_label().to_string()))
    }

    /// Custom labels in table order.
    pub fn custom(labels: [String; 4]) -> Self {
        Self(labels)
    }

    /// Labels in table order.
    pub fn labels(&self) -> &[String; 4] {
        &self.0
    }
}

impl Default for HeaderLabels {
    fn default() -> Self {
        Self::canonical()
    }
}

/// How text fields are quoted in CSV output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteStyle {
    /// Wrap in double quotes, content untouched. Matches the reference
    /// export; a value containing `"` produces an unparseable field.
    #[default]
    Verbatim,
    /// Wrap in double quotes and double any embedded `"`.
    Escaped,
}

/// Options for producing export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// File name prefix, before `_YYYY-MM-DD`
    pub file_prefix: String,
    /// Header row labels
    pub headers: HeaderLabels,
    /// CSV text field quoting
    pub quoting: QuoteStyle,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            headers: HeaderLabels::default(),
            quoting: QuoteStyle::default(),
        }
    }
}

impl ExportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file name prefix.
    pub fn file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set the header labels.
    pub fn headers(mut self, headers: HeaderLabels) -> Self {
        self.headers = headers;
        self
    }

    /// Set the CSV quoting style.
    pub fn quoting(mut self, quoting: QuoteStyle) -> Self {
        self.quoting = quoting;
        self
    }
}

/// A produced export: suggested file name plus exact content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name, `<prefix>_<YYYY-MM-DD>.<csv|txt>`
    pub file_name: String,
    /// Layout of `content`
    pub format: ExportFormat,
    /// UTF-8 file content
    pub content: Vec<u8>,
    /// Number of data rows (header excluded)
    pub row_count: usize,
}

impl ExportFile {
    /// Write the content into `dir` under the suggested file name.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.content)?;
        info!(path = %path.display(), rows = self.row_count, "export written");
        Ok(path)
    }
}

/// File name for an export made on `date`.
pub fn export_file_name(prefix: &str, date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Serialize `records`, in the given order, to text.
pub fn serialize(records: &[WageRecord], format: ExportFormat, options: &ExportOptions) -> String {
    let separator = format.separator().to_string();
    let mut out = options.headers.labels().join(&separator);
    out.push('\n');

    let rows: Vec<String> = records
        .iter()
        .map(|record| match format {
            ExportFormat::Csv => csv_row(record, options.quoting),
            ExportFormat::TabDelimited => tab_row(record),
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

/// Serialize `records` into an export file dated `date`.
pub fn export(
    records: &[WageRecord],
    format: ExportFormat,
    options: &ExportOptions,
    date: NaiveDate,
) -> ExportFile {
    let content = serialize(records, format, options);
    let file_name = export_file_name(&options.file_prefix, date, format);
    info!(%format, rows = records.len(), file = %file_name, "export produced");
    ExportFile {
        file_name,
        format,
        content: content.into_bytes(),
        row_count: records.len(),
    }
}

fn quoted(value: &str, quoting: QuoteStyle) -> String {
    match quoting {
        QuoteStyle::Verbatim => format!("\"{}\"", value),
        QuoteStyle::Escaped => format!("\"{}\"", value.replace('"', "\"\"")),
    }
}

fn csv_row(record: &WageRecord, quoting: QuoteStyle) -> String {
    format!(
        "{},{},{},{}",
        quoted(&record.job_type, quoting),
        quoted(&record.region, quoting),
        record.unit_price,
        quoted(&record.effective_date, quoting)
    )
}

fn tab_row(record: &WageRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        record.job_type, record.region, record.unit_price, record.effective_date
    )
}
