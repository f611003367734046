//! Error types for wagetablelib

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a data provider.
///
/// The message is carried for logging only. Callers treat every provider
/// failure the same way: the data is unavailable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("data unavailable: {message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// Create a provider failure with a diagnostic message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Diagnostic message supplied by the provider.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur while loading, viewing or exporting wage data
#[derive(Error, Debug)]
pub enum WageError {
    /// The data provider did not deliver records
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Failed to read a local record file
    #[error("failed to read data file '{path}': {source}")]
    DataFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A local record file is not a JSON array of wage records
    #[error("invalid wage data in '{path}': {message}")]
    DataFormat { path: PathBuf, message: String },

    /// Search parameter outside the known set
    #[error("unknown search parameter: {0}")]
    UnknownParameter(String),

    /// Unknown sort field name
    #[error("unknown sort field: {0}")]
    InvalidField(String),

    /// Unknown export format name
    #[error("unknown export format: {0}")]
    InvalidFormat(String),

    /// Unknown sort direction name
    #[error("unknown sort direction: {0}")]
    InvalidDirection(String),

    /// Export requested while a search is in flight
    #[error("a search is in progress; try again once it completes")]
    Busy,

    /// The Korean collator could not be constructed
    #[error("collation unavailable: {0}")]
    Collation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
