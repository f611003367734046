//! Data providers: where wage records come from.
//!
//! The view coordinator only talks to the [`WageProvider`] trait. Remote
//! statistical services live outside this crate; two local providers are
//! included for files and in-memory data.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::criteria::FilterCriteria;
use super::record::WageRecord;
use crate::error::{ProviderError, WageError};
use crate::Result;

/// Source of wage records for a set of criteria.
pub trait WageProvider {
    /// Fetch every record matching `criteria`.
    ///
    /// Order of the returned records carries no meaning.
    fn fetch(&self, criteria: &FilterCriteria) -> std::result::Result<Vec<WageRecord>, ProviderError>;
}

/// Provider backed by a record list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    records: Vec<WageRecord>,
}

impl InMemoryProvider {
    /// Create a provider serving `records`.
    pub fn new(records: Vec<WageRecord>) -> Self {
        Self { records }
    }

    /// All records held, unfiltered.
    pub fn records(&self) -> &[WageRecord] {
        &self.records
    }
}

impl WageProvider for InMemoryProvider {
    fn fetch(&self, criteria: &FilterCriteria) -> std::result::Result<Vec<WageRecord>, ProviderError> {
        Ok(select(&self.records, criteria))
    }
}

/// Provider reading a JSON array of records from a file.
///
/// The file is read on every fetch, so edits show up on the next search.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    /// Create a provider for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every record in the file.
    pub fn load(&self) -> Result<Vec<WageRecord>> {
        load_records(&self.path)
    }
}

impl WageProvider for JsonFileProvider {
    fn fetch(&self, criteria: &FilterCriteria) -> std::result::Result<Vec<WageRecord>, ProviderError> {
        let records = self
            .load()
            .map_err(|e| ProviderError::new(e.to_string()))?;
        Ok(select(&records, criteria))
    }
}

/// Read a JSON array of wage records from `path`.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<WageRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| WageError::DataFile {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<WageRecord> =
        serde_json::from_str(&text).map_err(|e| WageError::DataFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), count = records.len(), "loaded wage records");
    Ok(records)
}

fn select(records: &[WageRecord], criteria: &FilterCriteria) -> Vec<WageRecord> {
    records
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<WageRecord> {
        vec![
            WageRecord::new("건축목공", "서울", 150000, "2024-03-01"),
            WageRecord::new("건축일반시공", "부산", 130000, "2023-11-15"),
            WageRecord::new("형틀목공", "대구", 160000, "2023-05-01"),
        ]
    }

    #[test]
    fn test_in_memory_fetch_all() {
        let provider = InMemoryProvider::new(sample());
        let records = provider.fetch(&FilterCriteria::show_all()).unwrap();
        assert_eq!(records, sample());
    }

    #[test]
    fn test_in_memory_fetch_filtered() {
        let provider = InMemoryProvider::new(sample());
        let records = provider.fetch(&FilterCriteria::build("목공", "2023")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].job_type, "형틀목공");
    }

    #[test]
    fn test_json_file_provider() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wages.json");
        fs::write(
            &path,
            r#"[
                {"직종":"건축목공","지역":"서울","단가":150000,"기준일":"2024-03-01"},
                {"jobType":"건축일반시공","region":"부산","unitPrice":130000,"effectiveDate":"2023-11-15"}
            ]"#,
        )
        .unwrap();

        let provider = JsonFileProvider::new(&path);
        assert_eq!(provider.path(), path.as_path());
        let records = provider.fetch(&FilterCriteria::show_all()).unwrap();
        assert_eq!(records.len(), 2);
        let records = provider.fetch(&FilterCriteria::build("일반", "전체")).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].region, "부산");
    }

    #[test]
    fn test_json_file_provider_missing_file() {
        let dir = tempdir().unwrap();
        let provider = JsonFileProvider::new(dir.path().join("missing.json"));
        assert!(matches!(provider.load(), Err(WageError::DataFile { .. })));
        assert!(provider.fetch(&FilterCriteria::show_all()).is_err());
    }

    #[test]
    fn test_json_file_provider_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"jobType":"건축목공"}]"#).unwrap();
        let provider = JsonFileProvider::new(&path);
        assert!(matches!(provider.load(), Err(WageError::DataFormat { .. })));
        let err = provider.fetch(&FilterCriteria::show_all()).unwrap_err();
        assert!(err.message().contains("bad.json"));
    }
}
