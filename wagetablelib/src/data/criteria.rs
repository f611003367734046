//! Search criteria sent to a data provider.
//!
//! Criteria are built from raw form input without trimming or validation:
//! an empty job-type fragment means "every job type", and the year is either
//! a literal (normally four digits) or the "all years" sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WageError;
use crate::Result;

/// Sentinel year value meaning "no year restriction".
pub const ALL_YEARS: &str = "전체";

/// Years offered by the search form, newest first.
pub const YEAR_OPTIONS: [&str; 5] = ["2025", "2024", "2023", "2022", "2021"];

/// Year restriction of a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearFilter {
    /// No year restriction
    #[default]
    All,
    /// Restrict to one year, kept exactly as entered
    Year(String),
}

impl YearFilter {
    /// Interpret a raw year selector value.
    ///
    /// `전체`, `all` and the empty string are the sentinel; anything else is
    /// passed through as entered.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | ALL_YEARS => YearFilter::All,
            s if s.eq_ignore_ascii_case("all") => YearFilter::All,
            s => YearFilter::Year(s.to_string()),
        }
    }

    /// The selector value this filter corresponds to.
    pub fn as_str(&self) -> &str {
        match self {
            YearFilter::All => ALL_YEARS,
            YearFilter::Year(year) => year,
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized search input for a data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Fragment of the job type to look for; empty matches everything
    pub job_type_fragment: String,
    /// Year restriction
    pub year: YearFilter,
}

impl FilterCriteria {
    /// Build criteria from the raw job-type text and year selector value.
    pub fn build(job_type: impl Into<String>, year: &str) -> Self {
        Self {
            job_type_fragment: job_type.into(),
            year: YearFilter::parse(year),
        }
    }

    /// Criteria that match every record: no fragment, all years.
    ///
    /// This is what the application searches for at startup.
    pub fn show_all() -> Self {
        Self::default()
    }

    /// Drop the job-type fragment but keep the year restriction.
    pub fn view_all(&self) -> Self {
        Self {
            job_type_fragment: String::new(),
            year: self.year.clone(),
        }
    }

    /// Back to the form defaults.
    pub fn reset(&self) -> Self {
        Self::show_all()
    }

    /// Builder: set the job-type fragment.
    pub fn job_type(mut self, fragment: impl Into<String>) -> Self {
        self.job_type_fragment = fragment.into();
        self
    }

    /// Builder: set the year restriction from a selector value.
    pub fn year(mut self, year: &str) -> Self {
        self.year = YearFilter::parse(year);
        self
    }

    /// Build criteria from loosely keyed parameters.
    ///
    /// Accepted keys are `jobType`/`직종` and `year`/`년도`. Any other key is
    /// rejected rather than forwarded to the provider.
    pub fn from_params<I, K, V>(params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (key, value) in params {
            match key.as_ref() {
                "jobType" | "직종" => criteria.job_type_fragment = value.as_ref().to_string(),
                "year" | "년도" => criteria.year = YearFilter::parse(value.as_ref()),
                other => return Err(WageError::UnknownParameter(other.to_string())),
            }
        }
        Ok(criteria)
    }

    /// Whether a record satisfies these criteria.
    ///
    /// Local providers use this to answer a fetch: the job type must contain
    /// the fragment and the effective date must start with the year.
    pub fn matches(&self, record: &crate::data::WageRecord) -> bool {
        let job_ok = record.job_type.contains(self.job_type_fragment.as_str());
        let year_ok = match &self.year {
            YearFilter::All => true,
            YearFilter::Year(year) => record.effective_date.starts_with(year.as_str()),
        };
        job_ok && year_ok
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "jobType={:?} year={}", self.job_type_fragment, self.year)
    }
}
