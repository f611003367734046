//! The wage record and its columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WageError;

/// One labor-wage entry: a trade in a region at a unit price, effective from a date.
///
/// Records are plain values. They are never modified after the provider
/// hands them over; sorting and exporting work on copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageRecord {
    /// Trade or occupation label (e.g. "건축목공")
    #[serde(alias = "직종")]
    pub job_type: String,
    /// Geographic label (e.g. "서울")
    #[serde(alias = "지역")]
    pub region: String,
    /// Daily unit price in whole won
    #[serde(alias = "단가")]
    pub unit_price: u64,
    /// Effective date label, `YYYY-MM-DD`; compared as text
    #[serde(alias = "기준일")]
    pub effective_date: String,
}

impl WageRecord {
    /// Create a new record.
    pub fn new(
        job_type: impl Into<String>,
        region: impl Into<String>,
        unit_price: u64,
        effective_date: impl Into<String>,
    ) -> Self {
        Self {
            job_type: job_type.into(),
            region: region.into(),
            unit_price,
            effective_date: effective_date.into(),
        }
    }

    /// Text value of a string-typed column, `None` for the numeric one.
    pub fn text(&self, field: WageField) -> Option<&str> {
        match field {
            WageField::JobType => Some(&self.job_type),
            WageField::Region => Some(&self.region),
            WageField::UnitPrice => None,
            WageField::EffectiveDate => Some(&self.effective_date),
        }
    }
}

/// A column of the wage table.
///
/// The declaration order is the table (and export) column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WageField {
    /// Trade or occupation
    JobType,
    /// Region
    Region,
    /// Unit price
    #[default]
    UnitPrice,
    /// Effective date
    EffectiveDate,
}

impl WageField {
    /// All columns in table order.
    pub const ALL: [WageField; 4] = [
        WageField::JobType,
        WageField::Region,
        WageField::UnitPrice,
        WageField::EffectiveDate,
    ];

    /// Canonical field name, as used in record files and the default export header.
    pub fn name(self) -> &'static str {
        match self {
            WageField::JobType => "jobType",
            WageField::Region => "region",
            WageField::UnitPrice => "unitPrice",
            WageField::EffectiveDate => "effectiveDate",
        }
    }

    /// Korean column label.
    pub fn korean_label(self) -> &'static str {
        match self {
            WageField::JobType => "직종",
            WageField::Region => "지역",
            WageField::UnitPrice => "단가",
            WageField::EffectiveDate => "기준일",
        }
    }

    /// Whether the column holds numbers rather than text.
    pub fn is_numeric(self) -> bool {
        matches!(self, WageField::UnitPrice)
    }
}

impl fmt::Display for WageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WageField {
    type Err = WageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "직종" => return Ok(WageField::JobType),
            "지역" => return Ok(WageField::Region),
            "단가" => return Ok(WageField::UnitPrice),
            "기준일" => return Ok(WageField::EffectiveDate),
            _ => {}
        }
        match s.to_lowercase().replace(&['-', '_'][..], "").as_str() {
            "jobtype" | "job" => Ok(WageField::JobType),
            "region" => Ok(WageField::Region),
            "unitprice" | "price" | "wage" => Ok(WageField::UnitPrice),
            "effectivedate" | "date" => Ok(WageField::EffectiveDate),
            _ => Err(WageError::InvalidField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_canonical_keys() {
        let json = r#"{"jobType":"건축목공","region":"서울","unitPrice":150000,"effectiveDate":"2024-03-01"}"#;
        let record: WageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            record,
            WageRecord::new("건축목공", "서울", 150000, "2024-03-01")
        );
    }

    #[test]
    fn test_record_deserializes_korean_keys() {
        let json = r#"{"직종":"건축일반시공","지역":"부산","단가":130000,"기준일":"2023-11-15"}"#;
        let record: WageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.job_type, "건축일반시공");
        assert_eq!(record.region, "부산");
        assert_eq!(record.unit_price, 130000);
        assert_eq!(record.effective_date, "2023-11-15");
    }

    #[test]
    fn test_record_rejects_negative_price() {
        let json = r#"{"jobType":"a","region":"b","unitPrice":-1,"effectiveDate":"2024-01-01"}"#;
        assert!(serde_json::from_str::<WageRecord>(json).is_err());
    }

    #[test]
    fn test_record_rejects_missing_field() {
        let json = r#"{"jobType":"a","region":"b","unitPrice":1}"#;
        assert!(serde_json::from_str::<WageRecord>(json).is_err());
    }

    #[test]
    fn test_record_serializes_canonical_keys() {
        let record = WageRecord::new("건축목공", "서울", 150000, "2024-03-01");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["jobType"], "건축목공");
        assert_eq!(value["unitPrice"], 150000);
    }

    #[test]
    fn test_text_accessor() {
        let record = WageRecord::new("건축목공", "서울", 150000, "2024-03-01");
        assert_eq!(record.text(WageField::JobType), Some("건축목공"));
        assert_eq!(record.text(WageField::Region), Some("서울"));
        assert_eq!(record.text(WageField::EffectiveDate), Some("2024-03-01"));
        assert_eq!(record.text(WageField::UnitPrice), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("jobType".parse::<WageField>().unwrap(), WageField::JobType);
        assert_eq!("job-type".parse::<WageField>().unwrap(), WageField::JobType);
        assert_eq!("region".parse::<WageField>().unwrap(), WageField::Region);
        assert_eq!("unit_price".parse::<WageField>().unwrap(), WageField::UnitPrice);
        assert_eq!("price".parse::<WageField>().unwrap(), WageField::UnitPrice);
        assert_eq!("date".parse::<WageField>().unwrap(), WageField::EffectiveDate);
        assert_eq!("단가".parse::<WageField>().unwrap(), WageField::UnitPrice);
        assert_eq!("기준일".parse::<WageField>().unwrap(), WageField::EffectiveDate);
        assert!("salary".parse::<WageField>().is_err());
    }

    #[test]
    fn test_field_order_and_labels() {
        let names: Vec<&str> = WageField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["jobType", "region", "unitPrice", "effectiveDate"]);
        let labels: Vec<&str> = WageField::ALL.iter().map(|f| f.korean_label()).collect();
        assert_eq!(labels, ["직종", "지역", "단가", "기준일"]);
        assert!(WageField::UnitPrice.is_numeric());
        assert!(!WageField::EffectiveDate.is_numeric());
    }
}
