//! Korean collation for text columns.
//!
//! Labels are ordered the way a Korean reader expects (가나다 order, case
//! folded Latin, locale-aware punctuation), not by code point.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::error::WageError;
use crate::Result;

/// String comparator using the Korean (`ko`) collation tailoring.
pub struct KoreanCollator {
    inner: Collator,
}

impl KoreanCollator {
    /// Load the Korean collation data.
    pub fn new() -> Result<Self> {
        let inner = Collator::try_new(&locale!("ko").into(), CollatorOptions::new())
            .map_err(|e| WageError::Collation(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Compare two labels in Korean collation order.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.inner.compare(left, right)
    }
}

impl fmt::Debug for KoreanCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KoreanCollator").field("locale", &"ko").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_order() {
        let collator = KoreanCollator::new().unwrap();
        assert_eq!(collator.compare("가", "나"), Ordering::Less);
        assert_eq!(collator.compare("부산", "서울"), Ordering::Less);
        assert_eq!(collator.compare("건축목공", "건축일반시공"), Ordering::Less);
        assert_eq!(collator.compare("서울", "서울"), Ordering::Equal);
    }

    #[test]
    fn test_differs_from_code_point_order() {
        let collator = KoreanCollator::new().unwrap();
        // Code point order puts every uppercase letter before lowercase ones.
        assert!("Banana" < "apple");
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let collator = KoreanCollator::new().unwrap();
        assert_eq!(collator.compare("2023-11-15", "2024-03-01"), Ordering::Less);
        assert_eq!(collator.compare("2024-03-01", "2024-02-28"), Ordering::Greater);
    }
}
