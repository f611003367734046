//! Sort options for the wage table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::data::WageField;
use crate::error::WageError;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (가-힣, smallest first)
    Ascending,
    /// Descending (힣-가, largest first)
    #[default]
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active column header.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

impl FromStr for SortDirection {
    type Err = WageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(WageError::InvalidDirection(s.to_string())),
        }
    }
}

/// Active sort column and direction.
///
/// Starts at unit price, descending. Changed only by header clicks
/// ([`SortState::click`]); a data refresh leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Column to sort by
    pub field: WageField,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortState {
    /// Sort by `field` in `direction`.
    pub fn new(field: WageField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Apply a click on the header of `field`.
    ///
    /// Clicking the active column flips the direction; clicking another
    /// column selects it, descending.
    pub fn click(self, field: WageField) -> Self {
        if field == self.field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Descending,
            }
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = SortDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_state_default() {
        let state = SortState::default();
        assert_eq!(state.field, WageField::UnitPrice);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_click_same_field_flips() {
        let state = SortState::default().click(WageField::UnitPrice);
        assert_eq!(state, SortState::new(WageField::UnitPrice, SortDirection::Ascending));
        let state = state.click(WageField::UnitPrice);
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn test_click_other_field_resets_to_descending() {
        let state = SortState::default().ascending().click(WageField::Region);
        assert_eq!(state, SortState::new(WageField::Region, SortDirection::Descending));
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Descending);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_indicator() {
        assert_eq!(SortDirection::Ascending.indicator(), "↑");
        assert_eq!(SortDirection::Descending.indicator(), "↓");
    }
}
