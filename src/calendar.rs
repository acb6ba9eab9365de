//! Reference data for the expiration selectors.
//!
//! # Example
//!
//! ```
//! use cc_subform::calendar::{YearRange, MONTHS};
//!
//! assert_eq!(MONTHS[0].label, "Jan-1");
//! assert_eq!(MONTHS[11].value, "12");
//!
//! let range = YearRange::new(2025, 3).unwrap();
//! assert_eq!(range.years(), vec!["2025", "2026", "2027"]);
//! ```

use crate::error::FormError;
use crate::expiry::current_year_month;

/// Number of selectable years when none is configured.
pub const DEFAULT_YEAR_COUNT: u32 = 5;

/// One entry in the month selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonthOption {
    /// Text shown to the user.
    pub label: &'static str,
    /// Submitted value, the 1-based month number.
    pub value: &'static str,
}

const fn month(label: &'static str, value: &'static str) -> MonthOption {
    MonthOption { label, value }
}

/// The twelve month options. The position is the 0-based month index.
pub static MONTHS: [MonthOption; 12] = [
    month("Jan-1", "1"),
    month("Feb-2", "2"),
    month("Mar-3", "3"),
    month("Apr-4", "4"),
    month("May-5", "5"),
    month("Jun-6", "6"),
    month("Jul-7", "7"),
    month("Aug-8", "8"),
    month("Sep-9", "9"),
    month("Oct-10", "10"),
    month("Nov-11", "11"),
    month("Dec-12", "12"),
];

/// A run of consecutive selectable expiration years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearRange {
    first: i32,
    count: u32,
}

impl YearRange {
    /// Creates a range of `count` years starting at `first`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyYearRange`] if `count` is zero.
    pub fn new(first: i32, count: u32) -> Result<Self, FormError> {
        let range = Self { first, count };
        range.validate()?;
        Ok(range)
    }

    /// The default range: five years starting at the current year.
    pub fn starting_this_year() -> Self {
        Self {
            first: current_year_month().year(),
            count: DEFAULT_YEAR_COUNT,
        }
    }

    /// The first selectable year.
    #[inline]
    pub const fn first(&self) -> i32 {
        self.first
    }

    /// Number of selectable years.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The last selectable year, or `None` for an empty range.
    pub fn last(&self) -> Option<i32> {
        self.count
            .checked_sub(1)
            .and_then(|offset| i32::try_from(offset).ok())
            .and_then(|offset| self.first.checked_add(offset))
    }

    /// Looks up the year at a selector index.
    pub fn year_at(&self, index: usize) -> Option<i32> {
        if index >= self.count as usize {
            return None;
        }
        i32::try_from(index)
            .ok()
            .and_then(|offset| self.first.checked_add(offset))
    }

    /// Returns true if `year` is one of the selectable years.
    pub fn contains(&self, year: i32) -> bool {
        self.year_values().any(|y| y == year)
    }

    /// The selectable years in order.
    pub fn year_values(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.count as usize).map_while(move |i| self.year_at(i))
    }

    /// The selectable years as selector strings.
    pub fn years(&self) -> Vec<String> {
        self.year_values().map(|y| y.to_string()).collect()
    }

    pub(crate) fn validate(&self) -> Result<(), FormError> {
        if self.count == 0 {
            return Err(FormError::EmptyYearRange);
        }
        Ok(())
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::starting_this_year()
    }
}
