//! Expiration date validation for month/year selectors.
//!
//! Months are 0-based (0 = January, 11 = December), matching the position
//! of the entry in [`crate::calendar::MONTHS`]. A card is valid through the
//! end of its expiry month, so the current month is still acceptable.
//!
//! # Example
//!
//! ```
//! use cc_subform::expiry::is_expiration_valid;
//!
//! // June 2025 selected, June 2025 today
//! assert!(is_expiration_valid(5, 2025, 5, 2025));
//! // May 2025 selected, June 2025 today
//! assert!(!is_expiration_valid(4, 2025, 5, 2025));
//! // Any month of a later year
//! assert!(is_expiration_valid(0, 2026, 5, 2025));
//! ```

use crate::error::{ErrorKind, FormError};
use chrono::Datelike;
use std::fmt;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    /// Four-digit year (e.g., 2025)
    year: i32,
    /// Month (0-11)
    month: u32,
}

impl YearMonth {
    /// Creates a year/month pair.
    ///
    /// Returns `None` if the month is not 0-11.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if month > 11 {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 0-based month.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Formats as MM/YY with a 1-based month.
    pub fn format_short(&self) -> String {
        format!("{:02}/{:02}", self.month + 1, self.year.rem_euclid(100))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month + 1, self.year)
    }
}

/// Reads today's year and month from the local clock.
pub fn current_year_month() -> YearMonth {
    let now = chrono::Local::now();
    YearMonth {
        year: now.year(),
        month: now.month0(),
    }
}

/// Checks a selected expiration against the current month.
///
/// Valid iff the selected year is later than the current year, or it is
/// the current year and the selected month is not earlier than the current
/// month.
#[inline]
pub const fn is_expiration_valid(
    selected_month: u32,
    selected_year: i32,
    now_month: u32,
    now_year: i32,
) -> bool {
    selected_year > now_year || (selected_year == now_year && selected_month >= now_month)
}

/// The month/year selector state of a form.
///
/// The error channel is shared with the CVV field: whichever of the two
/// was validated last owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationState {
    selected_month: u32,
    selected_year: i32,
    error_kind: ErrorKind,
}

impl ExpirationState {
    /// Creates a selection pointing at `today`, with no error.
    pub const fn new(today: YearMonth) -> Self {
        Self {
            selected_month: today.month,
            selected_year: today.year,
            error_kind: ErrorKind::None,
        }
    }

    /// The selected month (0-11).
    #[inline]
    pub const fn selected_month(&self) -> u32 {
        self.selected_month
    }

    /// The selected year.
    #[inline]
    pub const fn selected_year(&self) -> i32 {
        self.selected_year
    }

    /// The selection as a [`YearMonth`].
    #[inline]
    pub const fn selection(&self) -> YearMonth {
        YearMonth {
            year: self.selected_year,
            month: self.selected_month,
        }
    }

    /// The shared expiration/CVV error.
    #[inline]
    pub const fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    /// Returns true if the selection is not in the past relative to `today`.
    #[inline]
    pub const fn is_valid_on(&self, today: YearMonth) -> bool {
        is_expiration_valid(self.selected_month, self.selected_year, today.month, today.year)
    }

    /// Selects a month and re-validates.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MonthOutOfRange`] if `month` is not 0-11; the
    /// state is left unchanged.
    pub fn select_month(&mut self, month: u32, today: YearMonth) -> Result<ErrorKind, FormError> {
        if month > 11 {
            return Err(FormError::MonthOutOfRange(month));
        }
        self.selected_month = month;
        Ok(self.revalidate(today))
    }

    /// Selects a year and re-validates.
    pub fn select_year(&mut self, year: i32, today: YearMonth) -> ErrorKind {
        self.selected_year = year;
        self.revalidate(today)
    }

    pub(crate) fn set_error(&mut self, kind: ErrorKind) {
        self.error_kind = kind;
    }

    fn revalidate(&mut self, today: YearMonth) -> ErrorKind {
        self.error_kind = if self.is_valid_on(today) {
            ErrorKind::None
        } else {
            ErrorKind::InvalidMonth
        };
        tracing::trace!(
            selection = %self.selection(),
            today = %today,
            error = self.error_kind.code(),
            "expiration evaluated"
        );
        self.error_kind
    }
}
