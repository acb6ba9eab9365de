//! Error types for card sub-form validation.
//!
//! Validation outcomes are plain values ([`ErrorKind`]): every validator
//! reports which rule the input failed instead of returning an error.
//! [`ValidationError`] and [`FormError`] are real errors, returned only by
//! APIs that hand back a card or that receive out-of-range selections or
//! bad configuration.

use crate::card::NetworkId;
use crate::catalog::LengthRule;
use std::fmt;

/// The outcome of a single validation rule.
///
/// A form tracks two independent error channels: one for the card number and
/// one shared by the expiration date and the CVV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The input passed every rule.
    #[default]
    None,
    /// The digit count is wrong for the detected network.
    InvalidLength,
    /// No network prefix pattern matched.
    UnsupportedCard,
    /// The Luhn checksum failed.
    InvalidNumber,
    /// The selected expiration predates the current month.
    InvalidMonth,
    /// The CVV is non-numeric, has the wrong digit count, or no network is known.
    InvalidCcv,
}

impl ErrorKind {
    /// Stable identifier, suitable for lookup tables in a UI layer.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::InvalidLength => "invalid_length",
            Self::UnsupportedCard => "unsupported_card",
            Self::InvalidNumber => "invalid_number",
            Self::InvalidMonth => "invalid_month",
            Self::InvalidCcv => "invalid_ccv",
        }
    }

    /// Human-readable message for the outcome.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::None => "no error",
            Self::InvalidLength => "card number has the wrong number of digits for its network",
            Self::UnsupportedCard => "card network is not supported",
            Self::InvalidNumber => "card number failed the checksum - please verify it",
            Self::InvalidMonth => "expiration date is in the past",
            Self::InvalidCcv => "security code does not match the card network",
        }
    }

    /// Returns true if this is [`ErrorKind::None`].
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// All outcomes, in declaration order.
    pub const ALL: [ErrorKind; 6] = [
        Self::None,
        Self::InvalidLength,
        Self::UnsupportedCard,
        Self::InvalidNumber,
        Self::InvalidMonth,
        Self::InvalidCcv,
    ];

    /// Parses a code produced by [`ErrorKind::code`].
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors returned by [`crate::validate()`] when a card number is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input contained no characters other than separators.
    Empty,

    /// No network prefix pattern matched.
    UnsupportedCard,

    /// The digit count does not satisfy the network's length rule.
    InvalidLength {
        /// The detected network.
        network: NetworkId,
        /// Number of characters after normalization.
        length: usize,
        /// The rule the network requires.
        rule: LengthRule,
    },

    /// The Luhn checksum failed.
    InvalidNumber,
}

impl ValidationError {
    /// The validation outcome this error corresponds to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty | Self::UnsupportedCard => ErrorKind::UnsupportedCard,
            Self::InvalidLength { .. } => ErrorKind::InvalidLength,
            Self::InvalidNumber => ErrorKind::InvalidNumber,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),
            Self::UnsupportedCard => {
                write!(f, "unsupported card - check the card number prefix")
            }
            Self::InvalidLength {
                network,
                length,
                rule,
            } => write!(
                f,
                "{} cards must have {} digits, got {}",
                network.name(),
                rule,
                length
            ),
            Self::InvalidNumber => {
                write!(f, "invalid number (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised by a [`crate::CardForm`] or its configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A month selection index outside 0-11.
    MonthOutOfRange(u32),

    /// A year selection index past the end of the year options.
    YearIndexOutOfRange {
        /// The index that was selected.
        index: usize,
        /// Number of year options available.
        len: usize,
    },

    /// A year range with no years in it.
    EmptyYearRange,

    /// Configuration could not be parsed.
    InvalidConfig(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange(index) => {
                write!(f, "month index {} is out of range (expected 0-11)", index)
            }
            Self::YearIndexOutOfRange { index, len } => {
                write!(f, "year index {} is out of range ({} years available)", index, len)
            }
            Self::EmptyYearRange => write!(f, "year range must contain at least one year"),
            Self::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for FormError {}
