//! Core card types.
//!
//! This module provides the [`NetworkId`] enum for identifying card networks
//! and the [`ValidatedCard`] struct holding an accepted card number securely.

use crate::catalog::{self, NetworkProfile};
use crate::mask;
use std::fmt;
use std::str::FromStr;
use zeroize::Zeroize;

/// Supported card networks.
///
/// Declaration order matches the catalog; [`NetworkId::Unknown`] is last and
/// stands for "no pattern matched".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NetworkId {
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Discover - Prefix 6011, 622126-622925, 65, length 16
    Discover,
    /// Mastercard - Prefix 51-55, length 16
    Mastercard,
    /// Visa - Prefix 4, length 16
    Visa,
    /// No network matched.
    #[default]
    Unknown,
}

impl NetworkId {
    /// Every network, in declaration order.
    pub const ALL: [NetworkId; 5] = [
        Self::Amex,
        Self::Discover,
        Self::Mastercard,
        Self::Visa,
        Self::Unknown,
    ];

    /// Stable lowercase identifier.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Mastercard => "mastercard",
            Self::Visa => "visa",
            Self::Unknown => "unknown",
        }
    }

    /// Display name from the catalog. Empty for [`NetworkId::Unknown`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.profile().display_name()
    }

    /// The catalog entry for this network.
    #[inline]
    pub fn profile(&self) -> &'static NetworkProfile {
        catalog::profile_for(*self)
    }

    /// Returns true for any network other than [`NetworkId::Unknown`].
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            f.write_str(self.name())
        } else {
            f.write_str("Unknown")
        }
    }
}

/// Error returned when parsing an unrecognised network identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNetworkId(pub String);

impl fmt::Display for UnknownNetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown network identifier '{}'", self.0)
    }
}

impl std::error::Error for UnknownNetworkId {}

impl FromStr for NetworkId {
    type Err = UnknownNetworkId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "american express" | "americanexpress" => return Ok(Self::Amex),
            "master card" | "mc" => return Ok(Self::Mastercard),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|id| id.id() == lowered)
            .ok_or_else(|| UnknownNetworkId(s.to_string()))
    }
}

/// Longest card number the digit buffer can hold.
pub const MAX_CARD_DIGITS: usize = 19;

/// An accepted card number with secure memory handling.
///
/// Produced only when a number passes classification, length and Luhn
/// checks. The digits live in a fixed-size array that is zeroed on drop.
///
/// # Security
///
/// - Debug and Display are masked
/// - Equality is compared in constant time
#[derive(Clone)]
pub struct ValidatedCard {
    network: NetworkId,
    digits: [u8; MAX_CARD_DIGITS],
    digit_count: u8,
}

impl ValidatedCard {
    /// Builds a card from an ASCII digit string.
    ///
    /// Returns `None` if the string is empty, too long, or contains a
    /// non-digit. Callers are expected to have run the validation pipeline.
    pub(crate) fn from_digit_str(network: NetworkId, input: &str) -> Option<Self> {
        if input.is_empty() || input.len() > MAX_CARD_DIGITS {
            return None;
        }

        let mut digits = [0u8; MAX_CARD_DIGITS];
        for (slot, byte) in digits.iter_mut().zip(input.bytes()) {
            if !byte.is_ascii_digit() {
                return None;
            }
            *slot = byte - b'0';
        }

        Some(Self {
            network,
            digits,
            digit_count: input.len() as u8,
        })
    }

    /// Returns the detected network.
    #[inline]
    pub const fn network(&self) -> NetworkId {
        self.network
    }

    /// Returns the number of digits in the card number.
    #[inline]
    pub const fn length(&self) -> usize {
        self.digit_count as usize
    }

    /// Returns the last four digits as a string.
    pub fn last_four(&self) -> String {
        let len = self.length();
        let start = len.saturating_sub(4);
        self.digits[start..len]
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the full normalized card number.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`ValidatedCard::masked`] for display.
    pub fn number(&self) -> String {
        self.digits()
            .iter()
            .map(|&d| (b'0' + d) as char)
            .collect()
    }

    /// Returns the card number masked for display: `****-****-****-1111`.
    #[inline]
    pub fn masked(&self) -> String {
        mask::mask_card(self)
    }

    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits[..self.length()]
    }
}

impl PartialEq for ValidatedCard {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network && mask::constant_time_eq(self.digits(), other.digits())
    }
}

impl Eq for ValidatedCard {}

impl fmt::Debug for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedCard")
            .field("network", &self.network)
            .field("number", &self.masked())
            .field("length", &self.digit_count)
            .finish()
    }
}

impl fmt::Display for ValidatedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.network, self.masked())
    }
}

impl Drop for ValidatedCard {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}
