//! Static per-network reference data.
//!
//! One [`NetworkProfile`] exists per [`NetworkId`]. Profiles are `'static`
//! and never change after startup; prefix patterns are compiled on first use.
//!
//! | Network | Prefix | Length | CVV |
//! |---------|--------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover Card | 6011, 622126-622925, 65 | 16 | 3 |
//! | Master Card | 51-55 | 16 | 3 |
//! | Visa | 4 | 16 | 3 |

use crate::card::NetworkId;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// The digit counts a network accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthRule {
    /// Exactly this many digits.
    Exact(usize),
    /// Any count in `min..=max`.
    Range {
        /// Fewest digits accepted.
        min: usize,
        /// Most digits accepted.
        max: usize,
    },
}

impl LengthRule {
    /// Returns true if `length` satisfies the rule.
    #[inline]
    pub const fn accepts(&self, length: usize) -> bool {
        match *self {
            Self::Exact(n) => length == n,
            Self::Range { min, max } => length >= min && length <= max,
        }
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

/// Reference data for one card network.
#[derive(Debug)]
pub struct NetworkProfile {
    id: NetworkId,
    display_name: &'static str,
    length: LengthRule,
    cvv_digits: usize,
    pattern: Option<&'static str>,
}

impl NetworkProfile {
    /// The network this profile describes.
    #[inline]
    pub const fn id(&self) -> NetworkId {
        self.id
    }

    /// Human-readable network name. Empty for [`NetworkId::Unknown`].
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The digit-count rule for card numbers on this network.
    #[inline]
    pub const fn length_rule(&self) -> LengthRule {
        self.length
    }

    /// The exact length, if the profile declares one.
    pub const fn exact_length(&self) -> Option<usize> {
        match self.length {
            LengthRule::Exact(n) => Some(n),
            LengthRule::Range { .. } => None,
        }
    }

    /// The minimum length, if the profile declares a range.
    pub const fn min_length(&self) -> Option<usize> {
        match self.length {
            LengthRule::Range { min, .. } => Some(min),
            LengthRule::Exact(_) => None,
        }
    }

    /// The maximum length, if the profile declares a range.
    pub const fn max_length(&self) -> Option<usize> {
        match self.length {
            LengthRule::Range { max, .. } => Some(max),
            LengthRule::Exact(_) => None,
        }
    }

    /// Number of digits in this network's CVV.
    #[inline]
    pub const fn cvv_digits(&self) -> usize {
        self.cvv_digits
    }

    /// The prefix pattern source, if the network has one.
    #[inline]
    pub const fn pattern_source(&self) -> Option<&'static str> {
        self.pattern
    }

    /// Returns true if `input` matches this network's prefix pattern.
    ///
    /// Always false for a profile without a pattern.
    pub fn matches(&self, input: &str) -> bool {
        COMPILED_PATTERNS[self.id as usize]
            .as_ref()
            .map_or(false, |re| re.is_match(input))
    }
}

/// Indexed by `NetworkId as usize`; keep in declaration order.
static CATALOG: [NetworkProfile; 5] = [
    NetworkProfile {
        id: NetworkId::Amex,
        display_name: "American Express",
        length: LengthRule::Exact(15),
        cvv_digits: 4,
        pattern: Some(r"^3[47]"),
    },
    NetworkProfile {
        id: NetworkId::Discover,
        display_name: "Discover Card",
        length: LengthRule::Exact(16),
        cvv_digits: 3,
        pattern: Some(
            r"^(6011|622(12[6-9]|1[3-9][0-9]|[2-8][0-9]{2}|9[0-1][0-9]|92[0-5]|64[4-9])|65)",
        ),
    },
    NetworkProfile {
        id: NetworkId::Mastercard,
        display_name: "Master Card",
        length: LengthRule::Exact(16),
        cvv_digits: 3,
        pattern: Some(r"^5[1-5]"),
    },
    NetworkProfile {
        id: NetworkId::Visa,
        display_name: "Visa",
        length: LengthRule::Exact(16),
        cvv_digits: 3,
        pattern: Some(r"^4"),
    },
    NetworkProfile {
        id: NetworkId::Unknown,
        display_name: "",
        length: LengthRule::Exact(0),
        cvv_digits: 0,
        pattern: None,
    },
];

static COMPILED_PATTERNS: Lazy<Vec<Option<Regex>>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|profile| {
            profile
                .pattern
                .map(|source| Regex::new(source).expect("catalog pattern is a valid regex"))
        })
        .collect()
});

/// Networks tried by the classifier, highest priority first.
///
/// Patterns are mutually exclusive today, but the order is still fixed so that
/// detection stays deterministic if overlapping networks are added.
pub const CLASSIFICATION_ORDER: [NetworkId; 4] = [
    NetworkId::Amex,
    NetworkId::Discover,
    NetworkId::Mastercard,
    NetworkId::Visa,
];

/// Returns the profile for a network. Never fails.
#[inline]
pub fn profile_for(id: NetworkId) -> &'static NetworkProfile {
    &CATALOG[id as usize]
}

/// Iterates every network and its profile in declaration order.
pub fn profiles() -> impl Iterator<Item = (NetworkId, &'static NetworkProfile)> {
    NetworkId::ALL.into_iter().map(|id| (id, profile_for(id)))
}
