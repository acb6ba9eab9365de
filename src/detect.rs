//! Card network detection and per-network length checks.
//!
//! Detection tests each catalog pattern in [`CLASSIFICATION_ORDER`] and
//! returns the first match. Because patterns only look at leading digits,
//! a partially typed number is classified as soon as its prefix is
//! recognisable.

use crate::card::NetworkId;
use crate::catalog::{profile_for, CLASSIFICATION_ORDER};

/// Classifies a normalized card number by its prefix.
///
/// This is pure string matching: the input is not checked for digit-only
/// content.
///
/// # Example
///
/// ```
/// use cc_subform::detect::classify;
/// use cc_subform::NetworkId;
///
/// assert_eq!(classify("378282246310005"), NetworkId::Amex);
/// assert_eq!(classify("4111111111111111"), NetworkId::Visa);
/// assert_eq!(classify("1234567890123456"), NetworkId::Unknown);
/// ```
pub fn classify(normalized: &str) -> NetworkId {
    CLASSIFICATION_ORDER
        .into_iter()
        .find(|&id| profile_for(id).matches(normalized))
        .unwrap_or(NetworkId::Unknown)
}

/// Checks the digit count of `digits` against the network's length rule.
///
/// Always false for [`NetworkId::Unknown`].
///
/// # Example
///
/// ```
/// use cc_subform::detect::is_length_valid;
/// use cc_subform::NetworkId;
///
/// assert!(is_length_valid("378282246310005", NetworkId::Amex));
/// assert!(!is_length_valid("37828224631000", NetworkId::Amex));
/// ```
#[inline]
pub fn is_length_valid(digits: &str, network: NetworkId) -> bool {
    network.is_known() && profile_for(network).length_rule().accepts(digits.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(classify("4111111111111111"), NetworkId::Visa);
        assert_eq!(classify("4"), NetworkId::Visa);
        assert_eq!(classify("4532015112830366"), NetworkId::Visa);
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(classify("5100000000000000"), NetworkId::Mastercard);
        assert_eq!(classify("5500000000000004"), NetworkId::Mastercard);
        assert_eq!(classify("5600000000000000"), NetworkId::Unknown);
        assert_eq!(classify("50"), NetworkId::Unknown);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(classify("34"), NetworkId::Amex);
        assert_eq!(classify("378282246310005"), NetworkId::Amex);
        assert_eq!(classify("36"), NetworkId::Unknown);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(classify("6011111111111117"), NetworkId::Discover);
        assert_eq!(classify("65"), NetworkId::Discover);
        assert_eq!(classify("622126"), NetworkId::Discover);
        assert_eq!(classify("622925"), NetworkId::Discover);
        assert_eq!(classify("622926"), NetworkId::Unknown);
        assert_eq!(classify("6010"), NetworkId::Unknown);
    }

    #[test]
    fn test_partial_prefixes() {
        // A single "3" or "6" is not yet enough to decide.
        assert_eq!(classify("3"), NetworkId::Unknown);
        assert_eq!(classify("6"), NetworkId::Unknown);
        assert_eq!(classify("601"), NetworkId::Unknown);
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(classify(""), NetworkId::Unknown);
        assert_eq!(classify("1234567890123456"), NetworkId::Unknown);
        assert_eq!(classify("x4111"), NetworkId::Unknown);
    }

    #[test]
    fn test_non_digit_content_is_not_checked() {
        assert_eq!(classify("4abc"), NetworkId::Visa);
    }

    #[test]
    fn test_length_validation() {
        assert!(is_length_valid("378282246310005", NetworkId::Amex));
        assert!(!is_length_valid("37828224631000", NetworkId::Amex));
        assert!(!is_length_valid("3782822463100055", NetworkId::Amex));

        assert!(is_length_valid("4111111111111111", NetworkId::Visa));
        assert!(!is_length_valid("4222222222222", NetworkId::Visa));

        assert!(is_length_valid("5500000000000004", NetworkId::Mastercard));
        assert!(is_length_valid("6011111111111117", NetworkId::Discover));
    }

    #[test]
    fn test_length_unknown_network_always_false() {
        assert!(!is_length_valid("", NetworkId::Unknown));
        assert!(!is_length_valid("4111111111111111", NetworkId::Unknown));
    }
}
