//! Security-code (CVV/CVC/CID) validation against the detected network.
//!
//! The required digit count comes from the catalog:
//!
//! - American Express: 4 digits (printed on front)
//! - All other supported networks: 3 digits (printed on back)
//!
//! A CVV can only be valid once a network is known.
//!
//! # Example
//!
//! ```
//! use cc_subform::cvv::validate_cvv;
//! use cc_subform::{ErrorKind, NetworkId};
//!
//! assert_eq!(validate_cvv("123", NetworkId::Visa), ErrorKind::None);
//! assert_eq!(validate_cvv("1234", NetworkId::Amex), ErrorKind::None);
//!
//! // Wrong length for the network
//! assert_eq!(validate_cvv("1234", NetworkId::Visa), ErrorKind::InvalidCcv);
//! // No network yet
//! assert_eq!(validate_cvv("123", NetworkId::Unknown), ErrorKind::InvalidCcv);
//! ```

use crate::card::NetworkId;
use crate::error::ErrorKind;

/// Returns the expected CVV length for a network.
///
/// Zero for [`NetworkId::Unknown`].
#[inline]
pub fn cvv_length_for_network(network: NetworkId) -> usize {
    network.profile().cvv_digits()
}

/// Counts the digits of the CVV's numeric value.
///
/// Surrounding whitespace is ignored. Returns `None` if the value is not an
/// unsigned decimal integer. The count is taken from the value, not the
/// text: leading zeros are not counted, and zero (including the empty
/// string) has no digits.
///
/// # Example
///
/// ```
/// use cc_subform::cvv::cvv_digit_count;
///
/// assert_eq!(cvv_digit_count("123"), Some(3));
/// assert_eq!(cvv_digit_count(" 0123 "), Some(3));
/// assert_eq!(cvv_digit_count("0"), Some(0));
/// assert_eq!(cvv_digit_count("12a"), None);
/// ```
pub fn cvv_digit_count(value: &str) -> Option<usize> {
    let value = value.trim();
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.trim_start_matches('0').len())
}

/// Validates a CVV for the given network.
///
/// Returns [`ErrorKind::None`] when the numeric value has exactly the
/// network's CVV digit count, otherwise [`ErrorKind::InvalidCcv`].
pub fn validate_cvv(value: &str, network: NetworkId) -> ErrorKind {
    if !network.is_known() {
        return ErrorKind::InvalidCcv;
    }

    match cvv_digit_count(value) {
        Some(count) if count == cvv_length_for_network(network) => ErrorKind::None,
        _ => ErrorKind::InvalidCcv,
    }
}

/// Checks if a CVV is valid for the given network.
#[inline]
pub fn is_valid_cvv(value: &str, network: NetworkId) -> bool {
    validate_cvv(value, network).is_none()
}
