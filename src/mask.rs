//! Masking utilities for card numbers.
//!
//! Anything that reaches a log line or a `Debug` string goes through here.
//! Only the last four digits are ever shown.

use crate::ValidatedCard;

/// Masks an accepted card showing only the last 4 digits.
///
/// Format: `****-****-****-1234`
///
/// # Example
///
/// ```
/// use cc_subform::validate;
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.masked(), "****-****-****-1111");
/// ```
#[inline]
pub fn mask_card(card: &ValidatedCard) -> String {
    group_masked(card.length(), &card.last_four())
}

/// Masks raw, possibly unvalidated input.
///
/// Non-digit characters are dropped first. Inputs with four digits or fewer
/// are masked entirely.
///
/// # Example
///
/// ```
/// use cc_subform::mask::mask_string;
///
/// assert_eq!(mask_string("4111 1111 1111 1111"), "****-****-****-1111");
/// assert_eq!(mask_string("411"), "***");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let last_four: String = digits[len - 4..].iter().collect();
    group_masked(len, &last_four)
}

fn group_masked(len: usize, last_four: &str) -> String {
    let masked_count = len.saturating_sub(4);
    let mut result = String::with_capacity(len + (len / 4));

    for i in 0..masked_count {
        if i > 0 && i % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    // Separator before last 4 only when the masked part ends on a group
    if masked_count > 0 && masked_count % 4 == 0 {
        result.push('-');
    }

    result.push_str(last_four);
    result
}

/// Constant-time comparison of two byte slices.
///
/// Takes the same time regardless of where the slices differ.
///
/// # Example
///
/// ```
/// use cc_subform::mask::constant_time_eq;
///
/// assert!(constant_time_eq(b"4111111111111111", b"4111111111111111"));
/// assert!(!constant_time_eq(b"4111111111111111", b"4111111111111112"));
/// ```
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    diff == 0
}
