//! Input normalization and keystroke filtering for the card-number field.
//!
//! Users type card numbers with spaces or dashes between groups. Those
//! separators are stripped before any numeric rule runs; nothing else is.
//!
//! # Example
//!
//! ```
//! use cc_subform::normalize::{is_permitted_key, normalize};
//!
//! assert_eq!(normalize("4111-1111 1111-1111"), "4111111111111111");
//!
//! assert!(is_permitted_key("7", "Digit7"));
//! assert!(is_permitted_key("Backspace", "Backspace"));
//! assert!(!is_permitted_key("a", "KeyA"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static PERMITTED_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9 -]").expect("key filter is a valid regex"));

/// Separators removed by [`normalize`].
pub const SEPARATORS: [char; 2] = [' ', '-'];

/// Strips spaces and dashes from raw card-number input.
///
/// Other characters are kept, so a malformed entry still fails the later
/// numeric checks instead of being silently repaired.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|c| !SEPARATORS.contains(c)).collect()
}

/// Returns true if `input` is non-empty and made only of ASCII digits.
#[inline]
pub fn is_digit_string(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Decides whether a keydown should reach the card-number field.
///
/// `key` is the produced key value (`"7"`, `" "`, `"a"`), `code` the physical
/// key code (`"Digit7"`, `"Backspace"`). Backspace and Delete are always
/// allowed; otherwise the key must contain a digit, space or dash.
pub fn is_permitted_key(key: &str, code: &str) -> bool {
    if code.eq_ignore_ascii_case("backspace") || code.eq_ignore_ascii_case("delete") {
        return true;
    }
    PERMITTED_KEY.is_match(key)
}
