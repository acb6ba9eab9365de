//! # cc_subform
//!
//! Keystroke-level validation for a credit card sub-form: card number,
//! expiration month/year and security code.
//!
//! ## Features
//!
//! - Card network detection by prefix (American Express, Discover,
//!   Mastercard, Visa)
//! - Length and Luhn checks on every keystroke, first failure wins
//! - Expiration and CVV validation against the detected network
//! - A UI-free [`CardForm`] that turns input events into form events
//! - Bindings: WASM and a command-line tool
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_subform::{validate, is_valid, NetworkId};
//!
//! // Validate a card number
//! let card = validate("4111-1111-1111-1111").unwrap();
//! assert_eq!(card.network(), NetworkId::Visa);
//! assert_eq!(card.last_four(), "1111");
//!
//! // Safe for logging - never exposes full card number
//! println!("Card: {}", card.masked()); // "****-****-****-1111"
//!
//! // Quick boolean check
//! assert!(is_valid("4111111111111111"));
//! assert!(!is_valid("4111111111111112"));
//! ```
//!
//! ## Per-keystroke State
//!
//! ```rust
//! use cc_subform::{validate_card_number, ErrorKind, NetworkId};
//!
//! // The network is known as soon as the prefix is
//! let state = validate_card_number("37");
//! assert_eq!(state.detected_type(), NetworkId::Amex);
//! assert_eq!(state.error_kind(), ErrorKind::InvalidLength);
//! ```
//!
//! ## The Sub-form
//!
//! ```rust
//! use cc_subform::{CardForm, ErrorKind, FormConfig, YearMonth};
//!
//! let today = YearMonth::new(2025, 5).unwrap();
//! let mut form = CardForm::with_today(FormConfig::default(), today).unwrap();
//!
//! form.on_raw_input_changed("3782 822463 10005");
//! assert!(form.fields_enabled());
//!
//! // May 2025 has already passed
//! form.on_month_selected(4).unwrap();
//! assert_eq!(form.expiration_error(), ErrorKind::InvalidMonth);
//!
//! form.on_year_selected(2026);
//! form.on_cvv_changed("1234");
//! assert!(form.is_valid());
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length | CVV |
//! |---------|--------|--------|-----|
//! | American Express | 34, 37 | 15 | 4 |
//! | Discover | 6011, 622126-622925, 65 | 16 | 3 |
//! | Mastercard | 51-55 | 16 | 3 |
//! | Visa | 4 | 16 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for config and value types |
//! | `config-json` | `FormConfig::from_json` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - Accepted card numbers stored in fixed-size arrays, not heap strings
//! - Automatic memory zeroization when `ValidatedCard` is dropped
//! - CVV text held in a zeroizing buffer
//! - `Debug` and `Display` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod calendar;
pub mod card;
pub mod catalog;
pub mod config;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod form;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod stream;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{NetworkId, UnknownNetworkId, ValidatedCard, MAX_CARD_DIGITS};
pub use catalog::{profile_for, LengthRule, NetworkProfile, CLASSIFICATION_ORDER};
pub use config::FormConfig;
pub use error::{ErrorKind, FormError, ValidationError};
pub use expiry::YearMonth;
pub use form::{CardForm, Domain, FieldStatus, FormEvent, InputEvent};
pub use validate::{is_valid, validate, validate_card_number, CardNumberState};

// Re-export mask utilities
pub use mask::{constant_time_eq, mask_string};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4111111111111111";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const MASTERCARD_2: &str = "5105105105105100";
    const AMEX: &str = "378282246310005";
    const AMEX_2: &str = "371449635398431";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";

    #[test]
    fn test_visa_validation() {
        let card = validate(VISA_16).unwrap();
        assert_eq!(card.network(), NetworkId::Visa);
        assert_eq!(card.length(), 16);
        assert_eq!(card.last_four(), "1111");

        // Only 16-digit Visa numbers are accepted
        assert!(matches!(
            validate(VISA_13),
            Err(ValidationError::InvalidLength { length: 13, .. })
        ));
    }

    #[test]
    fn test_mastercard_validation() {
        assert_eq!(validate(MASTERCARD).unwrap().network(), NetworkId::Mastercard);
        assert_eq!(validate(MASTERCARD_2).unwrap().network(), NetworkId::Mastercard);
    }

    #[test]
    fn test_amex_validation() {
        let card = validate(AMEX).unwrap();
        assert_eq!(card.network(), NetworkId::Amex);
        assert_eq!(card.length(), 15);

        assert_eq!(validate(AMEX_2).unwrap().network(), NetworkId::Amex);
    }

    #[test]
    fn test_discover_validation() {
        assert_eq!(validate(DISCOVER).unwrap().network(), NetworkId::Discover);
    }

    #[test]
    fn test_unsupported_network() {
        assert_eq!(validate(DINERS), Err(ValidationError::UnsupportedCard));
    }

    #[test]
    fn test_formatted_input() {
        assert!(is_valid("4111 1111 1111 1111"));
        assert!(is_valid("4111-1111-1111-1111"));
        assert!(is_valid("3782-822463-10005"));
    }

    #[test]
    fn test_card_is_masked() {
        let card = validate(VISA_16).unwrap();
        assert_eq!(format!("{}", card), "Visa ****-****-****-1111");
        assert!(!format!("{:?}", card).contains(VISA_16));
    }

    #[test]
    fn test_assert_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedCard>();
        assert_send_sync::<NetworkId>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<FormError>();
        assert_send_sync::<CardForm>();
    }
}
