//! Card-number validation pipeline.
//!
//! Every keystroke runs the same short-circuiting pipeline over the
//! normalized input:
//!
//! 1. Classify by prefix, unknown is [`ErrorKind::UnsupportedCard`]
//! 2. Check the digit count, wrong is [`ErrorKind::InvalidLength`]
//! 3. Check the Luhn sum, failing is [`ErrorKind::InvalidNumber`]
//!
//! The first failing rule wins; later rules are not run.

use crate::card::{NetworkId, ValidatedCard};
use crate::detect::{classify, is_length_valid};
use crate::error::{ErrorKind, ValidationError};
use crate::luhn::is_valid_luhn;
use crate::mask::mask_string;
use crate::normalize::normalize;
use std::fmt;

/// The result of running the pipeline over one card-number input.
///
/// Created fresh per keystroke and never persisted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardNumberState {
    raw_input: String,
    normalized_digits: String,
    detected_type: NetworkId,
    error_kind: ErrorKind,
}

impl CardNumberState {
    /// Runs the pipeline over raw field text.
    pub fn evaluate(raw: &str) -> Self {
        let normalized_digits = normalize(raw);
        let detected_type = classify(&normalized_digits);

        let error_kind = if !detected_type.is_known() {
            ErrorKind::UnsupportedCard
        } else if !is_length_valid(&normalized_digits, detected_type) {
            ErrorKind::InvalidLength
        } else if !is_valid_luhn(&normalized_digits) {
            ErrorKind::InvalidNumber
        } else {
            ErrorKind::None
        };

        tracing::trace!(
            number = %mask_string(&normalized_digits),
            network = detected_type.id(),
            error = error_kind.code(),
            "card number evaluated"
        );

        Self {
            raw_input: raw.to_string(),
            normalized_digits,
            detected_type,
            error_kind,
        }
    }

    /// The text exactly as typed.
    #[inline]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The text with spaces and dashes removed.
    #[inline]
    pub fn normalized_digits(&self) -> &str {
        &self.normalized_digits
    }

    /// The network matched by the prefix, or [`NetworkId::Unknown`].
    #[inline]
    pub const fn detected_type(&self) -> NetworkId {
        self.detected_type
    }

    /// The first rule the input failed, or [`ErrorKind::None`].
    #[inline]
    pub const fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }

    /// Returns true if a non-empty number passed every rule.
    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.error_kind.is_none() && !self.normalized_digits.is_empty()
    }

    /// The accepted card, if the input passed every rule.
    pub fn accepted_card(&self) -> Option<ValidatedCard> {
        if !self.is_accepted() {
            return None;
        }
        ValidatedCard::from_digit_str(self.detected_type, &self.normalized_digits)
    }
}

impl fmt::Debug for CardNumberState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumberState")
            .field("number", &mask_string(&self.normalized_digits))
            .field("detected_type", &self.detected_type)
            .field("error_kind", &self.error_kind)
            .finish()
    }
}

/// Runs the pipeline and returns the per-keystroke state.
///
/// # Example
///
/// ```
/// use cc_subform::{validate_card_number, ErrorKind, NetworkId};
///
/// let state = validate_card_number("4111 1111 1111 1111");
/// assert_eq!(state.detected_type(), NetworkId::Visa);
/// assert_eq!(state.error_kind(), ErrorKind::None);
///
/// let state = validate_card_number("4111 1111");
/// assert_eq!(state.error_kind(), ErrorKind::InvalidLength);
/// ```
#[inline]
pub fn validate_card_number(raw: &str) -> CardNumberState {
    CardNumberState::evaluate(raw)
}

/// Validates a card number, returning the accepted card or a detailed error.
///
/// # Example
///
/// ```
/// use cc_subform::{validate, NetworkId, ValidationError};
///
/// let card = validate("4111-1111-1111-1111").unwrap();
/// assert_eq!(card.network(), NetworkId::Visa);
/// assert_eq!(card.last_four(), "1111");
///
/// assert_eq!(validate("4111-1111-1111-1112").unwrap_err(), ValidationError::InvalidNumber);
/// ```
pub fn validate(raw: &str) -> Result<ValidatedCard, ValidationError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(ValidationError::Empty);
    }

    let network = classify(&normalized);
    if !network.is_known() {
        return Err(ValidationError::UnsupportedCard);
    }

    if !is_length_valid(&normalized, network) {
        return Err(ValidationError::InvalidLength {
            network,
            length: normalized.chars().count(),
            rule: network.profile().length_rule(),
        });
    }

    if !is_valid_luhn(&normalized) {
        return Err(ValidationError::InvalidNumber);
    }

    ValidatedCard::from_digit_str(network, &normalized).ok_or(ValidationError::InvalidNumber)
}

/// Quick yes/no check of a card number.
///
/// ```
/// use cc_subform::is_valid;
///
/// assert!(is_valid("4111-1111-1111-1111"));
/// assert!(!is_valid("4111-1111-1111-1112"));
/// ```
#[inline]
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_ok()
}
