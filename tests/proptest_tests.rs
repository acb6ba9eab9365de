//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use cc_subform::{
    cvv, detect, expiry, is_valid, luhn, normalize, validate, validate_card_number, CardForm,
    ErrorKind, FormConfig, FormEvent, NetworkId, YearMonth,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Appends the Luhn check digit to a digit string.
fn with_check_digit(body: String) -> String {
    let digits: Vec<u8> = body.bytes().map(|b| b - b'0').collect();
    let check = luhn::check_digit(&digits);
    format!("{}{}", body, check)
}

/// Generates a valid card number for a network in the catalog.
fn valid_card_strategy() -> impl Strategy<Value = (NetworkId, String)> {
    prop_oneof![
        digit_string(14).prop_map(|rest| (NetworkId::Visa, format!("4{}", rest))),
        (prop::sample::select(vec!['1', '2', '3', '4', '5']), digit_string(13))
            .prop_map(|(second, rest)| (NetworkId::Mastercard, format!("5{}{}", second, rest))),
        (prop::sample::select(vec!['4', '7']), digit_string(12))
            .prop_map(|(second, rest)| (NetworkId::Amex, format!("3{}{}", second, rest))),
        digit_string(11).prop_map(|rest| (NetworkId::Discover, format!("6011{}", rest))),
        digit_string(13).prop_map(|rest| (NetworkId::Discover, format!("65{}", rest))),
    ]
    .prop_map(|(network, body)| (network, with_check_digit(body)))
}

/// Generates a string with separators (spaces, dashes) mixed in.
fn card_with_separators(card: String) -> impl Strategy<Value = String> {
    let len = card.len();
    proptest::collection::vec(
        prop_oneof![Just(""), Just(" "), Just("-"), Just("  "), Just(" - "),],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in card.chars().enumerate() {
            result.push_str(seps.get(i).unwrap_or(&""));
            result.push(c);
        }
        result.push_str(seps.last().unwrap_or(&""));
        result
    })
}

fn today() -> YearMonth {
    YearMonth::new(2025, 5).unwrap()
}

// =============================================================================
// LUHN ALGORITHM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Adding a check digit makes any digit sequence valid.
    #[test]
    fn check_digit_makes_valid(prefix in digit_string_range(1..=18)) {
        let full = with_check_digit(prefix);
        prop_assert!(luhn::is_valid_luhn(&full), "Adding check digit should make {} valid", full);
    }

    /// Property: Changing any single digit invalidates Luhn.
    #[test]
    fn single_digit_change_invalidates_luhn(
        (_, card) in valid_card_strategy(),
        change_pos in 0usize..16usize,
        delta in 1u8..=9u8,
    ) {
        let mut modified = card.into_bytes();
        if change_pos < modified.len() {
            modified[change_pos] = b'0' + (modified[change_pos] - b'0' + delta) % 10;
            let modified = String::from_utf8(modified).unwrap();
            prop_assert!(!luhn::is_valid_luhn(&modified),
                "Changing digit at position {} should invalidate Luhn", change_pos);
        }
    }

    /// Property: The string and slice forms agree.
    #[test]
    fn checksum_agrees_with_string_form(digits in digit_string_range(0..=19)) {
        let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
        prop_assert_eq!(luhn::checksum(&values) % 10 == 0, luhn::is_valid_luhn(&digits));
    }

    /// Property: All zeros pass Luhn (sum = 0).
    #[test]
    fn all_zeros_passes_luhn(len in 0usize..=19usize) {
        prop_assert!(luhn::is_valid_luhn(&"0".repeat(len)));
    }
}

// =============================================================================
// VALIDATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: Valid cards are always accepted with the right network.
    #[test]
    fn valid_cards_validate_successfully((network, card) in valid_card_strategy()) {
        let validated = validate(&card);
        prop_assert!(validated.is_ok(), "{} should be valid", card);
        prop_assert_eq!(validated.unwrap().network(), network);
    }

    /// Property: is_valid agrees with validate.
    #[test]
    fn is_valid_consistent_with_validate(input in ".*") {
        prop_assert_eq!(is_valid(&input), validate(&input).is_ok());
    }

    /// Property: validate and the per-keystroke pipeline agree on the outcome.
    #[test]
    fn validate_consistent_with_pipeline(input in "[0-9 -]{0,24}") {
        let state = validate_card_number(&input);
        match validate(&input) {
            Ok(card) => {
                prop_assert!(state.is_accepted());
                prop_assert_eq!(card.network(), state.detected_type());
            }
            Err(e) => prop_assert_eq!(e.kind(), state.error_kind()),
        }
    }

    /// Property: Separators don't affect validation.
    #[test]
    fn separators_dont_affect_validation(
        spaced in valid_card_strategy().prop_flat_map(|(_, card)| card_with_separators(card))
    ) {
        prop_assert!(is_valid(&spaced), "{} should be valid", spaced);
    }

    /// Property: Normalization is idempotent and removes every separator.
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize::normalize(&input);
        prop_assert_eq!(normalize::normalize(&once), once.clone());
        prop_assert!(!once.contains(' ') && !once.contains('-'));
    }

    /// Property: Classification only looks at the prefix.
    #[test]
    fn classification_is_prefix_stable(
        (network, card) in valid_card_strategy(),
        extra in digit_string_range(0..=5),
    ) {
        prop_assert_eq!(detect::classify(&card), network);
        prop_assert_eq!(detect::classify(&format!("{}{}", card, extra)), network);
    }

    /// Property: The pipeline is deterministic.
    #[test]
    fn pipeline_is_idempotent(input in ".*") {
        prop_assert_eq!(validate_card_number(&input), validate_card_number(&input));
    }

    /// Property: Validation never panics.
    #[test]
    fn validate_never_panics(input in ".*") {
        let _ = validate(&input);
        let _ = validate_card_number(&input);
    }
}

// =============================================================================
// CVV AND EXPIRATION PROPERTIES
// =============================================================================

proptest! {
    /// Property: A CVV is valid iff its numeric value has the network's digit count.
    #[test]
    fn cvv_valid_iff_digit_count_matches(
        value in "[0-9]{0,6}",
        network in prop::sample::select(NetworkId::ALL.to_vec()),
    ) {
        let significant = value.trim_start_matches('0').len();
        let expected = network.is_known() && significant == cvv::cvv_length_for_network(network);
        prop_assert_eq!(cvv::validate_cvv(&value, network).is_none(), expected);
    }

    /// Property: Non-numeric CVVs are always rejected.
    #[test]
    fn cvv_non_numeric_rejected(value in "[0-9]{0,3}[a-z.+][0-9]{0,3}") {
        prop_assert_eq!(cvv::validate_cvv(&value, NetworkId::Visa), ErrorKind::InvalidCcv);
    }

    /// Property: Any later year is valid regardless of month.
    #[test]
    fn later_year_always_valid(
        selected_month in 0u32..12,
        now_month in 0u32..12,
        year in 2000i32..2100,
        ahead in 1i32..20,
    ) {
        prop_assert!(expiry::is_expiration_valid(selected_month, year + ahead, now_month, year));
        prop_assert!(!expiry::is_expiration_valid(selected_month, year - ahead, now_month, year));
    }

    /// Property: Within the current year only earlier months are invalid.
    #[test]
    fn same_year_month_ordering(selected_month in 0u32..12, now_month in 0u32..12) {
        prop_assert_eq!(
            expiry::is_expiration_valid(selected_month, 2025, now_month, 2025),
            selected_month >= now_month
        );
    }
}

// =============================================================================
// FORM PROPERTIES
// =============================================================================

proptest! {
    /// Property: Once enabled, the expiration and CVV fields stay enabled.
    #[test]
    fn fields_enabled_latch_never_releases(
        (_, card) in valid_card_strategy(),
        later in proptest::collection::vec(".{0,20}", 0..8),
    ) {
        let mut form = CardForm::with_today(FormConfig::default(), today()).unwrap();
        let events = form.on_raw_input_changed(&card);
        prop_assert!(events.contains(&FormEvent::FieldsEnabled));

        for text in later {
            let events = form.on_raw_input_changed(&text);
            prop_assert!(!events.contains(&FormEvent::FieldsEnabled));
            prop_assert!(form.fields_enabled());
        }
    }

    /// Property: The form's card state matches the stateless pipeline,
    /// with the card type holding the last known network.
    #[test]
    fn form_card_state_matches_pipeline(inputs in proptest::collection::vec("[0-9 -]{0,20}", 1..8)) {
        let mut form = CardForm::with_today(FormConfig::default(), today()).unwrap();
        let mut last_known = NetworkId::Unknown;
        for input in &inputs {
            form.on_raw_input_changed(input);
            let state = validate_card_number(input);
            if state.detected_type().is_known() {
                last_known = state.detected_type();
            }
            prop_assert_eq!(form.card_type(), last_known);
            prop_assert_eq!(form.card_error(), state.error_kind());
        }
    }
}
