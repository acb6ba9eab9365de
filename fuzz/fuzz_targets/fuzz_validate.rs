//! Fuzz target for card validation.
//!
//! Tests that validate() never panics on arbitrary input and agrees with
//! the per-keystroke pipeline.

#![no_main]

use cc_subform::{is_valid, validate, validate_card_number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let result = validate(data);
    let state = validate_card_number(data);
    let _ = is_valid(data);
    let _ = format!("{:?}", state);

    match result {
        Ok(card) => {
            assert!(state.is_accepted(), "validate accepted what the pipeline rejected");
            assert_eq!(card.network(), state.detected_type());
        }
        Err(e) => assert_eq!(e.kind(), state.error_kind()),
    }
});
