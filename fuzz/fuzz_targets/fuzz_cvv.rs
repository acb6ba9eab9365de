//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input.

#![no_main]

use cc_subform::{cvv, NetworkId};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let count = cvv::cvv_digit_count(data);

    for network in NetworkId::ALL {
        let kind = cvv::validate_cvv(data, network);

        // Valid only with a known network and a matching digit count
        if kind.is_none() {
            assert!(network.is_known());
            assert_eq!(count, Some(cvv::cvv_length_for_network(network)));
        }
    }
});
