//! Fuzz target for the card form.
//!
//! Drives a form with arbitrary event sequences and checks that the
//! enable latch and the validity predicates stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use cc_subform::{CardForm, FormConfig, FormEvent, InputEvent, YearMonth};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Number(String),
    Month(u32),
    Year(i32),
    YearIndex(u8),
    Cvv(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let Some(today) = YearMonth::new(2025, 5) else {
        return;
    };
    let Ok(mut form) = CardForm::with_today(FormConfig::default(), today) else {
        return;
    };

    let mut was_enabled = false;
    for op in ops {
        let result = match op {
            Op::Number(text) => form.handle(InputEvent::RawInputChanged(text)),
            Op::Month(month) => form.handle(InputEvent::MonthSelected(month)),
            Op::Year(year) => form.handle(InputEvent::YearSelected(year)),
            Op::YearIndex(index) => form.on_year_index_selected(index as usize),
            Op::Cvv(text) => form.handle(InputEvent::CvvChanged(text)),
        };

        if let Ok(events) = result {
            let enabled_events = events.iter().filter(|e| **e == FormEvent::FieldsEnabled).count();
            assert!(enabled_events <= 1);
            if was_enabled {
                assert_eq!(enabled_events, 0, "fields enabled twice");
            }
        }

        // The latch never releases
        assert!(!was_enabled || form.fields_enabled());
        was_enabled = form.fields_enabled();

        if form.is_valid() {
            assert!(form.is_valid_card_number());
            assert!(form.is_valid_exp_date());
            assert!(form.is_valid_cvv());
        }
    }
});
