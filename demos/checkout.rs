//! Card sub-form checkout example.
//!
//! Run with: `cargo run --example checkout`

use cc_subform::stream::{keystrokes, DriveExt};
use cc_subform::{CardForm, FormConfig, FormEvent, InputEvent, YearMonth};

fn describe(event: &FormEvent) -> String {
    match event {
        FormEvent::CardTypeDetected(network) => format!("card type: {}", network.name()),
        FormEvent::CardNumberAccepted(card) => format!("accepted: {}", card.masked()),
        FormEvent::ValidationError { domain, kind } if kind.is_none() => {
            format!("{}: ok", domain)
        }
        FormEvent::ValidationError { domain, kind } => {
            format!("{}: {}", domain, kind.message())
        }
        FormEvent::FieldsEnabled => "expiration and CVV enabled".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Card Sub-Form Checkout ===\n");

    // Pin the calendar so the output is the same every run
    let today = YearMonth::new(2025, 5).ok_or("invalid month")?;
    let mut form = CardForm::with_today(FormConfig::default(), today)?;

    // Example 1: Typing a number one key at a time
    println!("Typing 3782 822463 10005:");
    for (i, result) in keystrokes("3782 822463 10005").drive(&mut form).enumerate() {
        for event in result? {
            println!("  key {:>2}: {}", i + 1, describe(&event));
        }
    }
    println!();

    // Example 2: Filling in the rest of the form
    println!("Month options: {}", form.month_options().len());
    println!("Year options:  {}", form.year_options().join(", "));
    println!();

    let inputs = [
        InputEvent::MonthSelected(3),
        InputEvent::YearSelected(2025),
        InputEvent::MonthSelected(8),
        InputEvent::CvvChanged("123".into()),
        InputEvent::CvvChanged("1234".into()),
    ];
    for input in inputs {
        println!("{:?}", input);
        for event in form.handle(input)? {
            println!("  {}", describe(&event));
        }
    }
    println!();

    // Example 3: Overall status
    println!("Card number: {}", form.card_number_status().code());
    println!("CVV:         {}", form.cvv_status().code());
    println!("Expiration:  {}", form.expiration_error().message());
    println!("Form valid:  {}", form.is_valid());

    Ok(())
}
