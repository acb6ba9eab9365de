//! CLI tool for card sub-form validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! ccsubform check 4111111111111111
//!
//! # Detect the network of a partial number
//! ccsubform detect 3782
//!
//! # Validate a CVV for a network
//! ccsubform cvv 1234 --network amex
//!
//! # Validate an expiration month (1-12) and year
//! ccsubform expiry 6 2027
//!
//! # Replay form input from stdin
//! printf 'type 4111 1111 1111 1111\nyear 2030\ncvv 123\n' | ccsubform simulate
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=cc_subform=debug`).

use cc_subform::calendar::{YearRange, MONTHS};
use cc_subform::catalog::profiles;
use cc_subform::expiry::{current_year_month, is_expiration_valid};
use cc_subform::stream::{keystrokes, DriveExt};
use cc_subform::{
    cvv, detect, luhn, normalize, validate, CardForm, FormConfig, FormError, FormEvent,
    InputEvent, NetworkId,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccsubform")]
#[command(author, version, about = "Keystroke-level credit card sub-form validation")]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    output: OutputFormat,

    /// JSON form configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// First selectable expiration year
    #[arg(long, global = true)]
    first_year: Option<i32>,

    /// Number of selectable expiration years
    #[arg(long, global = true)]
    year_count: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a card number
    Check {
        /// Card number to validate (spaces and dashes allowed)
        card_number: String,
    },

    /// Detect the card network from a (partial) number
    Detect {
        /// Card number or prefix
        card_number: String,
    },

    /// Check if a number passes the Luhn algorithm
    Luhn {
        /// Card number to check
        card_number: String,
    },

    /// Validate a CVV/CVC for a card network
    Cvv {
        /// CVV to validate
        cvv: String,

        /// Card network (decides the required length)
        #[arg(short, long)]
        network: NetworkArg,
    },

    /// Check an expiration month and year against today
    Expiry {
        /// Month (1-12)
        month: u32,

        /// Four-digit year
        year: i32,
    },

    /// Print the month and year selector options
    Calendar,

    /// List the supported card networks
    Catalog,

    /// Replay form input read from stdin, one event per line
    ///
    /// Events: `number <text>`, `type <text>` (one event per character),
    /// `month <0-11>`, `year <yyyy>`, `cvv <text>`.
    Simulate,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Amex,
    Discover,
    Mastercard,
    Visa,
}

impl From<NetworkArg> for NetworkId {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Amex => NetworkId::Amex,
            NetworkArg::Discover => NetworkId::Discover,
            NetworkArg::Mastercard => NetworkId::Mastercard,
            NetworkArg::Visa => NetworkId::Visa,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let output = cli.output;

    match cli.command {
        Commands::Check { card_number } => cmd_check(&card_number, output),
        Commands::Detect { card_number } => cmd_detect(&card_number, output),
        Commands::Luhn { card_number } => cmd_luhn(&card_number, output),
        Commands::Cvv { cvv, network } => cmd_cvv(&cvv, network.into(), output),
        Commands::Expiry { month, year } => cmd_expiry(month, year, output),
        Commands::Calendar => {
            let config = load_config_or_exit(&cli.config, cli.first_year, cli.year_count);
            cmd_calendar(&config, output);
        }
        Commands::Catalog => cmd_catalog(output),
        Commands::Simulate => {
            let config = load_config_or_exit(&cli.config, cli.first_year, cli.year_count);
            cmd_simulate(config, output);
        }
    }
}

fn load_config(
    path: &Option<PathBuf>,
    first_year: Option<i32>,
    year_count: Option<u32>,
) -> Result<FormConfig, FormError> {
    let mut config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|e| {
                FormError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
            })?;
            FormConfig::from_json(&json)?
        }
        None => FormConfig::default(),
    };

    if first_year.is_some() || year_count.is_some() {
        let current = config.year_range();
        let range = YearRange::new(
            first_year.unwrap_or(current.first()),
            year_count.unwrap_or(current.count()),
        )?;
        config = config.with_year_range(range);
    }

    tracing::debug!(years = ?config.year_range(), "configuration loaded");
    Ok(config)
}

fn load_config_or_exit(
    path: &Option<PathBuf>,
    first_year: Option<i32>,
    year_count: Option<u32>,
) -> FormConfig {
    match load_config(path, first_year, year_count) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn cmd_check(card_number: &str, output: OutputFormat) {
    match validate(card_number) {
        Ok(card) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: yes");
                    println!("Network: {}", card.network().name());
                    println!("Last Four: {}", card.last_four());
                    println!("Masked: {}", card.masked());
                }
                OutputFormat::Json => print_json(&json!({
                    "valid": true,
                    "network": card.network().id(),
                    "last_four": card.last_four(),
                    "masked": card.masked(),
                })),
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Valid: no");
                    println!("Error: {}", e);
                }
                OutputFormat::Json => print_json(&json!({
                    "valid": false,
                    "code": e.kind().code(),
                    "error": e.to_string(),
                })),
            }
            std::process::exit(1);
        }
    }
}

fn cmd_detect(card_number: &str, output: OutputFormat) {
    let network = detect::classify(&normalize::normalize(card_number));
    let profile = network.profile();

    match output {
        OutputFormat::Text => {
            if network.is_known() {
                println!("Detected Network: {}", network.name());
                println!("Length: {}", profile.length_rule());
                println!("CVV Digits: {}", profile.cvv_digits());
            } else {
                println!("Detected Network: Unknown");
            }
        }
        OutputFormat::Json => print_json(&json!({
            "network": network.id(),
            "name": network.name(),
            "length": profile.length_rule().to_string(),
            "cvv_digits": profile.cvv_digits(),
        })),
    }

    if !network.is_known() {
        std::process::exit(1);
    }
}

fn cmd_luhn(card_number: &str, output: OutputFormat) {
    let digits = normalize::normalize(card_number);
    if digits.is_empty() {
        eprintln!("Error: No digits provided");
        std::process::exit(1);
    }

    let pass = luhn::is_valid_luhn(&digits);
    match output {
        OutputFormat::Text => println!("Luhn check: {}", if pass { "PASS" } else { "FAIL" }),
        OutputFormat::Json => print_json(&json!({ "luhn": pass })),
    }
    std::process::exit(if pass { 0 } else { 1 });
}

fn cmd_cvv(cvv_input: &str, network: NetworkId, output: OutputFormat) {
    let kind = cvv::validate_cvv(cvv_input, network);

    match output {
        OutputFormat::Text => {
            if kind.is_none() {
                println!("Valid: yes");
            } else {
                println!("Valid: no");
                println!("Error: {}", kind);
            }
            println!(
                "Required: {} digits for {}",
                cvv::cvv_length_for_network(network),
                network.name()
            );
        }
        OutputFormat::Json => print_json(&json!({
            "valid": kind.is_none(),
            "code": kind.code(),
            "required_digits": cvv::cvv_length_for_network(network),
        })),
    }
    std::process::exit(if kind.is_none() { 0 } else { 1 });
}

fn cmd_expiry(month: u32, year: i32, output: OutputFormat) {
    if !(1..=12).contains(&month) {
        eprintln!("Error: month must be 1-12, got {}", month);
        std::process::exit(2);
    }

    let today = current_year_month();
    let valid = is_expiration_valid(month - 1, year, today.month(), today.year());

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if valid { "yes" } else { "no" });
            println!("Expiration: {:02}/{}", month, year);
            println!("Today: {}", today);
        }
        OutputFormat::Json => print_json(&json!({
            "valid": valid,
            "month": month,
            "year": year,
            "today": today.to_string(),
        })),
    }
    std::process::exit(if valid { 0 } else { 1 });
}

fn cmd_calendar(config: &FormConfig, output: OutputFormat) {
    let years = config.year_range().years();

    match output {
        OutputFormat::Text => {
            println!("Months:");
            for (index, option) in MONTHS.iter().enumerate() {
                println!("  {:>2}  {:<7} value={}", index, option.label, option.value);
            }
            println!("Years:");
            for (index, year) in years.iter().enumerate() {
                println!("  {:>2}  {}", index, year);
            }
        }
        OutputFormat::Json => print_json(&json!({
            "months": MONTHS
                .iter()
                .map(|m| json!({ "label": m.label, "value": m.value }))
                .collect::<Vec<_>>(),
            "years": years,
        })),
    }
}

fn cmd_catalog(output: OutputFormat) {
    let known: Vec<_> = profiles().filter(|(id, _)| id.is_known()).collect();

    match output {
        OutputFormat::Text => {
            println!("{:<12} {:<18} {:<7} {:<4} Pattern", "Id", "Name", "Length", "CVV");
            for (id, profile) in &known {
                println!(
                    "{:<12} {:<18} {:<7} {:<4} {}",
                    id.id(),
                    profile.display_name(),
                    profile.length_rule().to_string(),
                    profile.cvv_digits(),
                    profile.pattern_source().unwrap_or("")
                );
            }
        }
        OutputFormat::Json => print_json(&json!(known
            .iter()
            .map(|(id, profile)| json!({
                "id": id.id(),
                "name": profile.display_name(),
                "length": profile.length_rule().to_string(),
                "cvv_digits": profile.cvv_digits(),
                "pattern": profile.pattern_source(),
            }))
            .collect::<Vec<_>>())),
    }
}

fn parse_event_line(line: &str) -> Result<Vec<InputEvent>, String> {
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "number" => Ok(vec![InputEvent::RawInputChanged(arg.to_string())]),
        "type" => Ok(keystrokes(arg).collect()),
        "month" => arg
            .trim()
            .parse()
            .map(|m| vec![InputEvent::MonthSelected(m)])
            .map_err(|_| format!("invalid month index '{}'", arg)),
        "year" => arg
            .trim()
            .parse()
            .map(|y| vec![InputEvent::YearSelected(y)])
            .map_err(|_| format!("invalid year '{}'", arg)),
        "cvv" => Ok(vec![InputEvent::CvvChanged(arg.to_string())]),
        other => Err(format!("unknown event '{}'", other)),
    }
}

fn event_json(event: &FormEvent) -> serde_json::Value {
    match event {
        FormEvent::CardTypeDetected(network) => {
            json!({ "event": "card_type", "network": network.id() })
        }
        FormEvent::CardNumberAccepted(card) => {
            json!({ "event": "card_number", "network": card.network().id(), "masked": card.masked() })
        }
        FormEvent::ValidationError { domain, kind } => {
            json!({ "event": "validation", "domain": domain.code(), "code": kind.code() })
        }
        FormEvent::FieldsEnabled => json!({ "event": "fields_enabled" }),
    }
}

fn event_text(event: &FormEvent) -> String {
    match event {
        FormEvent::CardTypeDetected(network) => format!("card type: {}", network),
        FormEvent::CardNumberAccepted(card) => format!("card accepted: {}", card),
        FormEvent::ValidationError { domain, kind } => format!("{}: {}", domain, kind.code()),
        FormEvent::FieldsEnabled => "expiration and cvv enabled".to_string(),
    }
}

fn cmd_simulate(config: FormConfig, output: OutputFormat) {
    let mut form = match CardForm::new(config) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let stdin = std::io::stdin();
    let mut log = Vec::new();

    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        };
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let inputs = match parse_event_line(line) {
            Ok(inputs) => inputs,
            Err(e) => {
                eprintln!("Error on line {}: {}", number + 1, e);
                std::process::exit(2);
            }
        };

        for result in inputs.into_iter().drive(&mut form) {
            match result {
                Ok(events) => {
                    for event in &events {
                        match output {
                            OutputFormat::Text => println!("{}", event_text(event)),
                            OutputFormat::Json => log.push(event_json(event)),
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(line = number + 1, error = %e, "input rejected");
                    eprintln!("Error on line {}: {}", number + 1, e);
                }
            }
        }
    }

    let valid = form.is_valid();
    match output {
        OutputFormat::Text => {
            println!("---");
            println!("Card Type: {}", form.card_type());
            println!("Card Number: {}", form.card_number_status().code());
            println!("Expiration: {}", form.expiration().selection());
            println!("CVV: {}", form.cvv_status().code());
            println!("Valid: {}", if valid { "yes" } else { "no" });
        }
        OutputFormat::Json => print_json(&json!({
            "events": log,
            "card_type": form.card_type().id(),
            "card_error": form.card_error().code(),
            "expiration_error": form.expiration_error().code(),
            "card_number_status": form.card_number_status().code(),
            "cvv_status": form.cvv_status().code(),
            "fields_enabled": form.fields_enabled(),
            "valid": valid,
        })),
    }
    std::process::exit(if valid { 0 } else { 1 });
}
