//! The card sub-form: one validation engine driving three field groups.
//!
//! A [`CardForm`] owns all per-form state. Every input handler returns the
//! [`FormEvent`]s a presentation layer needs to update itself; nothing is
//! rendered here.
//!
//! The expiration and CVV fields start disabled and are enabled the first
//! time a complete, valid card number is entered. They stay enabled after
//! that, even if the number is later edited.
//!
//! The card type is the last network a prefix matched. Typing an unknown
//! prefix does not reset it, and the CVV is checked against it on each edit.
//!
//! # Example
//!
//! ```
//! use cc_subform::{CardForm, Domain, ErrorKind, FormConfig, FormEvent, NetworkId, YearMonth};
//!
//! let today = YearMonth::new(2025, 5).unwrap();
//! let mut form = CardForm::with_today(FormConfig::default(), today).unwrap();
//!
//! let events = form.on_raw_input_changed("4111 1111 1111 1111");
//! assert_eq!(events[0], FormEvent::CardTypeDetected(NetworkId::Visa));
//! assert!(events.contains(&FormEvent::FieldsEnabled));
//!
//! form.on_cvv_changed("123");
//! assert_eq!(form.expiration_error(), ErrorKind::None);
//! assert!(form.is_valid());
//! ```

use crate::calendar::{MonthOption, MONTHS};
use crate::card::{NetworkId, ValidatedCard};
use crate::config::FormConfig;
use crate::cvv::validate_cvv;
use crate::error::{ErrorKind, FormError};
use crate::expiry::{current_year_month, ExpirationState, YearMonth};
use crate::mask::mask_string;
use crate::validate::CardNumberState;
use std::fmt;
use zeroize::Zeroizing;

/// The field group an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Domain {
    /// The card-number input.
    CardNumber,
    /// The month and year selectors.
    Expiration,
    /// The security-code input.
    Cvv,
}

impl Domain {
    /// Stable identifier.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::Expiration => "expiration",
            Self::Cvv => "cvv",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Notifications produced by a [`CardForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The number's prefix matches a network.
    CardTypeDetected(NetworkId),
    /// The number passed every rule.
    CardNumberAccepted(ValidatedCard),
    /// The outcome of validating one field group. `ErrorKind::None` clears
    /// a previous error.
    ValidationError {
        /// Field group that was validated.
        domain: Domain,
        /// Outcome.
        kind: ErrorKind,
    },
    /// The expiration and CVV fields became interactive.
    FieldsEnabled,
}

/// Input delivered to a [`CardForm`].
#[derive(Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The card-number field now holds this text.
    RawInputChanged(String),
    /// A month was selected by 0-based index.
    MonthSelected(u32),
    /// A year was selected.
    YearSelected(i32),
    /// The CVV field now holds this text.
    CvvChanged(String),
}

impl fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawInputChanged(text) => f
                .debug_tuple("RawInputChanged")
                .field(&mask_string(text))
                .finish(),
            Self::MonthSelected(month) => f.debug_tuple("MonthSelected").field(month).finish(),
            Self::YearSelected(year) => f.debug_tuple("YearSelected").field(year).finish(),
            Self::CvvChanged(text) => f
                .debug_tuple("CvvChanged")
                .field(&"*".repeat(text.len()))
                .finish(),
        }
    }
}

/// Display state of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldStatus {
    /// Not edited yet.
    Pristine,
    /// Edited and currently valid.
    Valid,
    /// Edited and currently invalid.
    Invalid,
}

impl FieldStatus {
    /// Stable identifier.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Pristine => "pristine",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

/// Keystroke-level validator for a card number, expiration date and CVV.
pub struct CardForm {
    config: FormConfig,
    today: YearMonth,
    card_number: CardNumberState,
    card_type: NetworkId,
    expiration: ExpirationState,
    cvv: Zeroizing<String>,
    card_number_dirty: bool,
    cvv_touched: bool,
    fields_enabled: bool,
}

impl CardForm {
    /// Creates a form dated today by the local clock.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        Self::with_today(config, current_year_month())
    }

    /// Creates a form that treats `today` as the current month.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn with_today(config: FormConfig, today: YearMonth) -> Result<Self, FormError> {
        config.validate()?;
        Ok(Self::build(config, today))
    }

    fn build(config: FormConfig, today: YearMonth) -> Self {
        Self {
            config,
            today,
            card_number: CardNumberState::default(),
            card_type: NetworkId::Unknown,
            expiration: ExpirationState::new(today),
            cvv: Zeroizing::new(String::new()),
            card_number_dirty: false,
            cvv_touched: false,
            fields_enabled: false,
        }
    }

    /// Handles a change of the card-number text.
    ///
    /// The card type only moves between known networks. Input that matches
    /// no network keeps the last detected type for CVV checks.
    pub fn on_raw_input_changed(&mut self, text: &str) -> Vec<FormEvent> {
        let state = CardNumberState::evaluate(text);
        let detected = state.detected_type();
        let kind = state.error_kind();
        self.card_number_dirty = true;

        let mut events = Vec::with_capacity(4);
        if detected.is_known() {
            self.card_type = detected;
            events.push(FormEvent::CardTypeDetected(detected));
        }
        events.push(FormEvent::ValidationError {
            domain: Domain::CardNumber,
            kind,
        });

        if let Some(card) = state.accepted_card() {
            events.push(FormEvent::CardNumberAccepted(card));
            if !self.fields_enabled {
                self.fields_enabled = true;
                tracing::debug!("expiration and cvv fields enabled");
                events.push(FormEvent::FieldsEnabled);
            }
        }

        tracing::debug!(
            domain = Domain::CardNumber.code(),
            number = %mask_string(state.normalized_digits()),
            network = detected.id(),
            error = kind.code(),
            "card number changed"
        );
        self.card_number = state;
        events
    }

    /// Handles selection of a month by 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MonthOutOfRange`] if `index` is not 0-11.
    pub fn on_month_selected(&mut self, index: u32) -> Result<Vec<FormEvent>, FormError> {
        if index > 11 {
            return Err(FormError::MonthOutOfRange(index));
        }
        if !self.accepts_input(Domain::Expiration) {
            return Ok(Vec::new());
        }
        let kind = self.expiration.select_month(index, self.today)?;
        Ok(vec![self.expiration_event(kind)])
    }

    /// Handles selection of a year.
    pub fn on_year_selected(&mut self, year: i32) -> Vec<FormEvent> {
        if !self.accepts_input(Domain::Expiration) {
            return Vec::new();
        }
        let kind = self.expiration.select_year(year, self.today);
        vec![self.expiration_event(kind)]
    }

    /// Handles selection of a year by its position in [`CardForm::year_options`].
    ///
    /// # Errors
    ///
    /// Returns [`FormError::YearIndexOutOfRange`] if there is no year at `index`.
    pub fn on_year_index_selected(&mut self, index: usize) -> Result<Vec<FormEvent>, FormError> {
        let range = self.config.year_range();
        let year = range.year_at(index).ok_or(FormError::YearIndexOutOfRange {
            index,
            len: range.count() as usize,
        })?;
        Ok(self.on_year_selected(year))
    }

    /// Handles a change of the CVV text.
    pub fn on_cvv_changed(&mut self, text: &str) -> Vec<FormEvent> {
        if !self.accepts_input(Domain::Cvv) {
            return Vec::new();
        }
        self.cvv = Zeroizing::new(text.to_string());
        self.cvv_touched = true;

        let network = self.card_type;
        let kind = validate_cvv(&self.cvv, network);
        self.expiration.set_error(kind);
        tracing::debug!(
            domain = Domain::Cvv.code(),
            network = network.id(),
            error = kind.code(),
            "cvv validated"
        );
        vec![FormEvent::ValidationError {
            domain: Domain::Cvv,
            kind,
        }]
    }

    /// Dispatches an input event to its handler.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error for out-of-range selections.
    pub fn handle(&mut self, event: InputEvent) -> Result<Vec<FormEvent>, FormError> {
        match event {
            InputEvent::RawInputChanged(text) => Ok(self.on_raw_input_changed(&text)),
            InputEvent::MonthSelected(index) => self.on_month_selected(index),
            InputEvent::YearSelected(year) => Ok(self.on_year_selected(year)),
            InputEvent::CvvChanged(text) => Ok(self.on_cvv_changed(&Zeroizing::new(text))),
        }
    }

    fn accepts_input(&self, domain: Domain) -> bool {
        if !self.fields_enabled {
            tracing::debug!(domain = domain.code(), "input ignored while fields are disabled");
        }
        self.fields_enabled
    }

    fn expiration_event(&self, kind: ErrorKind) -> FormEvent {
        tracing::debug!(
            domain = Domain::Expiration.code(),
            selection = %self.expiration.selection(),
            error = kind.code(),
            "expiration changed"
        );
        FormEvent::ValidationError {
            domain: Domain::Expiration,
            kind,
        }
    }

    /// Returns true if a known network was detected in a non-empty number
    /// that passed every rule.
    pub fn is_valid_card_number(&self) -> bool {
        self.card_number.detected_type().is_known() && self.card_number.is_accepted()
    }

    /// Returns true if the selected expiration is not in the past.
    #[inline]
    pub fn is_valid_exp_date(&self) -> bool {
        self.expiration.is_valid_on(self.today)
    }

    /// Returns true if the CVV was edited and the shared error channel is clear.
    #[inline]
    pub fn is_valid_cvv(&self) -> bool {
        self.cvv_touched && self.expiration.error_kind().is_none()
    }

    /// Returns true if the whole sub-form is valid.
    pub fn is_valid(&self) -> bool {
        self.is_valid_card_number() && self.is_valid_exp_date() && self.is_valid_cvv()
    }

    /// Display state of the card-number input.
    pub fn card_number_status(&self) -> FieldStatus {
        match (self.card_number_dirty, self.is_valid_card_number()) {
            (false, _) => FieldStatus::Pristine,
            (true, true) => FieldStatus::Valid,
            (true, false) => FieldStatus::Invalid,
        }
    }

    /// Display state of the CVV input.
    pub fn cvv_status(&self) -> FieldStatus {
        match (self.cvv_touched, self.expiration.error_kind().is_none()) {
            (false, _) => FieldStatus::Pristine,
            (true, true) => FieldStatus::Valid,
            (true, false) => FieldStatus::Invalid,
        }
    }

    /// The last known network detected in the card number.
    ///
    /// Stays at the previous network while the input matches none.
    #[inline]
    pub const fn card_type(&self) -> NetworkId {
        self.card_type
    }

    /// The card-number error channel.
    #[inline]
    pub const fn card_error(&self) -> ErrorKind {
        self.card_number.error_kind()
    }

    /// The error channel shared by expiration and CVV.
    #[inline]
    pub const fn expiration_error(&self) -> ErrorKind {
        self.expiration.error_kind()
    }

    /// The result of the last card-number evaluation.
    #[inline]
    pub const fn card_number(&self) -> &CardNumberState {
        &self.card_number
    }

    /// The month/year selection.
    #[inline]
    pub const fn expiration(&self) -> &ExpirationState {
        &self.expiration
    }

    /// The selected month (0-11).
    #[inline]
    pub const fn selected_month(&self) -> u32 {
        self.expiration.selected_month()
    }

    /// The selected year.
    #[inline]
    pub const fn selected_year(&self) -> i32 {
        self.expiration.selected_year()
    }

    /// Whether the expiration and CVV fields are interactive.
    #[inline]
    pub const fn fields_enabled(&self) -> bool {
        self.fields_enabled
    }

    /// The month the form treats as current.
    #[inline]
    pub const fn today(&self) -> YearMonth {
        self.today
    }

    /// Options for the month selector.
    #[inline]
    pub fn month_options(&self) -> &'static [MonthOption] {
        &MONTHS
    }

    /// Options for the year selector.
    pub fn year_options(&self) -> Vec<String> {
        self.config.year_range().years()
    }

    /// The form's configuration.
    #[inline]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::build(FormConfig::default(), current_year_month())
    }
}

impl fmt::Debug for CardForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardForm")
            .field("today", &self.today)
            .field("card_number", &self.card_number)
            .field("card_type", &self.card_type)
            .field("expiration", &self.expiration)
            .field("cvv", &"*".repeat(self.cvv.len()))
            .field("card_number_dirty", &self.card_number_dirty)
            .field("cvv_touched", &self.cvv_touched)
            .field("fields_enabled", &self.fields_enabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::YearRange;

    const VISA: &str = "4111111111111111";
    const AMEX: &str = "378282246310005";

    fn today() -> YearMonth {
        YearMonth::new(2025, 5).unwrap()
    }

    fn form() -> CardForm {
        let config = FormConfig::default().with_year_range(YearRange::new(2025, 5).unwrap());
        CardForm::with_today(config, today()).unwrap()
    }

    fn enabled_form(number: &str) -> CardForm {
        let mut form = form();
        form.on_raw_input_changed(number);
        assert!(form.fields_enabled());
        form
    }

    fn error(domain: Domain, kind: ErrorKind) -> FormEvent {
        FormEvent::ValidationError { domain, kind }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut form = form();
        assert!(!form.is_valid());

        let events = form.on_raw_input_changed(VISA);
        assert_eq!(events[0], FormEvent::CardTypeDetected(NetworkId::Visa));
        assert_eq!(events[1], error(Domain::CardNumber, ErrorKind::None));
        assert!(matches!(events[2], FormEvent::CardNumberAccepted(ref c) if c.number() == VISA));
        assert_eq!(events[3], FormEvent::FieldsEnabled);
        assert_eq!(events.len(), 4);
        assert!(!form.is_valid());

        // Month before the current one, in the current year
        let events = form.on_month_selected(3).unwrap();
        assert_eq!(events, vec![error(Domain::Expiration, ErrorKind::InvalidMonth)]);
        assert!(!form.is_valid_exp_date());

        // A later year clears it
        let events = form.on_year_index_selected(1).unwrap();
        assert_eq!(events, vec![error(Domain::Expiration, ErrorKind::None)]);
        assert_eq!(form.selected_year(), 2026);
        assert!(form.is_valid_exp_date());
        assert!(!form.is_valid());

        let events = form.on_cvv_changed("123");
        assert_eq!(events, vec![error(Domain::Cvv, ErrorKind::None)]);
        assert!(form.is_valid_card_number());
        assert!(form.is_valid_cvv());
        assert!(form.is_valid());
    }

    #[test]
    fn test_partial_input_events() {
        let mut form = form();

        let events = form.on_raw_input_changed("4");
        assert_eq!(
            events,
            vec![
                FormEvent::CardTypeDetected(NetworkId::Visa),
                error(Domain::CardNumber, ErrorKind::InvalidLength),
            ]
        );
        assert!(!form.fields_enabled());

        // No type event for an unknown prefix; the last known type is kept
        let events = form.on_raw_input_changed("1");
        assert_eq!(events, vec![error(Domain::CardNumber, ErrorKind::UnsupportedCard)]);
        assert_eq!(form.card_type(), NetworkId::Visa);

        let events = form.on_raw_input_changed("12");
        assert_eq!(events, vec![error(Domain::CardNumber, ErrorKind::UnsupportedCard)]);
        assert_eq!(form.card_type(), NetworkId::Visa);
    }

    #[test]
    fn test_invalid_checksum_does_not_enable() {
        let mut form = form();
        let events = form.on_raw_input_changed("4111111111111112");
        assert!(events.contains(&error(Domain::CardNumber, ErrorKind::InvalidNumber)));
        assert!(!events.contains(&FormEvent::FieldsEnabled));
        assert!(!form.fields_enabled());
        assert_eq!(form.card_number_status(), FieldStatus::Invalid);
    }

    #[test]
    fn test_fields_enabled_once_and_latched() {
        let mut form = enabled_form(VISA);

        let events = form.on_raw_input_changed(VISA);
        assert!(!events.contains(&FormEvent::FieldsEnabled));

        form.on_raw_input_changed("41");
        assert!(form.fields_enabled());
        assert!(!form.is_valid_card_number());
    }

    #[test]
    fn test_disabled_fields_ignore_input() {
        let mut form = form();
        assert_eq!(form.on_month_selected(0).unwrap(), Vec::new());
        assert_eq!(form.on_year_selected(2030), Vec::new());
        assert_eq!(form.on_cvv_changed("123"), Vec::new());

        assert_eq!(form.selected_month(), 5);
        assert_eq!(form.selected_year(), 2025);
        assert_eq!(form.cvv_status(), FieldStatus::Pristine);
    }

    #[test]
    fn test_month_out_of_range() {
        let mut form = enabled_form(VISA);
        assert_eq!(form.on_month_selected(12), Err(FormError::MonthOutOfRange(12)));

        // Reported even before the fields are enabled
        let mut form = self::form();
        assert_eq!(form.on_month_selected(99), Err(FormError::MonthOutOfRange(99)));
    }

    #[test]
    fn test_year_index_out_of_range() {
        let mut form = enabled_form(VISA);
        assert_eq!(
            form.on_year_index_selected(5),
            Err(FormError::YearIndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_cvv_checked_against_last_known_network() {
        let mut form = enabled_form(VISA);
        form.on_raw_input_changed("1");
        assert_eq!(form.card_error(), ErrorKind::UnsupportedCard);
        assert_eq!(form.card_type(), NetworkId::Visa);

        let events = form.on_cvv_changed("123");
        assert_eq!(events, vec![error(Domain::Cvv, ErrorKind::None)]);
        assert_eq!(form.cvv_status(), FieldStatus::Valid);
        assert!(!form.is_valid_card_number());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_cvv_uses_new_network_on_next_edit() {
        let mut form = enabled_form(VISA);
        form.on_cvv_changed("123");
        assert!(form.is_valid_cvv());

        form.on_raw_input_changed(AMEX);
        assert_eq!(form.card_type(), NetworkId::Amex);

        assert_eq!(
            form.on_cvv_changed("123"),
            vec![error(Domain::Cvv, ErrorKind::InvalidCcv)]
        );
        form.on_cvv_changed("1234");
        assert!(form.is_valid_cvv());
    }

    #[test]
    fn test_card_number_change_keeps_expiration_error() {
        let mut form = enabled_form(VISA);
        form.on_cvv_changed("123");
        form.on_month_selected(3).unwrap();
        assert_eq!(form.expiration_error(), ErrorKind::InvalidMonth);

        form.on_raw_input_changed("5500000000000004");
        assert_eq!(form.card_type(), NetworkId::Mastercard);
        assert_eq!(form.expiration_error(), ErrorKind::InvalidMonth);
        assert!(!form.is_valid_exp_date());
        assert_eq!(form.cvv_status(), FieldStatus::Invalid);
    }

    #[test]
    fn test_card_number_change_emits_no_cvv_event() {
        let mut form = enabled_form(VISA);
        form.on_cvv_changed("123");
        let events = form.on_raw_input_changed(AMEX);
        assert!(!events.iter().any(|e| matches!(
            e,
            FormEvent::ValidationError {
                domain: Domain::Cvv,
                ..
            }
        )));
    }

    #[test]
    fn test_shared_error_channel() {
        let mut form = enabled_form(VISA);
        form.on_cvv_changed("12");
        assert_eq!(form.expiration_error(), ErrorKind::InvalidCcv);

        // A valid expiration selection overwrites the CVV error
        form.on_month_selected(6).unwrap();
        assert_eq!(form.expiration_error(), ErrorKind::None);
        assert!(form.is_valid_cvv());
    }

    #[test]
    fn test_past_year_flags_expiration() {
        let mut form = enabled_form(VISA);
        let events = form.on_year_selected(2024);
        assert_eq!(events, vec![error(Domain::Expiration, ErrorKind::InvalidMonth)]);
        assert!(!form.is_valid_exp_date());
    }

    #[test]
    fn test_field_status() {
        let mut form = form();
        assert_eq!(form.card_number_status(), FieldStatus::Pristine);
        assert_eq!(form.cvv_status(), FieldStatus::Pristine);

        form.on_raw_input_changed("4111");
        assert_eq!(form.card_number_status(), FieldStatus::Invalid);
        form.on_raw_input_changed(VISA);
        assert_eq!(form.card_number_status(), FieldStatus::Valid);

        form.on_cvv_changed("123");
        assert_eq!(form.cvv_status(), FieldStatus::Valid);
    }

    #[test]
    fn test_empty_input_is_not_valid() {
        let mut form = form();
        form.on_raw_input_changed("");
        assert!(!form.is_valid_card_number());
        assert_eq!(form.card_error(), ErrorKind::UnsupportedCard);
    }

    #[test]
    fn test_same_input_is_idempotent() {
        let mut form = enabled_form(VISA);
        let first = form.on_raw_input_changed("4111 1111 1111 1112");
        let second = form.on_raw_input_changed("4111 1111 1111 1112");
        assert_eq!(first, second);
        assert_eq!(form.card_error(), ErrorKind::InvalidNumber);
        assert_eq!(form.card_type(), NetworkId::Visa);
    }

    #[test]
    fn test_handle_dispatch() {
        let mut form = form();
        form.handle(InputEvent::RawInputChanged(VISA.into())).unwrap();
        form.handle(InputEvent::YearSelected(2027)).unwrap();
        form.handle(InputEvent::MonthSelected(0)).unwrap();
        let events = form.handle(InputEvent::CvvChanged("321".into())).unwrap();
        assert_eq!(events, vec![error(Domain::Cvv, ErrorKind::None)]);
        assert!(form.is_valid());
        assert!(form.handle(InputEvent::MonthSelected(12)).is_err());
    }

    #[test]
    fn test_options() {
        let form = form();
        assert_eq!(form.month_options().len(), 12);
        assert_eq!(form.year_options(), vec!["2025", "2026", "2027", "2028", "2029"]);
        assert_eq!(form.config().placeholder(), "Card Number");
        assert_eq!(form.today(), today());
    }

    #[cfg(feature = "config-json")]
    #[test]
    fn test_invalid_config_rejected() {
        // Deserializing directly skips FormConfig::from_json's validation.
        let config: FormConfig =
            serde_json::from_str(r#"{"year_range": {"first": 2025, "count": 0}}"#).unwrap();
        assert_eq!(
            CardForm::with_today(config, today()).unwrap_err(),
            FormError::EmptyYearRange
        );
    }

    #[test]
    fn test_debug_is_masked() {
        let mut form = enabled_form(VISA);
        form.on_cvv_changed("123");
        let debug = format!("{:?}", form);
        assert!(!debug.contains(VISA));
        assert!(debug.contains("cvv: \"***\""));

        let debug = format!("{:?}", InputEvent::RawInputChanged(VISA.into()));
        assert!(!debug.contains(VISA));
    }

    #[test]
    fn test_assert_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardForm>();
        assert_send_sync::<FormEvent>();
    }
}
