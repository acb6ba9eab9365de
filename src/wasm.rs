//! WebAssembly bindings for the card sub-form.
//!
//! This module exposes [`CardForm`] and the stateless validators to
//! JavaScript. Form handlers return an array of plain event objects.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { WasmCardForm, monthOptions } from 'cc_subform';
//!
//! await init();
//!
//! const form = new WasmCardForm();
//! for (const event of form.onRawInputChanged("4111 1111 1111 1111")) {
//!     switch (event.type) {
//!         case "cardType":      showNetwork(event.name); break;
//!         case "error":         showError(event.domain, event.message); break;
//!         case "fieldsEnabled": enableExpirationAndCvv(); break;
//!     }
//! }
//!
//! form.onMonthSelected(monthSelect.selectedIndex);
//! form.onYearSelected(yearSelect.selectedIndex);
//! form.onCvvChanged("123");
//! console.log(form.valid);
//! ```

#![cfg(feature = "wasm")]

use crate::calendar::{YearRange, MONTHS};
use crate::form::{CardForm, FormEvent};
use crate::{FormConfig, NetworkId};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

fn set(target: &Object, key: &str, value: impl Into<JsValue>) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), &value.into()).map(|_| ())
}

fn event_to_js(event: &FormEvent) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    match event {
        FormEvent::CardTypeDetected(network) => {
            set(&obj, "type", "cardType")?;
            set(&obj, "network", network.id())?;
            set(&obj, "name", network.name())?;
        }
        FormEvent::CardNumberAccepted(card) => {
            set(&obj, "type", "cardNumber")?;
            set(&obj, "network", card.network().id())?;
            set(&obj, "lastFour", card.last_four())?;
            set(&obj, "masked", card.masked())?;
        }
        FormEvent::ValidationError { domain, kind } => {
            set(&obj, "type", "error")?;
            set(&obj, "domain", domain.code())?;
            set(&obj, "code", kind.code())?;
            set(&obj, "message", kind.message())?;
        }
        FormEvent::FieldsEnabled => {
            set(&obj, "type", "fieldsEnabled")?;
        }
    }
    Ok(obj.into())
}

fn events_to_js(events: &[FormEvent]) -> Result<Array, JsValue> {
    let array = Array::new();
    for event in events {
        array.push(&event_to_js(event)?);
    }
    Ok(array)
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A card sub-form driven from JavaScript.
#[wasm_bindgen]
pub struct WasmCardForm {
    inner: CardForm,
}

#[wasm_bindgen]
impl WasmCardForm {
    /// Creates a form. Years default to five starting at the current one.
    #[wasm_bindgen(constructor)]
    pub fn new(first_year: Option<i32>, year_count: Option<u32>) -> Result<WasmCardForm, JsValue> {
        let mut config = FormConfig::default();
        if first_year.is_some() || year_count.is_some() {
            let default = config.year_range();
            let range = YearRange::new(
                first_year.unwrap_or(default.first()),
                year_count.unwrap_or(default.count()),
            )
            .map_err(to_js_error)?;
            config = config.with_year_range(range);
        }
        let inner = CardForm::new(config).map_err(to_js_error)?;
        Ok(WasmCardForm { inner })
    }

    /// Handles a change of the card-number text.
    #[wasm_bindgen(js_name = onRawInputChanged)]
    pub fn on_raw_input_changed(&mut self, text: &str) -> Result<Array, JsValue> {
        events_to_js(&self.inner.on_raw_input_changed(text))
    }

    /// `index` is the month selector's `selectedIndex` (0 = January).
    #[wasm_bindgen(js_name = onMonthSelected)]
    pub fn on_month_selected(&mut self, index: u32) -> Result<Array, JsValue> {
        let events = self.inner.on_month_selected(index).map_err(to_js_error)?;
        events_to_js(&events)
    }

    /// `index` is the year selector's `selectedIndex`.
    #[wasm_bindgen(js_name = onYearSelected)]
    pub fn on_year_selected(&mut self, index: usize) -> Result<Array, JsValue> {
        let events = self.inner.on_year_index_selected(index).map_err(to_js_error)?;
        events_to_js(&events)
    }

    /// Handles a change of the CVV text.
    #[wasm_bindgen(js_name = onCvvChanged)]
    pub fn on_cvv_changed(&mut self, text: &str) -> Result<Array, JsValue> {
        events_to_js(&self.inner.on_cvv_changed(text))
    }

    /// True when the whole sub-form is valid.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Last known network id, `"unknown"` before one is detected.
    #[wasm_bindgen(getter, js_name = cardType)]
    pub fn card_type(&self) -> String {
        self.inner.card_type().id().to_string()
    }

    /// Card-number outcome code.
    #[wasm_bindgen(getter, js_name = cardError)]
    pub fn card_error(&self) -> String {
        self.inner.card_error().code().to_string()
    }

    /// Shared expiration/CVV outcome code.
    #[wasm_bindgen(getter, js_name = expirationError)]
    pub fn expiration_error(&self) -> String {
        self.inner.expiration_error().code().to_string()
    }

    /// Whether the expiration and CVV fields are interactive.
    #[wasm_bindgen(getter, js_name = fieldsEnabled)]
    pub fn fields_enabled(&self) -> bool {
        self.inner.fields_enabled()
    }

    /// Card-number display state: `"pristine"`, `"valid"` or `"invalid"`.
    #[wasm_bindgen(getter, js_name = cardNumberStatus)]
    pub fn card_number_status(&self) -> String {
        self.inner.card_number_status().code().to_string()
    }

    /// CVV display state.
    #[wasm_bindgen(getter, js_name = cvvStatus)]
    pub fn cvv_status(&self) -> String {
        self.inner.cvv_status().code().to_string()
    }

    /// Card-number input placeholder.
    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> String {
        self.inner.config().placeholder().to_string()
    }

    /// The configured year selector options.
    #[wasm_bindgen(js_name = yearOptions)]
    pub fn year_options(&self) -> Array {
        self.inner
            .year_options()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }
}

/// Detects the network of a (partial) card number.
///
/// # Example
/// ```javascript
/// classifyCard("3782");  // "amex"
/// ```
#[wasm_bindgen(js_name = classifyCard)]
pub fn classify_card(card_number: &str) -> String {
    crate::detect::classify(&crate::normalize::normalize(card_number))
        .id()
        .to_string()
}

/// Checks if a digit string passes the Luhn algorithm.
#[wasm_bindgen(js_name = isValidLuhn)]
pub fn is_valid_luhn(digits: &str) -> bool {
    crate::luhn::is_valid_luhn(digits)
}

/// Validates a CVV for a network id (`"visa"`, `"amex"`, ...).
///
/// Returns the outcome code, `"none"` when valid.
///
/// # Example
/// ```javascript
/// validateCvv("1234", "amex");  // "none"
/// validateCvv("123", "amex");   // "invalid_ccv"
/// ```
#[wasm_bindgen(js_name = validateCvv)]
pub fn validate_cvv(cvv: &str, network: &str) -> Result<String, JsValue> {
    let network: NetworkId = network.parse().map_err(to_js_error)?;
    Ok(crate::cvv::validate_cvv(cvv, network).code().to_string())
}

/// The month selector options as `{label, value}` objects.
#[wasm_bindgen(js_name = monthOptions)]
pub fn month_options() -> Result<Array, JsValue> {
    let array = Array::new();
    for option in MONTHS.iter() {
        let obj = Object::new();
        set(&obj, "label", option.label)?;
        set(&obj, "value", option.value)?;
        array.push(&obj);
    }
    Ok(array)
}

/// The year selector options for `count` years starting at `first`.
#[wasm_bindgen(js_name = yearOptions)]
pub fn year_options(first: i32, count: u32) -> Result<Array, JsValue> {
    let range = YearRange::new(first, count).map_err(to_js_error)?;
    Ok(range.years().into_iter().map(JsValue::from).collect())
}
