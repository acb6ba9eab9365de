//! Per-form configuration.
//!
//! # Example
//!
//! ```
//! use cc_subform::calendar::YearRange;
//! use cc_subform::FormConfig;
//!
//! let config = FormConfig::default()
//!     .with_year_range(YearRange::new(2030, 10).unwrap())
//!     .with_placeholder("Number on card");
//!
//! assert_eq!(config.year_range().first(), 2030);
//! assert!(config.validate().is_ok());
//! ```

use crate::calendar::YearRange;
use crate::error::FormError;

/// Placeholder text for the card-number field.
pub const DEFAULT_PLACEHOLDER: &str = "Card Number";

/// Settings for a [`crate::CardForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    year_range: YearRange,
    placeholder: String,
    show_card_type: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            year_range: YearRange::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            show_card_type: true,
        }
    }
}

impl FormConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the selectable expiration years.
    pub fn with_year_range(mut self, year_range: YearRange) -> Self {
        self.year_range = year_range;
        self
    }

    /// Sets the card-number placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets whether the detected network name is shown next to the field.
    pub fn with_show_card_type(mut self, show: bool) -> Self {
        self.show_card_type = show;
        self
    }

    /// The selectable expiration years.
    #[inline]
    pub const fn year_range(&self) -> YearRange {
        self.year_range
    }

    /// The card-number placeholder text.
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the detected network name is shown.
    #[inline]
    pub const fn show_card_type(&self) -> bool {
        self.show_card_type
    }

    /// Checks the configuration for values a form cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::EmptyYearRange`] if no year is selectable.
    pub fn validate(&self) -> Result<(), FormError> {
        self.year_range.validate()
    }

    /// Parses and validates a JSON configuration. Missing fields take
    /// their default values.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_subform::FormConfig;
    ///
    /// let config = FormConfig::from_json(
    ///     r#"{"year_range": {"first": 2030, "count": 3}, "show_card_type": false}"#,
    /// ).unwrap();
    /// assert_eq!(config.year_range().years(), vec!["2030", "2031", "2032"]);
    /// assert_eq!(config.placeholder(), "Card Number");
    /// assert!(!config.show_card_type());
    /// ```
    #[cfg(feature = "config-json")]
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FormError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty-printed JSON.
    #[cfg(feature = "config-json")]
    pub fn to_json(&self) -> Result<String, FormError> {
        serde_json::to_string_pretty(self).map_err(|e| FormError::InvalidConfig(e.to_string()))
    }
}
