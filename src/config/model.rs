use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, FormatOptions, DEFAULT_CURRENCY};
use crate::dates::{DEFAULT_DATE_PATTERN, DEFAULT_DATE_TIME_PATTERN};
use crate::errors::FormatError;
use crate::locale::{LocaleConfig, DEFAULT_LOCALE_TAG};

/// Stores the locale, currency and display defaults used by reports and pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_show_symbol")]
    pub show_symbol: bool,
    #[serde(default)]
    pub minimum_fraction_digits: u32,
    #[serde(default = "Config::default_maximum_fraction_digits")]
    pub maximum_fraction_digits: u32,
    #[serde(default = "Config::default_date_pattern")]
    pub date_pattern: String,
    #[serde(default = "Config::default_date_time_pattern")]
    pub date_time_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            show_symbol: Self::default_show_symbol(),
            minimum_fraction_digits: 0,
            maximum_fraction_digits: Self::default_maximum_fraction_digits(),
            date_pattern: Self::default_date_pattern(),
            date_time_pattern: Self::default_date_time_pattern(),
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        DEFAULT_LOCALE_TAG.into()
    }

    pub fn default_currency() -> String {
        DEFAULT_CURRENCY.into()
    }

    pub fn default_show_symbol() -> bool {
        true
    }

    pub fn default_maximum_fraction_digits() -> u32 {
        2
    }

    pub fn default_date_pattern() -> String {
        DEFAULT_DATE_PATTERN.into()
    }

    pub fn default_date_time_pattern() -> String {
        DEFAULT_DATE_TIME_PATTERN.into()
    }

    pub fn locale_config(&self) -> Result<LocaleConfig, FormatError> {
        LocaleConfig::from_tag(&self.locale)
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            show_symbol: self.show_symbol,
            minimum_fraction_digits: self.minimum_fraction_digits,
            maximum_fraction_digits: self.maximum_fraction_digits,
        }
    }
}
