use std::str::FromStr;

use once_cell::sync::Lazy;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::FormatError;
use crate::locale::LocaleConfig;

/// Currency every free function formats with.
pub const DEFAULT_CURRENCY: &str = "IDR";

/// Upper bound for requested fraction digits; `Decimal` keeps at most 28.
pub const MAX_FRACTION_DIGITS: u32 = 20;

static DEFAULT_FORMATTER: Lazy<NumberFormatter> = Lazy::new(NumberFormatter::indonesian);

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbol(&self) -> String {
        symbol_for(self.as_str())
    }

    pub fn minor_units(&self) -> u32 {
        minor_units_for(self.as_str())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "IDR" => "Rp".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "SGD" => "S$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Display options for [`NumberFormatter::format_currency`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatOptions {
    pub show_symbol: bool,
    pub minimum_fraction_digits: u32,
    pub maximum_fraction_digits: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            show_symbol: true,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 2,
        }
    }
}

impl FormatOptions {
    pub fn without_symbol() -> Self {
        Self {
            show_symbol: false,
            ..Self::default()
        }
    }

    /// Effective `(min, max)` fraction digits: both capped, max never below min.
    pub fn fraction_bounds(&self) -> (u32, u32) {
        let min = self.minimum_fraction_digits.min(MAX_FRACTION_DIGITS);
        let max = self.maximum_fraction_digits.min(MAX_FRACTION_DIGITS).max(min);
        (min, max)
    }
}

/// A monetary value as callers hand it over: float, numeric text, or decimal.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Number(f64),
    Text(String),
    Decimal(Decimal),
}

impl Amount {
    /// Converts to `Decimal`, failing on non-numeric text and non-finite floats.
    ///
    /// Empty or blank text is zero. Numbers beyond `Decimal::MAX` are `OutOfRange`.
    pub fn try_to_decimal(&self) -> Result<Decimal, FormatError> {
        match self {
            Amount::Decimal(value) => Ok(*value),
            Amount::Number(value) => decimal_from_f64(*value),
            Amount::Text(text) => decimal_from_text(text),
        }
    }

    /// Total conversion: out-of-range numbers saturate, anything unparsable becomes zero.
    pub fn to_decimal(&self) -> Decimal {
        match self.try_to_decimal() {
            Ok(value) => value,
            Err(FormatError::OutOfRange(raw)) => {
                tracing::warn!(input = %raw, "amount exceeds decimal range, saturating");
                if raw.starts_with('-') {
                    Decimal::MIN
                } else {
                    Decimal::MAX
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "amount is not numeric, using zero");
                Decimal::ZERO
            }
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<f32> for Amount {
    fn from(value: f32) -> Self {
        Amount::Number(f64::from(value))
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Amount::Decimal(Decimal::from(value))
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount::Text(value)
    }
}

impl From<&String> for Amount {
    fn from(value: &String) -> Self {
        Amount::Text(value.clone())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Decimal(value)
    }
}

impl From<&Decimal> for Amount {
    fn from(value: &Decimal) -> Self {
        Amount::Decimal(*value)
    }
}

/// A missing value counts as zero.
impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value
            .map(Into::into)
            .unwrap_or(Amount::Decimal(Decimal::ZERO))
    }
}

fn decimal_from_f64(value: f64) -> Result<Decimal, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::InvalidNumber(value.to_string()));
    }
    // Shortest round-trip text keeps 0.1 as 0.1 instead of its binary expansion.
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .ok_or_else(|| FormatError::OutOfRange(value.to_string()))
}

fn decimal_from_text(text: &str) -> Result<Decimal, FormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    // `Decimal` tolerates `_` digit separators; display input never carries them.
    if trimmed.contains('_') {
        return Err(FormatError::InvalidNumber(trimmed.to_string()));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => FormatError::OutOfRange(trimmed.to_string()),
            _ => FormatError::InvalidNumber(trimmed.to_string()),
        })
}

/// Formats numbers and currency amounts for one locale and currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormatter {
    locale: LocaleConfig,
    currency: CurrencyCode,
}

impl NumberFormatter {
    pub fn new(locale: LocaleConfig, currency: CurrencyCode) -> Self {
        Self { locale, currency }
    }

    /// `id-ID` with Rupiah.
    pub fn indonesian() -> Self {
        Self::new(LocaleConfig::indonesian(), CurrencyCode::default())
    }

    pub fn from_config(config: &Config) -> Result<Self, FormatError> {
        Ok(Self::new(config.locale_config()?, config.currency_code()))
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Formats `amount` as currency, e.g. `Rp1.234.567,5` or `-Rp250`.
    pub fn format_currency(&self, amount: impl Into<Amount>, options: &FormatOptions) -> String {
        let value = amount.into().to_decimal();
        let (min, max) = options.fraction_bounds();
        let (negative, body) = self.render(value, min, max);
        let mut out = String::with_capacity(body.len() + 4);
        if negative {
            out.push('-');
        }
        if options.show_symbol {
            out.push_str(&self.currency.symbol());
        }
        out.push_str(&body);
        out
    }

    /// Currency formatting with the currency's own minor units as the maximum.
    pub fn format_amount(&self, amount: impl Into<Amount>) -> String {
        let options = FormatOptions {
            maximum_fraction_digits: self.currency.minor_units(),
            ..FormatOptions::default()
        };
        self.format_currency(amount, &options)
    }

    /// Grouped number with exactly `decimals` fraction digits.
    pub fn format_number(&self, value: impl Into<Amount>, decimals: u32) -> String {
        let value = value.into().to_decimal();
        let decimals = decimals.min(MAX_FRACTION_DIGITS);
        let (negative, body) = self.render(value, decimals, decimals);
        if negative {
            format!("-{}", body)
        } else {
            body
        }
    }

    /// Re-parses a display string produced by this formatter. Lossy; 0 when unreadable.
    pub fn parse_currency(&self, text: &str) -> f64 {
        let decimal_separator = self.locale.decimal_separator;
        let cleaned: String = text
            .chars()
            .filter(|ch| ch.is_ascii_digit() || *ch == decimal_separator || *ch == '-')
            .map(|ch| if ch == decimal_separator { '.' } else { ch })
            .collect();
        match cleaned.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                if !text.trim().is_empty() {
                    tracing::warn!(input = text, "could not parse currency text, using zero");
                }
                0.0
            }
        }
    }

    /// Rounds half away from zero and returns the sign plus the grouped absolute value.
    fn render(&self, value: Decimal, min: u32, max: u32) -> (bool, String) {
        let rounded = value.round_dp_with_strategy(max, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let plain = rounded.abs().to_string();
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (plain.as_str(), ""),
        };

        let mut fraction = frac_part.trim_end_matches('0').to_string();
        while (fraction.len() as u32) < min {
            fraction.push('0');
        }

        let mut body = group_digits(int_part, self.locale.grouping_separator);
        if !fraction.is_empty() {
            body.push(self.locale.decimal_separator);
            body.push_str(&fraction);
        }
        (negative, body)
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::indonesian()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats with the default `id-ID` / IDR formatter.
pub fn format_currency(amount: impl Into<Amount>, options: &FormatOptions) -> String {
    DEFAULT_FORMATTER.format_currency(amount, options)
}

pub fn format_number(value: impl Into<Amount>, decimals: u32) -> String {
    DEFAULT_FORMATTER.format_number(value, decimals)
}

pub fn parse_currency(text: &str) -> f64 {
    DEFAULT_FORMATTER.parse_currency(text)
}

/// Normalizes any amount to `Decimal`. Idempotent; missing or non-numeric input is zero.
pub fn to_decimal(value: impl Into<Amount>) -> Decimal {
    value.into().to_decimal()
}

/// Sums line items in decimal space. Saturates at the `Decimal` bounds instead of overflowing.
pub fn sum_amounts<I, A>(items: I) -> Decimal
where
    I: IntoIterator<Item = A>,
    A: Into<Amount>,
{
    items.into_iter().map(to_decimal).fold(Decimal::ZERO, |acc, value| {
        acc.checked_add(value).unwrap_or_else(|| {
            tracing::warn!(%acc, %value, "sum exceeds decimal range, saturating");
            acc.saturating_add(value)
        })
    })
}

/// Strict sum: fails on the first unparsable item or on overflow.
pub fn try_sum_amounts<I, A>(items: I) -> Result<Decimal, FormatError>
where
    I: IntoIterator<Item = A>,
    A: Into<Amount>,
{
    items.into_iter().try_fold(Decimal::ZERO, |acc, item| {
        let value = item.into().try_to_decimal()?;
        acc.checked_add(value)
            .ok_or_else(|| FormatError::OutOfRange(format!("{} + {}", acc, value)))
    })
}

/// `"<fixed>%"` with a `.` decimal point and no grouping.
pub fn format_percentage(value: impl Into<Amount>, decimals: u32) -> String {
    let decimals = decimals.min(MAX_FRACTION_DIGITS);
    let rounded = value
        .into()
        .to_decimal()
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    };
    format!("{}%", fixed_point(rounded, decimals))
}

/// Pads the fraction with zeros; `Decimal` cannot rescale values near its bounds.
fn fixed_point(value: Decimal, decimals: u32) -> String {
    let mut text = value.to_string();
    let current = text.split_once('.').map_or(0, |(_, frac)| frac.len());
    if decimals as usize > current {
        if current == 0 {
            text.push('.');
        }
        text.extend(std::iter::repeat('0').take(decimals as usize - current));
    }
    text
}
