#![doc(test(attr(deny(warnings))))]

//! Locale-aware currency, number and date formatting for accounting reports,
//! plus normalization of mixed numeric inputs into `rust_decimal::Decimal`.
//!
//! Free functions format with Indonesian conventions and Rupiah. Other locales
//! and currencies go through [`NumberFormatter`] and [`DateFormatter`].

pub mod config;
pub mod currency;
pub mod dates;
pub mod errors;
pub mod locale;
pub mod time;
pub mod utils;

pub use currency::{
    format_currency, format_number, format_percentage, parse_currency, sum_amounts, to_decimal,
    try_sum_amounts, Amount, CurrencyCode, FormatOptions, NumberFormatter,
};
pub use dates::{
    current_period, end_of_month, end_of_year, format_date, format_date_time, format_month,
    format_year, parse_date, start_of_month, start_of_year, DateFormatter, DateInput, Period,
};
pub use errors::FormatError;
pub use locale::LocaleConfig;
pub use rust_decimal::Decimal;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("erp_format tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
