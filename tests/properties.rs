use erp_format::{format_currency, parse_currency, to_decimal, FormatOptions};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_recovers_formatted_amount(value in 0.0f64..1_000_000_000_000.0) {
        let formatted = format_currency(value, &FormatOptions::without_symbol());
        let parsed = parse_currency(&formatted);
        prop_assert!((parsed - value).abs() <= 0.005 + value * f64::EPSILON * 4.0, "{} -> {} -> {}", value, formatted, parsed);
    }

    #[test]
    fn to_decimal_is_idempotent_for_numbers(value in -1.0e15f64..1.0e15) {
        let once = to_decimal(value);
        prop_assert_eq!(to_decimal(once), once);
    }

    #[test]
    fn to_decimal_is_idempotent_for_text(int_part in 0u64..1_000_000_000, frac in 0u32..10_000) {
        let text = format!("{}.{:04}", int_part, frac);
        let once = to_decimal(text.as_str());
        prop_assert_eq!(to_decimal(once), once);
    }
}
