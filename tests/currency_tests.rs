use erp_format::{
    format_currency, format_number, format_percentage, parse_currency, sum_amounts, to_decimal,
    try_sum_amounts, Amount, CurrencyCode, Decimal, FormatError, FormatOptions, LocaleConfig,
    NumberFormatter,
};

#[test]
fn formats_rupiah_with_default_options() {
    assert_eq!(format_currency(1234567, &FormatOptions::default()), "Rp1.234.567");
    assert_eq!(format_currency(1234567.0, &FormatOptions::default()), "Rp1.234.567");
}

#[test]
fn keeps_up_to_two_fraction_digits_by_default() {
    let options = FormatOptions::default();
    assert_eq!(format_currency(1234567.891, &options), "Rp1.234.567,89");
    assert_eq!(format_currency(1500.5, &options), "Rp1.500,5");
    assert_eq!(format_currency(0.125, &options), "Rp0,13");
}

#[test]
fn hides_symbol_when_requested() {
    assert_eq!(format_currency(1234567, &FormatOptions::without_symbol()), "1.234.567");
}

#[test]
fn pads_to_minimum_fraction_digits() {
    let options = FormatOptions {
        show_symbol: true,
        minimum_fraction_digits: 2,
        maximum_fraction_digits: 2,
    };
    assert_eq!(format_currency(1000, &options), "Rp1.000,00");
}

#[test]
fn negative_amounts_lead_with_sign() {
    assert_eq!(format_currency(-2500.75, &FormatOptions::default()), "-Rp2.500,75");
}

#[test]
fn accepts_text_and_decimal_inputs() {
    let options = FormatOptions::default();
    assert_eq!(format_currency("1234.5", &options), "Rp1.234,5");
    assert_eq!(
        format_currency(Decimal::new(123456789, 2), &options),
        "Rp1.234.567,89"
    );
    assert_eq!(format_currency(None::<f64>, &options), "Rp0");
}

#[test]
fn non_numeric_input_is_clamped_to_zero() {
    let options = FormatOptions::default();
    assert_eq!(format_currency("abc", &options), "Rp0");
    assert_eq!(format_currency("", &options), "Rp0");
    assert_eq!(format_currency(f64::NAN, &options), "Rp0");
    assert_eq!(format_number("abc", 2), "0,00");
}

#[test]
fn format_number_uses_exact_fraction_digits() {
    assert_eq!(format_number(1234.5, 2), "1.234,50");
    assert_eq!(format_number(0.005, 2), "0,01");
    assert_eq!(format_number(-1234.567, 1), "-1.234,6");
    assert_eq!(format_number(1234567, 0), "1.234.567");
}

#[test]
fn parse_currency_reads_display_strings() {
    assert_eq!(parse_currency("Rp1.234.567,89"), 1234567.89);
    assert_eq!(parse_currency("1.000"), 1000.0);
    assert_eq!(parse_currency("-Rp2.500"), -2500.0);
    assert_eq!(parse_currency("abc"), 0.0);
    assert_eq!(parse_currency(""), 0.0);
}

#[test]
fn to_decimal_normalizes_every_input_kind() {
    assert_eq!(to_decimal("12.50"), Decimal::new(1250, 2));
    assert_eq!(to_decimal(0.1), Decimal::new(1, 1));
    assert_eq!(to_decimal(None::<&str>), Decimal::ZERO);
    assert_eq!(to_decimal("   "), Decimal::ZERO);
    assert_eq!(to_decimal("not a number"), Decimal::ZERO);

    let exact = Decimal::new(3333, 4);
    assert_eq!(to_decimal(exact), exact);
    assert_eq!(to_decimal(to_decimal("7.25")), to_decimal("7.25"));
}

#[test]
fn strict_conversion_reports_bad_text() {
    assert!(Amount::from("12x").try_to_decimal().is_err());
    assert!(Amount::from(f64::INFINITY).try_to_decimal().is_err());
    assert_eq!(Amount::from("1e3").try_to_decimal().unwrap(), Decimal::from(1000));
}

#[test]
fn sums_line_items_without_float_drift() {
    let items = vec![Amount::from(0.1), Amount::from("0.2"), Amount::from(Decimal::ZERO)];
    assert_eq!(sum_amounts(items), Decimal::new(3, 1));
    assert_eq!(sum_amounts([0.1_f64; 10]), Decimal::ONE);
}

#[test]
fn percentage_is_fixed_point_without_grouping() {
    assert_eq!(format_percentage(12.3456, 2), "12.35%");
    assert_eq!(format_percentage(50, 0), "50%");
    assert_eq!(format_percentage(1234.5, 1), "1234.5%");
    assert_eq!(format_percentage("abc", 2), "0.00%");
    assert_eq!(format_percentage(-0.004, 2), "0.00%");
}

#[test]
fn formatter_follows_configured_locale_and_currency() {
    let formatter = NumberFormatter::new(LocaleConfig::english_us(), CurrencyCode::new("usd"));
    assert_eq!(
        formatter.format_currency(1234567.891, &FormatOptions::default()),
        "$1,234,567.89"
    );
    assert_eq!(formatter.format_number(1234.5, 2), "1,234.50");
    assert_eq!(formatter.parse_currency("$1,234.50"), 1234.5);
}

#[test]
fn format_amount_uses_currency_minor_units() {
    let yen = NumberFormatter::new(LocaleConfig::english_us(), CurrencyCode::new("JPY"));
    assert_eq!(yen.format_amount(1234.56), "¥1,235");

    let rupiah = NumberFormatter::indonesian();
    assert_eq!(rupiah.format_amount(99.999), "Rp100");
}

#[test]
fn amounts_beyond_decimal_range_saturate() {
    assert_eq!(to_decimal(1e29), Decimal::MAX);
    assert_eq!(to_decimal(-1e29), Decimal::MIN);
    assert_eq!(to_decimal("1e40"), Decimal::MAX);
    assert_eq!(
        format_currency(1e29, &FormatOptions::default()),
        "Rp79.228.162.514.264.337.593.543.950.335"
    );
    assert!(matches!(
        Amount::from(1e29).try_to_decimal(),
        Err(FormatError::OutOfRange(_))
    ));
}

#[test]
fn underscore_separated_text_is_not_numeric() {
    assert_eq!(to_decimal("1_000"), Decimal::ZERO);
    assert_eq!(format_currency("1_000", &FormatOptions::default()), "Rp0");
}

#[test]
fn sum_saturates_instead_of_overflowing() {
    assert_eq!(sum_amounts([Decimal::MAX, Decimal::MAX]), Decimal::MAX);
    assert_eq!(sum_amounts([Decimal::MIN, Decimal::from(-1)]), Decimal::MIN);
}

#[test]
fn strict_sum_reports_overflow_and_bad_items() {
    assert_eq!(try_sum_amounts(["1.5", "2.25"]).unwrap(), Decimal::new(375, 2));
    assert!(matches!(
        try_sum_amounts([Decimal::MAX, Decimal::ONE]),
        Err(FormatError::OutOfRange(_))
    ));
    assert!(matches!(
        try_sum_amounts(["1", "abc"]),
        Err(FormatError::InvalidNumber(_))
    ));
}

#[test]
fn percentage_keeps_fraction_digits_at_large_magnitudes() {
    assert_eq!(format_percentage(Decimal::MAX, 2), "79228162514264337593543950335.00%");
}
