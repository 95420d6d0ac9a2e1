//! Date display, parsing and reporting-period boundaries.

mod pattern;

pub use pattern::DatePattern;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use once_cell::sync::Lazy;

use crate::config::Config;
use crate::errors::FormatError;
use crate::locale::LocaleConfig;
use crate::time::{Clock, SystemClock};

pub const DEFAULT_DATE_PATTERN: &str = "dd/MM/yyyy";
pub const DEFAULT_DATE_TIME_PATTERN: &str = "dd/MM/yyyy HH:mm";
const MONTH_PATTERN: &str = "MMMM yyyy";
const YEAR_PATTERN: &str = "yyyy";

/// Rendered in place of a date that cannot be displayed.
pub const INVALID_DATE: &str = "-";

static DEFAULT_FORMATTER: Lazy<DateFormatter> = Lazy::new(DateFormatter::indonesian);

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

// `%z` takes `+0700` and `+07:00`; `%#z` also takes a bare `+07`.
const OFFSET_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%#z",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// A calendar value as callers hand it over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    /// ISO-8601 text, resolved with [`parse_date`].
    Text(String),
}

impl DateInput {
    pub fn resolve(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::DateTime(value) => Some(*value),
            DateInput::Date(date) => Some(date.and_time(NaiveTime::MIN)),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(value: DateTime<Tz>) -> Self {
        DateInput::DateTime(value.naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl From<&String> for DateInput {
    fn from(value: &String) -> Self {
        DateInput::Text(value.clone())
    }
}

/// Inclusive date range used to default report filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn contains(&self, value: NaiveDateTime) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Formats dates with one locale and computes boundaries relative to a clock.
#[derive(Debug, Clone)]
pub struct DateFormatter<C: Clock = SystemClock> {
    locale: LocaleConfig,
    clock: C,
}

impl DateFormatter<SystemClock> {
    pub fn new(locale: LocaleConfig) -> Self {
        Self::with_clock(locale, SystemClock)
    }

    pub fn indonesian() -> Self {
        Self::new(LocaleConfig::indonesian())
    }

    pub fn from_config(config: &Config) -> Result<Self, FormatError> {
        Ok(Self::new(config.locale_config()?))
    }
}

impl<C: Clock> DateFormatter<C> {
    pub fn with_clock(locale: LocaleConfig, clock: C) -> Self {
        Self { locale, clock }
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Renders `date` with `pattern` (default `dd/MM/yyyy`), or `"-"` when either is invalid.
    pub fn format_date<'a>(
        &self,
        date: impl Into<DateInput>,
        pattern: impl Into<Option<&'a str>>,
    ) -> String {
        let pattern = pattern.into().unwrap_or(DEFAULT_DATE_PATTERN);
        let input = date.into();
        let Some(value) = input.resolve() else {
            tracing::warn!(?input, "unparsable date, rendering placeholder");
            return INVALID_DATE.to_string();
        };
        match DatePattern::parse(pattern) {
            Ok(compiled) => compiled.format(&value, &self.locale),
            Err(err) => {
                tracing::warn!(error = %err, "invalid date pattern, rendering placeholder");
                INVALID_DATE.to_string()
            }
        }
    }

    /// Same as [`Self::format_date`] with `dd/MM/yyyy HH:mm` as the default pattern.
    pub fn format_date_time<'a>(
        &self,
        date: impl Into<DateInput>,
        pattern: impl Into<Option<&'a str>>,
    ) -> String {
        let pattern = pattern.into().unwrap_or(DEFAULT_DATE_TIME_PATTERN);
        self.format_date(date, pattern)
    }

    /// Full month name and year, e.g. `Januari 2025`.
    pub fn format_month(&self, date: impl Into<DateInput>) -> String {
        self.format_date(date, MONTH_PATTERN)
    }

    pub fn format_year(&self, date: impl Into<DateInput>) -> String {
        self.format_date(date, YEAR_PATTERN)
    }

    pub fn start_of_month(&self, date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
        let date = self.or_now(date.into()).date();
        start_of_day(first_of_month(date))
    }

    pub fn end_of_month(&self, date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
        let date = self.or_now(date.into()).date();
        end_of_day(last_of_month(date))
    }

    pub fn start_of_year(&self, date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
        let date = self.or_now(date.into()).date();
        let first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
        start_of_day(first)
    }

    pub fn end_of_year(&self, date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
        let date = self.or_now(date.into()).date();
        let last = NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date);
        end_of_day(last)
    }

    /// Boundaries of the month containing the clock's current moment.
    pub fn current_period(&self) -> Period {
        let now = self.now();
        Period {
            start: self.start_of_month(now),
            end: self.end_of_month(now),
        }
    }

    fn or_now(&self, date: Option<NaiveDateTime>) -> NaiveDateTime {
        date.unwrap_or_else(|| self.clock.now())
    }
}

impl Default for DateFormatter<SystemClock> {
    fn default() -> Self {
        Self::indonesian()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_else(|| start_of_day(date))
}

/// Parses ISO-8601 text (and the `dd/MM/yyyy` display form). `None` when malformed.
///
/// Offsets are normalized to UTC. Date-only input resolves to midnight.
pub fn parse_date(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let text = normalize_iso(text);
    let text = text.as_str();
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Some(value.naive_utc());
    }
    for format in OFFSET_DATE_TIME_FORMATS {
        if let Ok(value) = DateTime::parse_from_str(text, format) {
            return Some(value.naive_utc());
        }
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Some(value);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(start_of_day(date));
        }
    }
    parse_reduced_precision(text).map(start_of_day)
}

/// Rewrites ISO variants onto the forms the parsers take: a space separator becomes `T`,
/// a trailing `Z` becomes `+00:00`, and an hour-only time gains `:00`.
fn normalize_iso(text: &str) -> String {
    let mut iso = text.to_string();
    if iso.len() > 10 && iso.as_bytes()[10] == b' ' {
        iso.replace_range(10..11, "T");
    }
    if iso.len() > 10 && iso.ends_with('Z') {
        iso.pop();
        iso.push_str("+00:00");
    }
    if iso.len() == 13 && iso.as_bytes()[10] == b'T' {
        iso.push_str(":00");
    }
    iso
}

/// Like [`parse_date`] but reports what failed.
pub fn parse_date_strict(text: &str) -> Result<NaiveDateTime, FormatError> {
    parse_date(text).ok_or_else(|| FormatError::InvalidDate(text.to_string()))
}

/// `yyyy-MM` and `yyyy`.
fn parse_reduced_precision(text: &str) -> Option<NaiveDate> {
    let (year, month) = match text.split_once('-') {
        Some((year, month)) if month.len() == 2 => (year, month.parse::<u32>().ok()?),
        Some(_) => return None,
        None => (text, 1),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

pub fn format_date<'a>(date: impl Into<DateInput>, pattern: impl Into<Option<&'a str>>) -> String {
    DEFAULT_FORMATTER.format_date(date, pattern)
}

pub fn format_date_time<'a>(
    date: impl Into<DateInput>,
    pattern: impl Into<Option<&'a str>>,
) -> String {
    DEFAULT_FORMATTER.format_date_time(date, pattern)
}

pub fn format_month(date: impl Into<DateInput>) -> String {
    DEFAULT_FORMATTER.format_month(date)
}

pub fn format_year(date: impl Into<DateInput>) -> String {
    DEFAULT_FORMATTER.format_year(date)
}

pub fn start_of_month(date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
    DEFAULT_FORMATTER.start_of_month(date)
}

pub fn end_of_month(date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
    DEFAULT_FORMATTER.end_of_month(date)
}

pub fn start_of_year(date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
    DEFAULT_FORMATTER.start_of_year(date)
}

pub fn end_of_year(date: impl Into<Option<NaiveDateTime>>) -> NaiveDateTime {
    DEFAULT_FORMATTER.end_of_year(date)
}

pub fn current_period() -> Period {
    DEFAULT_FORMATTER.current_period()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn last_of_month_handles_leap_years() {
        assert_eq!(last_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(last_of_month(ymd(2025, 2, 10)), ymd(2025, 2, 28));
        assert_eq!(last_of_month(ymd(2025, 12, 31)), ymd(2025, 12, 31));
    }

    #[test]
    fn reduced_precision_forms() {
        assert_eq!(parse_reduced_precision("2025-03"), Some(ymd(2025, 3, 1)));
        assert_eq!(parse_reduced_precision("2025"), Some(ymd(2025, 1, 1)));
        assert_eq!(parse_reduced_precision("2025-13"), None);
        assert_eq!(parse_reduced_precision("25"), None);
        assert_eq!(parse_reduced_precision("2025-3"), None);
    }

    #[test]
    fn normalize_iso_rewrites_variants() {
        assert_eq!(normalize_iso("2025-01-15 10:30"), "2025-01-15T10:30");
        assert_eq!(normalize_iso("2025-01-15T10:00Z"), "2025-01-15T10:00+00:00");
        assert_eq!(normalize_iso("2025-01-15T10"), "2025-01-15T10:00");
        assert_eq!(normalize_iso("15/01/2025"), "15/01/2025");
    }

    #[test]
    fn date_input_resolves_plain_dates_to_midnight() {
        let input = DateInput::from(ymd(2025, 6, 1));
        assert_eq!(input.resolve(), Some(start_of_day(ymd(2025, 6, 1))));
    }

    #[test]
    fn period_contains_its_bounds() {
        let period = Period {
            start: start_of_day(ymd(2025, 1, 1)),
            end: end_of_day(ymd(2025, 1, 31)),
        };
        assert!(period.contains(period.start));
        assert!(period.contains(period.end));
        assert!(!period.contains(start_of_day(ymd(2025, 2, 1))));
    }
}
