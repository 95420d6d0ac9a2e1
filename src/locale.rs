use chrono::Weekday;

use crate::errors::FormatError;

/// Tag of the locale every free function formats with.
pub const DEFAULT_LOCALE_TAG: &str = "id-ID";

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: &'static str,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub month_names: [&'static str; 12],
    pub short_month_names: [&'static str; 12],
    /// Weekday names starting from Monday.
    pub weekday_names: [&'static str; 7],
    pub short_weekday_names: [&'static str; 7],
    pub am_pm: [&'static str; 2],
}

impl LocaleConfig {
    /// Indonesian conventions: `1.234.567,89`, "Januari", "Senin".
    pub fn indonesian() -> Self {
        Self {
            language_tag: "id-ID",
            decimal_separator: ',',
            grouping_separator: '.',
            month_names: [
                "Januari",
                "Februari",
                "Maret",
                "April",
                "Mei",
                "Juni",
                "Juli",
                "Agustus",
                "September",
                "Oktober",
                "November",
                "Desember",
            ],
            short_month_names: [
                "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
            ],
            weekday_names: ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"],
            short_weekday_names: ["Sen", "Sel", "Rab", "Kam", "Jum", "Sab", "Min"],
            am_pm: ["AM", "PM"],
        }
    }

    pub fn english_us() -> Self {
        Self {
            language_tag: "en-US",
            decimal_separator: '.',
            grouping_separator: ',',
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            short_month_names: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            weekday_names: [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            short_weekday_names: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            am_pm: ["AM", "PM"],
        }
    }

    /// Looks up a built-in locale. Accepts `id-ID`, `id_ID`, `id`, `en-US`, `en_US` and `en`.
    pub fn from_tag(tag: &str) -> Result<Self, FormatError> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "id-id" | "id" => Ok(Self::indonesian()),
            "en-us" | "en" => Ok(Self::english_us()),
            _ => Err(FormatError::UnsupportedLocale(tag.to_string())),
        }
    }

    /// Month name for `month` in `1..=12`.
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[month_index(month)]
    }

    pub fn short_month_name(&self, month: u32) -> &'static str {
        self.short_month_names[month_index(month)]
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        self.weekday_names[weekday.num_days_from_monday() as usize]
    }

    pub fn short_weekday_name(&self, weekday: Weekday) -> &'static str {
        self.short_weekday_names[weekday.num_days_from_monday() as usize]
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::indonesian()
    }
}

fn month_index(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}
