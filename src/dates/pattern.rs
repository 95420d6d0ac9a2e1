use std::fmt::Write;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::errors::FormatError;
use crate::locale::LocaleConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Year { width: usize },
    TwoDigitYear,
    Month { pad: bool },
    MonthShortName,
    MonthName,
    Day { pad: bool },
    WeekdayShortName,
    WeekdayName,
    Hour24 { pad: bool },
    Hour12 { pad: bool },
    Minute { pad: bool },
    Second { pad: bool },
    DayPeriod,
}

/// A compiled date pattern using Unicode/date-fns letters (`dd/MM/yyyy HH:mm`).
///
/// Quoted text (`'de'`) is literal and `''` is a single quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    tokens: Vec<Token>,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> Result<Self, FormatError> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens = Vec::new();
        let mut literal = String::new();
        let mut idx = 0;

        while idx < chars.len() {
            let ch = chars[idx];
            if ch == '\'' {
                if chars.get(idx + 1) == Some(&'\'') {
                    literal.push('\'');
                    idx += 2;
                    continue;
                }
                idx += 1;
                let mut closed = false;
                while idx < chars.len() {
                    if chars[idx] == '\'' {
                        if chars.get(idx + 1) == Some(&'\'') {
                            literal.push('\'');
                            idx += 2;
                            continue;
                        }
                        closed = true;
                        idx += 1;
                        break;
                    }
                    literal.push(chars[idx]);
                    idx += 1;
                }
                if !closed {
                    return Err(invalid(pattern, "unterminated quoted text"));
                }
                continue;
            }

            if !ch.is_ascii_alphabetic() {
                literal.push(ch);
                idx += 1;
                continue;
            }

            let start = idx;
            while idx < chars.len() && chars[idx] == ch {
                idx += 1;
            }
            let token = field_token(ch, idx - start).ok_or_else(|| {
                let field: String = chars[start..idx].iter().collect();
                invalid(pattern, &format!("unsupported field `{}`", field))
            })?;
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(token);
        }

        if !literal.is_empty() {
            tokens.push(Token::Literal(literal));
        }
        Ok(Self { tokens })
    }

    pub fn format(&self, value: &NaiveDateTime, locale: &LocaleConfig) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            // Writing into a String cannot fail.
            let _ = match token {
                Token::Literal(text) => out.write_str(text),
                Token::Year { width } => write_year(&mut out, value.year(), *width),
                Token::TwoDigitYear => write!(out, "{:02}", value.year().rem_euclid(100)),
                Token::Month { pad } => write_number(&mut out, value.month(), *pad),
                Token::MonthShortName => out.write_str(locale.short_month_name(value.month())),
                Token::MonthName => out.write_str(locale.month_name(value.month())),
                Token::Day { pad } => write_number(&mut out, value.day(), *pad),
                Token::WeekdayShortName => {
                    out.write_str(locale.short_weekday_name(value.weekday()))
                }
                Token::WeekdayName => out.write_str(locale.weekday_name(value.weekday())),
                Token::Hour24 { pad } => write_number(&mut out, value.hour(), *pad),
                Token::Hour12 { pad } => write_number(&mut out, value.hour12().1, *pad),
                Token::Minute { pad } => write_number(&mut out, value.minute(), *pad),
                Token::Second { pad } => write_number(&mut out, value.second(), *pad),
                Token::DayPeriod => {
                    let (is_pm, _) = value.hour12();
                    out.write_str(locale.am_pm[usize::from(is_pm)])
                }
            };
        }
        out
    }
}

fn field_token(letter: char, count: usize) -> Option<Token> {
    let token = match (letter, count) {
        ('y', 1) => Token::Year { width: 1 },
        ('y', 2) => Token::TwoDigitYear,
        ('y', n) => Token::Year { width: n },
        ('M', 1) => Token::Month { pad: false },
        ('M', 2) => Token::Month { pad: true },
        ('M', 3) => Token::MonthShortName,
        ('M', 4) => Token::MonthName,
        ('d', n @ 1..=2) => Token::Day { pad: n == 2 },
        ('E', 1..=3) => Token::WeekdayShortName,
        ('E', 4) => Token::WeekdayName,
        ('H', n @ 1..=2) => Token::Hour24 { pad: n == 2 },
        ('h', n @ 1..=2) => Token::Hour12 { pad: n == 2 },
        ('m', n @ 1..=2) => Token::Minute { pad: n == 2 },
        ('s', n @ 1..=2) => Token::Second { pad: n == 2 },
        ('a', 1..=3) => Token::DayPeriod,
        _ => return None,
    };
    Some(token)
}

fn write_number(out: &mut String, value: u32, pad: bool) -> std::fmt::Result {
    if pad {
        write!(out, "{:02}", value)
    } else {
        write!(out, "{}", value)
    }
}

/// Pads the digits only, so year -5 with `yyyy` is `-0005`.
fn write_year(out: &mut String, year: i32, width: usize) -> std::fmt::Result {
    if year < 0 {
        out.push('-');
    }
    write!(out, "{:0width$}", year.unsigned_abs(), width = width)
}

fn invalid(pattern: &str, reason: &str) -> FormatError {
    FormatError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
