//! Date and datetime validation.
//!
//! Input formats are tried in a fixed priority order; the first match wins
//! and no later pattern is consulted. Values no pattern accepts get one
//! last chance as an Excel serial day count (exports produced from
//! spreadsheets frequently carry raw cell numbers instead of dates).

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use caserec_model::DatetimeLeniency;

const DATE_PATTERN: &str = "%Y-%m-%d";
const DATE_DMY_PATTERN: &str = "%d/%m/%Y";
const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only input formats, tried after the datetime format.
const DATE_INPUT_PATTERNS: &[&str] = &[DATE_PATTERN, "%Y/%m/%d", DATE_DMY_PATTERN];

static ISO_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?: - \d{4}-\d{2}-\d{2})?$").expect("iso range pattern")
});
static DMY_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{4})(?: - \d{1,2}/\d{1,2}/\d{4})?$").expect("dmy range pattern")
});

/// Requested output shape for a date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutput {
    /// `YYYY-MM-DD`
    Date,
    /// `DD/MM/YYYY`
    DateDmy,
    /// `YYYY-MM-DD HH:MM:SS`
    Datetime,
}

impl DateOutput {
    fn pattern(self) -> &'static str {
        match self {
            DateOutput::Date => DATE_PATTERN,
            DateOutput::DateDmy => DATE_DMY_PATTERN,
            DateOutput::Datetime => DATETIME_PATTERN,
        }
    }

    fn is_date_only(self) -> bool {
        matches!(self, DateOutput::Date | DateOutput::DateDmy)
    }
}

enum Detected {
    Datetime(NaiveDateTime),
    Date(NaiveDate),
}

fn detect(value: &str) -> Option<Detected> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, DATETIME_PATTERN) {
        return Some(Detected::Datetime(dt));
    }
    for pattern in DATE_INPUT_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
            return Some(Detected::Date(date));
        }
    }
    // Range forms keep only the first date.
    if let Some(captures) = ISO_RANGE_RE.captures(value)
        && let Ok(date) = NaiveDate::parse_from_str(&captures[1], DATE_PATTERN)
    {
        return Some(Detected::Date(date));
    }
    if let Some(captures) = DMY_RANGE_RE.captures(value)
        && let Ok(date) = NaiveDate::parse_from_str(&captures[1], DATE_DMY_PATTERN)
    {
        return Some(Detected::Date(date));
    }
    None
}

/// Interpret a numeric cell as an Excel serial date.
///
/// Excel day counts are relative to 1899-12-30 (the epoch that absorbs the
/// 1900 leap-year bug); fractional days carry the time of day. Values
/// outside `0..=100000` are rejected.
fn from_excel_serial(value: &str, output: DateOutput) -> (String, bool) {
    let Ok(serial) = value.parse::<f64>() else {
        return (String::new(), false);
    };
    if !(0.0..=100_000.0).contains(&serial) {
        return (String::new(), false);
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .map(|date| date.and_time(NaiveTime::MIN));
    let Some(epoch) = epoch else {
        return (String::new(), false);
    };
    let offset = Duration::milliseconds((serial * 86_400_000.0).round() as i64);
    match epoch.checked_add_signed(offset) {
        Some(dt) => (dt.format(output.pattern()).to_string(), true),
        None => (String::new(), false),
    }
}

/// Validate a date cell and reformat it to the requested output.
///
/// Conversion rules once an input format matched:
/// - datetime input, date-only output: collapses to the date when the time
///   is exactly midnight; otherwise the raw string is returned and the
///   leniency variant decides the validity flag.
/// - date input, datetime output: midnight is synthesized.
/// - otherwise the parsed value is reformatted to the output pattern.
pub fn validate_date(raw: &str, output: DateOutput, leniency: DatetimeLeniency) -> (String, bool) {
    let value = raw.trim();
    if value.is_empty() {
        return (String::new(), false);
    }
    match detect(value) {
        None => from_excel_serial(value, output),
        Some(Detected::Datetime(dt)) => {
            if output.is_date_only() {
                if dt.time() == NaiveTime::MIN {
                    (dt.format(output.pattern()).to_string(), true)
                } else {
                    let valid = matches!(leniency, DatetimeLeniency::Lenient);
                    (value.to_string(), valid)
                }
            } else {
                (dt.format(output.pattern()).to_string(), true)
            }
        }
        Some(Detected::Date(date)) => {
            if output == DateOutput::Datetime {
                (format!("{} 00:00:00", date.format(DATE_PATTERN)), true)
            } else {
                (date.format(output.pattern()).to_string(), true)
            }
        }
    }
}
