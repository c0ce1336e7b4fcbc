//! Date reconstruction from yearless remote names.
//!
//! Remote names carry month and day only. The year is inferred relative to
//! today: the current year unless that would put the entry in the future, in
//! which case the previous year. Entries more than about a year stale are
//! therefore indistinguishable from recent ones with the same month/day.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use paperdrop_core::constants::DOCUMENT_EXTENSION;
use paperdrop_core::naming::month_from_name;
use regex::Regex;

use crate::decision::SkipReason;

/// `<Letters> <Digits>` and nothing else.
fn month_day_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+) ([0-9]+)$").expect("month/day pattern is a valid regex")
    })
}

/// Drop a trailing `.pdf`, matched case-insensitively.
pub fn strip_document_suffix(name: &str) -> &str {
    let suffix_len = DOCUMENT_EXTENSION.len() + 1;
    if name.len() > suffix_len && name.is_char_boundary(name.len() - suffix_len) {
        let (stem, suffix) = name.split_at(name.len() - suffix_len);
        if suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(DOCUMENT_EXTENSION) {
            return stem;
        }
    }
    name
}

/// Strip `"<prefix> "` from `base`. An empty prefix matches everything.
pub fn strip_name_prefix<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(base);
    }
    base.strip_prefix(prefix)?.strip_prefix(' ')
}

/// Split `"Month D"` into a month number and a day number.
pub fn parse_month_day(base: &str) -> Result<(u32, u32), SkipReason> {
    let caps = month_day_pattern()
        .captures(base)
        .ok_or(SkipReason::UnrecognizedFormat)?;
    let month = month_from_name(&caps[1]).ok_or(SkipReason::UnknownMonth)?;
    let day = caps[2].parse::<u32>().map_err(|_| SkipReason::InvalidDate)?;
    Ok((month, day))
}

/// Infer the calendar date of a yearless `month`/`day` as seen on `today`.
///
/// Tries `today.year`; only a date strictly after today moves to the
/// previous year. A month/day that does not exist in the current year
/// (February 29 outside a leap year) is `None`. Never returns a date after
/// today.
pub fn infer_date(month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if date <= today {
        Some(date)
    } else {
        NaiveDate::from_ymd_opt(today.year() - 1, month, day)
    }
}
