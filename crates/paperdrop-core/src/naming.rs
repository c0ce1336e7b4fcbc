//! Naming service: the deterministic document name for a calendar date.
//!
//! Remote copies are stored under the *yearless* rendering
//! (`"<prefix> Month D"`); only the local historical copy carries the year
//! (`"<prefix> Month D YYYY"`). The year is inferred again at retention time.

use chrono::{Datelike, NaiveDate};

use crate::constants::MONTH_NAMES;

/// Canonical name derived from a date and an optional prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    prefix: Option<String>,
    month: u32,
    day: u32,
    year: i32,
}

impl CanonicalName {
    /// Build the name for `date`. The prefix is trimmed; empty means none.
    pub fn new(date: NaiveDate, prefix: &str) -> Self {
        let prefix = prefix.trim();
        Self {
            prefix: (!prefix.is_empty()).then(|| prefix.to_string()),
            month: date.month(),
            day: date.day(),
            year: date.year(),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `"<prefix> Month D"`, the only form ever stored remotely.
    pub fn yearless(&self) -> String {
        let stem = format!("{} {}", month_name(self.month), self.day);
        match &self.prefix {
            Some(prefix) => format!("{prefix} {stem}"),
            None => stem,
        }
    }

    /// `"<prefix> Month D YYYY"`, used for the local historical copy.
    pub fn year_stamped(&self) -> String {
        format!("{} {}", self.yearless(), self.year)
    }

    /// Yearless name with a file extension appended.
    pub fn yearless_file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.yearless())
    }

    /// Year-stamped name with a file extension appended.
    pub fn year_stamped_file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.year_stamped())
    }
}

/// Full English name of month `month` (1-based).
fn month_name(month: u32) -> &'static str {
    MONTH_NAMES[(month - 1) as usize]
}

/// Exact, case-sensitive lookup of a full English month name.
/// Returns the month number (1..=12).
pub fn month_from_name(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}
