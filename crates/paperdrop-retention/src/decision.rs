//! Retention decisions, one per listing line.

use chrono::NaiveDate;

use crate::listing::RemoteEntry;

/// Why a line was excluded from deletion. Skips are never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Blank line or a marker other than the file marker.
    NotAFile,
    /// A prefix filter is active and the name belongs to another namespace.
    PrefixMismatch,
    /// Not `<Month> <Day>` after suffix and prefix stripping.
    UnrecognizedFormat,
    /// Month token is not an exact full English month name.
    UnknownMonth,
    /// Month/day does not form a calendar date in the inferred year.
    InvalidDate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAFile => "not a file",
            Self::PrefixMismatch => "prefix mismatch",
            Self::UnrecognizedFormat => "unrecognized format",
            Self::UnknownMonth => "unknown month",
            Self::InvalidDate => "invalid date",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionVerdict {
    /// Dated before the cutoff.
    Delete { date: NaiveDate },
    /// Dated on or after the cutoff.
    Keep { date: NaiveDate },
    /// Not a deletion candidate at all.
    Skip(SkipReason),
}

/// A listing line mapped to its verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionDecision {
    pub line: String,
    pub entry: Option<RemoteEntry>,
    pub verdict: RetentionVerdict,
}

impl RetentionDecision {
    pub fn is_delete(&self) -> bool {
        matches!(self.verdict, RetentionVerdict::Delete { .. })
    }

    /// Inferred date, when the line parsed that far.
    pub fn inferred_date(&self) -> Option<NaiveDate> {
        match self.verdict {
            RetentionVerdict::Delete { date } | RetentionVerdict::Keep { date } => Some(date),
            RetentionVerdict::Skip(_) => None,
        }
    }
}

/// Decisions for a whole listing, in listing order.
#[derive(Debug, Clone)]
pub struct RetentionPlan {
    pub today: NaiveDate,
    pub cutoff: NaiveDate,
    pub decisions: Vec<RetentionDecision>,
}

impl RetentionPlan {
    /// Decisions marked for deletion, in listing order.
    pub fn deletions(&self) -> impl Iterator<Item = &RetentionDecision> {
        self.decisions.iter().filter(|d| d.is_delete())
    }

    pub fn delete_count(&self) -> usize {
        self.deletions().count()
    }

    pub fn skip_count(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| matches!(d.verdict, RetentionVerdict::Skip(_)))
            .count()
    }
}
