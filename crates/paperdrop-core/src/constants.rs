//! Shared constants.

/// Full English month names, January first. Index + 1 is the month number.
pub const MONTH_NAMES: [&str; 12] = [
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
];

/// Extension appended to canonical names for local files.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// Marker the remote store client prints in front of file entries.
pub const FILE_MARKER: &str = "[f]";

/// Fallback local file name when a URL has no usable last path segment.
pub const FALLBACK_FILE_NAME: &str = "document.pdf";

/// Default retention window in days.
pub const DEFAULT_RETENTION_DAYS: u32 = 7;

/// Browser-like User-Agent some document hosts require before serving files.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";
