//! Remote directory listing lines.
//!
//! The remote store client prints one `"<marker> <name>"` line per entry,
//! e.g. `[f]\tMarch 9` or `[d]\tArchive`. Parsing is an explicit two-field
//! split: the marker is the first whitespace-delimited token and the name is
//! everything after the separating whitespace, internal spacing preserved.

use paperdrop_core::constants::FILE_MARKER;

/// Entry type as announced by the listing marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMarker {
    File,
    /// Any other marker (directories, unknown types), kept verbatim.
    Other(String),
}

/// One parsed listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    pub marker: EntryMarker,
    pub name: String,
}

impl RemoteEntry {
    /// Parse a raw listing line. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return None;
        }
        let line = line.trim_start();
        let (marker, name) = match line.split_once(char::is_whitespace) {
            Some((marker, rest)) => (marker, rest.trim_start()),
            None => (line, ""),
        };
        let marker = if marker == FILE_MARKER {
            EntryMarker::File
        } else {
            EntryMarker::Other(marker.to_string())
        };
        Some(Self {
            marker,
            name: name.to_string(),
        })
    }

    pub fn is_file(&self) -> bool {
        self.marker == EntryMarker::File
    }
}
