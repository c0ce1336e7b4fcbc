use std::path::{Path, PathBuf};

/// An in-flight document: where it came from and where its bytes live locally.
///
/// Created at fetch time, replaced by the converter's output when compression
/// is requested, and consumed by publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub source_url: String,
    pub local_path: PathBuf,
}

impl Artifact {
    pub fn new(source_url: impl Into<String>, local_path: PathBuf) -> Self {
        Self {
            source_url: source_url.into(),
            local_path,
        }
    }

    /// Same source, new local payload.
    pub fn replaced_by(self, local_path: PathBuf) -> Self {
        Self {
            source_url: self.source_url,
            local_path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.local_path
    }

    /// File name of the local payload, lossily converted.
    pub fn file_name(&self) -> String {
        self.local_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
