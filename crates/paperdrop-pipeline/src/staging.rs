//! Local staging directory for one request.
//!
//! Requests that compress or archive stage into a persistent
//! `<pdf_dir>/<prefix>` directory (`pdf_dir` itself without a prefix) so the
//! year-stamped copy survives. Everything else stages into a temporary
//! directory under `pdf_dir` that is removed when the request ends.

use std::path::{Path, PathBuf};

use paperdrop_core::constants::FALLBACK_FILE_NAME;
use paperdrop_core::errors::StagingError;
use tempfile::TempDir;

#[derive(Debug)]
pub enum Staging {
    Persistent(PathBuf),
    Temporary(TempDir),
}

impl Staging {
    pub fn prepare(pdf_dir: &Path, prefix: &str, persistent: bool) -> Result<Self, StagingError> {
        std::fs::create_dir_all(pdf_dir)
            .map_err(|e| StagingError::io("create directory", pdf_dir, e))?;

        if persistent {
            let dir = match prefix_dir_name(prefix) {
                Some(name) => pdf_dir.join(name),
                None => pdf_dir.to_path_buf(),
            };
            std::fs::create_dir_all(&dir)
                .map_err(|e| StagingError::io("create directory", &dir, e))?;
            return Ok(Self::Persistent(dir));
        }

        tempfile::Builder::new()
            .prefix(".paperdrop-")
            .tempdir_in(pdf_dir)
            .map(Self::Temporary)
            .map_err(|e| StagingError::io("create temporary directory in", pdf_dir, e))
    }

    pub fn dir(&self) -> &Path {
        match self {
            Self::Persistent(dir) => dir,
            Self::Temporary(dir) => dir.path(),
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent(_))
    }
}

/// Directory name for a prefix: separators replaced, dot names refused.
fn prefix_dir_name(prefix: &str) -> Option<String> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return None;
    }
    let name = prefix.replace(['/', '\\'], "_");
    if name == "." || name == ".." {
        return Some("_".to_string());
    }
    Some(name)
}

/// Local file name for a download: the last path segment of the URL, query
/// and fragment dropped. Falls back to `document.pdf` when there is none.
pub fn local_file_name(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();
    let path = without_query
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(without_query)
        .split_once('/')
        .map(|(_, path)| path)
        .unwrap_or_default();
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() && name != "." && name != ".." => name.to_string(),
        _ => FALLBACK_FILE_NAME.to_string(),
    }
}
