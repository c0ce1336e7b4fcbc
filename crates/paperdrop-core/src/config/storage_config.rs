//! Local storage configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where fetched documents are staged and archived.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory for staging and archived copies. Default: `/app/pdfs`.
    pub pdf_dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn effective_pdf_dir(&self) -> PathBuf {
        self.pdf_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("/app/pdfs"))
    }
}
