//! Document compression configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConverterConfig {
    /// Ghostscript binary. Default: `gs`.
    pub binary: Option<String>,
    /// `-dPDFSETTINGS` profile name without the leading slash. Default: `ebook`.
    pub quality_profile: Option<String>,
}

impl ConverterConfig {
    pub fn effective_binary(&self) -> String {
        self.binary.clone().unwrap_or_else(|| "gs".to_string())
    }

    pub fn effective_quality_profile(&self) -> String {
        self.quality_profile
            .clone()
            .unwrap_or_else(|| "ebook".to_string())
    }
}
