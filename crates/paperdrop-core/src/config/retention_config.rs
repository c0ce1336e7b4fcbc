//! Remote retention configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_RETENTION_DAYS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RetentionConfig {
    /// Entries older than this many days are deleted. Default: 7.
    pub window_days: Option<u32>,
}

impl RetentionConfig {
    pub fn effective_window_days(&self) -> u32 {
        self.window_days.unwrap_or(DEFAULT_RETENTION_DAYS)
    }
}
