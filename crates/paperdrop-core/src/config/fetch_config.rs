//! Document download configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_USER_AGENT;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// User-Agent header sent with every download.
    pub user_agent: Option<String>,
}

impl FetchConfig {
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }
}
