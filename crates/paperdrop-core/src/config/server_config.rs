//! Webhook server configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address. Default: `0.0.0.0:8000`.
    pub bind: Option<String>,
    /// Route the webhook is mounted on. Default: `/webhook`.
    pub webhook_path: Option<String>,
}

impl ServerConfig {
    pub fn effective_bind(&self) -> String {
        self.bind.clone().unwrap_or_else(|| "0.0.0.0:8000".to_string())
    }

    pub fn effective_webhook_path(&self) -> String {
        self.webhook_path
            .clone()
            .unwrap_or_else(|| "/webhook".to_string())
    }
}
