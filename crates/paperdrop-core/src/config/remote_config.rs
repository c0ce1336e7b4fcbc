//! Remote store client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the `rmapi` remote store client.
#[derive(Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RemoteConfig {
    /// Default remote directory when a request does not name one. Default: `/`.
    pub target_dir: Option<String>,
    /// Client binary. Default: `rmapi`.
    pub binary: Option<String>,
    /// Account user, used for an explicit login when paired with `password`.
    pub user: Option<String>,
    pub password: Option<String>,
}

impl RemoteConfig {
    pub fn effective_target_dir(&self) -> String {
        self.target_dir.clone().unwrap_or_else(|| "/".to_string())
    }

    pub fn effective_binary(&self) -> String {
        self.binary.clone().unwrap_or_else(|| "rmapi".to_string())
    }

    /// Credentials, only when both halves are configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) if !user.is_empty() => Some((user, password)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("target_dir", &self.target_dir)
            .field("binary", &self.binary)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
