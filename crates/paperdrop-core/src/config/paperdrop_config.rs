//! Top-level paperdrop configuration with layered resolution.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{
    ConverterConfig, FetchConfig, RemoteConfig, RetentionConfig, ServerConfig, StorageConfig,
};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "paperdrop.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Built once at startup and handed to the orchestrator; nothing reads the
/// environment after that.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PAPERDROP_*`)
/// 3. Project config (`paperdrop.toml` in root, or `--config <path>`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PaperdropConfig {
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    pub converter: ConverterConfig,
    pub fetch: FetchConfig,
    pub retention: RetentionConfig,
    pub server: ServerConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file; replaces the `paperdrop.toml` lookup and must exist.
    pub config_path: Option<PathBuf>,
    pub bind: Option<String>,
}

impl CliOverrides {
    /// Parse `--config <path>` and `--bind <addr>` from process arguments.
    /// Unknown arguments are ignored.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut overrides = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => overrides.config_path = args.next().map(PathBuf::from),
                "--bind" => overrides.bind = args.next(),
                _ => {
                    if let Some(v) = arg.strip_prefix("--config=") {
                        overrides.config_path = Some(PathBuf::from(v));
                    } else if let Some(v) = arg.strip_prefix("--bind=") {
                        overrides.bind = Some(v.to_string());
                    }
                }
            }
        }
        overrides
    }
}

impl PaperdropConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        match cli_overrides.and_then(|c| c.config_path.as_ref()) {
            Some(explicit) => Self::merge_toml_file(&mut config, explicit)?,
            None => {
                let project_config_path = root.join(PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PaperdropConfig) -> Result<(), ConfigError> {
        let bind = config.server.effective_bind();
        if bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::ValidationFailed {
                field: "server.bind".to_string(),
                message: format!("`{bind}` is not a socket address"),
            });
        }
        if !config.server.effective_webhook_path().starts_with('/') {
            return Err(ConfigError::ValidationFailed {
                field: "server.webhook_path".to_string(),
                message: "must start with '/'".to_string(),
            });
        }
        if config.remote.effective_target_dir().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "remote.target_dir".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut PaperdropConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: PaperdropConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PaperdropConfig, other: &PaperdropConfig) {
        // Storage
        if other.storage.pdf_dir.is_some() {
            base.storage.pdf_dir = other.storage.pdf_dir.clone();
        }

        // Remote
        if other.remote.target_dir.is_some() {
            base.remote.target_dir = other.remote.target_dir.clone();
        }
        if other.remote.binary.is_some() {
            base.remote.binary = other.remote.binary.clone();
        }
        if other.remote.user.is_some() {
            base.remote.user = other.remote.user.clone();
        }
        if other.remote.password.is_some() {
            base.remote.password = other.remote.password.clone();
        }

        // Converter
        if other.converter.binary.is_some() {
            base.converter.binary = other.converter.binary.clone();
        }
        if other.converter.quality_profile.is_some() {
            base.converter.quality_profile = other.converter.quality_profile.clone();
        }

        // Fetch
        if other.fetch.user_agent.is_some() {
            base.fetch.user_agent = other.fetch.user_agent.clone();
        }

        // Retention
        if other.retention.window_days.is_some() {
            base.retention.window_days = other.retention.window_days;
        }

        // Server
        if other.server.bind.is_some() {
            base.server.bind = other.server.bind.clone();
        }
        if other.server.webhook_path.is_some() {
            base.server.webhook_path = other.server.webhook_path.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `PAPERDROP_PDF_DIR`, `PAPERDROP_RM_TARGET_DIR`, etc.
    fn apply_env_overrides(config: &mut PaperdropConfig) {
        if let Ok(val) = std::env::var("PAPERDROP_PDF_DIR") {
            config.storage.pdf_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PAPERDROP_RM_TARGET_DIR") {
            config.remote.target_dir = Some(val);
        }
        if let Ok(val) = std::env::var("PAPERDROP_RMAPI_BIN") {
            config.remote.binary = Some(val);
        }
        if let Ok(val) = std::env::var("PAPERDROP_RM_USER") {
            config.remote.user = Some(val);
        }
        if let Ok(val) = std::env::var("PAPERDROP_RM_PASS") {
            config.remote.password = Some(val);
        }
        if let Ok(val) = std::env::var("PAPERDROP_GS_BIN") {
            config.converter.binary = Some(val);
        }
        if let Ok(val) = std::env::var("PAPERDROP_RETENTION_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                config.retention.window_days = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PAPERDROP_BIND") {
            config.server.bind = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut PaperdropConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.bind {
            config.server.bind = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
