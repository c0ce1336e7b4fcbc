//! Configuration system for paperdrop.
//! TOML-based, 3-layer resolution: CLI > env > project file > defaults.

pub mod converter_config;
pub mod fetch_config;
pub mod paperdrop_config;
pub mod remote_config;
pub mod retention_config;
pub mod server_config;
pub mod storage_config;

pub use converter_config::ConverterConfig;
pub use fetch_config::FetchConfig;
pub use paperdrop_config::{CliOverrides, PaperdropConfig};
pub use remote_config::RemoteConfig;
pub use retention_config::RetentionConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
