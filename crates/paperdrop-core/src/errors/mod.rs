//! Error handling for paperdrop.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod convert_error;
pub mod error_code;
pub mod fetch_error;
pub mod pipeline_error;
pub mod remote_store_error;
pub mod staging_error;

pub use config_error::ConfigError;
pub use convert_error::ConvertError;
pub use error_code::PaperdropErrorCode;
pub use fetch_error::FetchError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use remote_store_error::RemoteStoreError;
pub use staging_error::StagingError;
