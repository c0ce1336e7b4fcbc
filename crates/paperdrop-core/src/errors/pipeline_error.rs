//! Pipeline errors: the single error type an ingestion request can fail with.

use super::error_code::{self, PaperdropErrorCode};
use super::{ConfigError, ConvertError, FetchError, RemoteStoreError, StagingError};

/// Errors that abort an ingestion request.
/// Aggregates subsystem errors via `From` conversions. The `Display` of a
/// downstream variant is exactly the underlying failure's text.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No URL found in message")]
    NoUrl,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    RemoteStore(#[from] RemoteStoreError),

    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// True for errors caused by the request itself rather than a collaborator.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::NoUrl)
    }
}

impl PaperdropErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoUrl => error_code::NO_URL,
            Self::Fetch(e) => e.error_code(),
            Self::Convert(e) => e.error_code(),
            Self::RemoteStore(e) => e.error_code(),
            Self::Staging(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
