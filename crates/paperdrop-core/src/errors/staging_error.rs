//! Local staging directory errors.

use super::error_code::{self, PaperdropErrorCode};

/// Errors touching the local filesystem while staging an artifact.
#[derive(Debug, thiserror::Error)]
pub enum StagingError {
    #[error("{operation} {path}: {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StagingError {
    pub fn io(operation: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.display().to_string(),
            source,
        }
    }
}

impl PaperdropErrorCode for StagingError {
    fn error_code(&self) -> &'static str {
        error_code::STAGING_ERROR
    }
}
