//! Compression tool errors.

use super::error_code::{self, PaperdropErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to launch {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("{program} exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("cannot prepare output {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("{program} produced no output at {path}")]
    MissingOutput { program: String, path: String },
}

impl PaperdropErrorCode for ConvertError {
    fn error_code(&self) -> &'static str {
        error_code::CONVERT_ERROR
    }
}
