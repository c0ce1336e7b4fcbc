//! Remote document store errors.

use super::error_code::{self, PaperdropErrorCode};

/// Errors raised by the remote store client. Every variant is fatal for the
/// request that triggered it.
#[derive(Debug, thiserror::Error)]
pub enum RemoteStoreError {
    #[error("failed to launch {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("remote store login failed: {reason}")]
    LoginFailed { reason: String },
}

impl PaperdropErrorCode for RemoteStoreError {
    fn error_code(&self) -> &'static str {
        error_code::REMOTE_STORE_ERROR
    }
}
