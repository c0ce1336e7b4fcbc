//! Document download errors.

use super::error_code::{self, PaperdropErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP {status} for url {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
}

impl PaperdropErrorCode for FetchError {
    fn error_code(&self) -> &'static str {
        error_code::FETCH_ERROR
    }
}
