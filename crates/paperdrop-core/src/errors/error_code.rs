//! PaperdropErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait PaperdropErrorCode {
    /// Returns the error code string (e.g., "FETCH_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NO_URL: &str = "NO_URL";
pub const FETCH_ERROR: &str = "FETCH_ERROR";
pub const CONVERT_ERROR: &str = "CONVERT_ERROR";
pub const REMOTE_STORE_ERROR: &str = "REMOTE_STORE_ERROR";
pub const STAGING_ERROR: &str = "STAGING_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
