use crate::errors::FetchError;

/// Retrieves document bytes over HTTP.
pub trait Fetcher: Send + Sync {
    /// GET `url` with the given headers. Non-success statuses are errors.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Vec<u8>, FetchError>;
}
