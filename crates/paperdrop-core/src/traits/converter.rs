use std::path::{Path, PathBuf};

use crate::errors::ConvertError;

/// Shrinks a document with a fixed output-quality profile.
pub trait Converter: Send + Sync {
    /// Compress the file at `local_path`, returning the path of the result.
    fn compress(&self, local_path: &Path) -> Result<PathBuf, ConvertError>;
}
