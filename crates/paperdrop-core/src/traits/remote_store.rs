use std::path::Path;

use crate::errors::RemoteStoreError;

/// Remote document store addressed by path.
pub trait RemoteStore: Send + Sync {
    /// Raw listing of `dir`, one `"<marker> <name>"` line per entry.
    fn list(&self, dir: &str) -> Result<Vec<String>, RemoteStoreError>;

    /// Upload `local_path` into `dir`. The remote entry is named after the
    /// local file.
    fn put(&self, local_path: &Path, dir: &str) -> Result<(), RemoteStoreError>;

    /// Remove the entry at `remote_path`.
    fn remove(&self, remote_path: &str) -> Result<(), RemoteStoreError>;
}

/// Join a remote directory and an entry name with exactly one `/`.
pub fn remote_join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
