//! Remote store backed by the `rmapi` command-line client.

use std::path::Path;
use std::sync::Mutex;

use paperdrop_core::config::RemoteConfig;
use paperdrop_core::errors::RemoteStoreError;
use paperdrop_core::traits::RemoteStore;

use crate::process::{run_tool, ToolOutput};

/// Runs `rmapi ls|put|rm`. Any non-zero exit is an error carrying stderr.
///
/// With credentials configured, `rmapi login` runs once before the first
/// command; otherwise the client's own stored session is used.
pub struct RmapiStore {
    binary: String,
    credentials: Option<(String, String)>,
    logged_in: Mutex<bool>,
}

impl RmapiStore {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            credentials: None,
            logged_in: Mutex::new(false),
        }
    }

    pub fn with_credentials(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    pub fn from_config(config: &RemoteConfig) -> Self {
        let store = Self::new(config.effective_binary());
        match config.credentials() {
            Some((user, password)) => store.with_credentials(user, password),
            None => store,
        }
    }

    fn ensure_login(&self) -> Result<(), RemoteStoreError> {
        let Some((user, password)) = &self.credentials else {
            return Ok(());
        };
        let mut logged_in = self
            .logged_in
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if *logged_in {
            return Ok(());
        }

        let run = run_tool(
            &self.binary,
            ["login", "--username", user.as_str(), "--password", password.as_str()],
            &[password.as_str()],
        )
        .map_err(|e| self.spawn_error(e))?;
        if !run.success() {
            return Err(RemoteStoreError::LoginFailed {
                reason: run.stderr(),
            });
        }
        tracing::info!(user = %user, "rmapi: logged in");
        *logged_in = true;
        Ok(())
    }

    fn spawn_error(&self, e: std::io::Error) -> RemoteStoreError {
        RemoteStoreError::Spawn {
            program: self.binary.clone(),
            reason: e.to_string(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<ToolOutput, RemoteStoreError> {
        self.ensure_login()?;
        let run = run_tool(&self.binary, args, &[]).map_err(|e| self.spawn_error(e))?;
        if !run.success() {
            return Err(RemoteStoreError::CommandFailed {
                command: run.command_line.clone(),
                status: run.status(),
                stderr: run.stderr(),
            });
        }
        Ok(run)
    }
}

impl std::fmt::Debug for RmapiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RmapiStore")
            .field("binary", &self.binary)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|(user, _)| (user, "[REDACTED]")),
            )
            .finish()
    }
}

impl RemoteStore for RmapiStore {
    fn list(&self, dir: &str) -> Result<Vec<String>, RemoteStoreError> {
        let run = self.run(&["ls", dir])?;
        Ok(run.stdout().lines().map(str::to_string).collect())
    }

    /// Replaces an existing entry of the same name.
    fn put(&self, local_path: &Path, dir: &str) -> Result<(), RemoteStoreError> {
        let local = local_path.to_string_lossy();
        self.run(&["put", "--force", local.as_ref(), dir])?;
        tracing::info!(local = %local, dir, "rmapi: uploaded");
        Ok(())
    }

    fn remove(&self, remote_path: &str) -> Result<(), RemoteStoreError> {
        self.run(&["rm", remote_path])?;
        tracing::info!(path = remote_path, "rmapi: removed");
        Ok(())
    }
}
