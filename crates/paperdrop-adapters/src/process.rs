//! Blocking child-process helper shared by the CLI-backed adapters.

use std::ffi::OsStr;
use std::process::{Command, Output};

/// Finished tool invocation.
pub(crate) struct ToolOutput {
    pub output: Output,
    /// `program arg arg ...`, for error messages and logs.
    pub command_line: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn status(&self) -> String {
        self.output.status.to_string()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).trim().to_string()
    }
}

/// Run `program` with `args` to completion, capturing stdout and stderr.
/// Arguments equal to one of `secrets` are masked in the recorded command line.
pub(crate) fn run_tool<I, S>(program: &str, args: I, secrets: &[&str]) -> std::io::Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    let mut command_line = program.to_string();
    for arg in args {
        command_line.push(' ');
        let shown = arg.as_ref().to_string_lossy();
        if secrets.iter().any(|secret| *secret == shown) {
            command_line.push_str("[REDACTED]");
        } else {
            command_line.push_str(&shown);
        }
        command.arg(arg);
    }
    tracing::debug!(command = %command_line, "running tool");
    let output = command.output()?;
    Ok(ToolOutput {
        output,
        command_line,
    })
}
