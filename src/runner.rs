//! Tool invocation
//!
//! Single seam between the console and child processes. Handlers describe an
//! invocation; [`ProcessRunner`] performs it. A non-zero exit is reported
//! inside [`CommandResult`], never as an error: the tool ran and said no, and
//! its diagnostic belongs to the user. Only a failure to launch at all
//! surfaces as [`BridgeError::Launch`].

use crate::error::BridgeError;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Outcome of one finished tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the process exited with status zero.
    pub succeeded: bool,

    /// Exit code, when the platform reported one.
    pub exit_code: Option<i32>,

    /// Captured standard output, trimmed.
    pub stdout: String,

    /// Captured standard error, trimmed.
    pub stderr: String,
}

impl CommandResult {
    /// Best available explanation for a failed invocation. The bridge writes
    /// most errors to stderr but reports some on stdout instead.
    pub fn diagnostic(&self) -> &str {
        if !self.stderr.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Runs external tools on behalf of the operation handlers.
pub trait ToolRunner {
    /// Run to completion with output captured.
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandResult, BridgeError>;

    /// Run attached to the console's own stdin/stdout/stderr, blocking until
    /// the child exits. Used for interactive children such as a device shell
    /// or the mirroring window.
    fn run_attached(&self, program: &Path, args: &[String]) -> Result<CommandResult, BridgeError>;
}

/// [`ToolRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandResult, BridgeError> {
        debug!(program = %program.display(), ?args, "running tool");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| BridgeError::Launch {
                program: program.display().to_string(),
                source: e,
            })?;

        Ok(CommandResult {
            succeeded: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    fn run_attached(&self, program: &Path, args: &[String]) -> Result<CommandResult, BridgeError> {
        debug!(program = %program.display(), ?args, "running tool attached to console");
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| BridgeError::Launch {
                program: program.display().to_string(),
                source: e,
            })?;

        Ok(CommandResult {
            succeeded: status.success(),
            exit_code: status.code(),
            stdout: String::new(),
            stderr: String::new(),
        })
    }
}
