//! External tool invocation.

use crate::error::{ConformityError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::trace;

/// Result of running a tool with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, trimmed.
    pub stdout: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// A program plus arguments, run directly without a shell.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ToolCommand {
    /// Create a command for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// The program name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command line for display.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    /// Run with stdout captured and stderr discarded.
    ///
    /// Fails only if the program could not be spawned; a non-zero exit is
    /// reported through [`CommandResult::success`].
    pub fn capture(&self) -> Result<CommandResult> {
        trace!("Capturing: {}", self.display());

        let output = self
            .build()
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|_| ConformityError::CommandFailed {
                command: self.display(),
                code: None,
            })?;

        Ok(CommandResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            success: output.status.success(),
        })
    }

    /// Stdout of a successful run, trimmed.
    pub fn output(&self) -> Result<String> {
        let result = self.capture()?;
        if result.success {
            Ok(result.stdout)
        } else {
            Err(ConformityError::CommandFailed {
                command: self.display(),
                code: result.exit_code,
            })
        }
    }

    /// Run with inherited stdio so the tool's own diagnostics reach the
    /// terminal. Returns whether it exited successfully.
    pub fn status(&self) -> Result<bool> {
        trace!("Running: {}", self.display());

        let status = self
            .build()
            .stdin(Stdio::null())
            .status()
            .map_err(|_| ConformityError::CommandFailed {
                command: self.display(),
                code: None,
            })?;

        Ok(status.success())
    }
}
