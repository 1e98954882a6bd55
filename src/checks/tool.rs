//! Checks that delegate to an external tool.

use std::path::Path;

use tracing::debug;

use crate::runner::{Check, CheckError, CheckResult};
use crate::shell::ToolCommand;

/// Runs an external tool and passes if it exits successfully.
///
/// The tool is considered installed if its version command succeeds. The
/// tool prints its own findings, so a failure carries only a fix hint.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    subject: String,
    tool: String,
    install_hint: Option<String>,
    fix_hint: Option<String>,
    version_command: ToolCommand,
    check_command: ToolCommand,
    skip: bool,
}

impl ToolCheck {
    /// Create a check that runs `check_command`, using `version_command` to
    /// detect whether `tool` is installed.
    pub fn new(
        subject: impl Into<String>,
        tool: impl Into<String>,
        version_command: ToolCommand,
        check_command: ToolCommand,
    ) -> Self {
        Self {
            subject: subject.into(),
            tool: tool.into(),
            install_hint: None,
            fix_hint: None,
            version_command,
            check_command,
            skip: false,
        }
    }

    /// Command suggested when the tool is missing.
    pub fn with_install_hint(mut self, hint: impl Into<String>) -> Self {
        self.install_hint = Some(hint.into());
        self
    }

    /// Remedy suggested when the tool reports problems.
    pub fn with_fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }

    /// Disable the check.
    pub fn skipped(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Code style via `cargo fmt`.
    pub fn rustfmt(project_root: &Path, skip: bool) -> Self {
        Self::new(
            "code style",
            "cargo fmt",
            ToolCommand::new("cargo")
                .args(["fmt", "--version"])
                .current_dir(project_root),
            ToolCommand::new("cargo")
                .args(["fmt", "--all", "--", "--check"])
                .current_dir(project_root),
        )
        .with_install_hint("rustup component add rustfmt")
        .with_fix_hint("either manually or by running `cargo fmt --all`")
        .skipped(skip)
    }

    /// Spelling via `typos`.
    pub fn typos(project_root: &Path, skip: bool) -> Self {
        Self::new(
            "spelling mistakes",
            "typos",
            ToolCommand::new("typos")
                .args(["--version"])
                .current_dir(project_root),
            ToolCommand::new("typos")
                .args(["--color", "always"])
                .current_dir(project_root),
        )
        .with_install_hint("cargo install typos-cli")
        .with_fix_hint("either manually or by running `typos -w`")
        .skipped(skip)
    }

    fn missing(&self) -> CheckError {
        CheckError::missing(&self.tool, self.install_hint.as_deref())
    }
}

impl Check for ToolCheck {
    fn subject(&self) -> &str {
        &self.subject
    }

    fn version(&self) -> Option<String> {
        self.version_command.output().ok()
    }

    fn should_skip(&self) -> bool {
        self.skip
    }

    fn run(&self) -> CheckResult {
        if self.version().is_none() {
            debug!("'{}' not available", self.tool);
            return Err(self.missing());
        }

        match self.check_command.status() {
            Ok(true) => Ok(()),
            Ok(false) => Err(CheckError::Failed {
                detail: None,
                suggestion: self.fix_hint.clone(),
            }),
            Err(_) => Err(self.missing()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> ToolCommand {
        ToolCommand::new("sh").args(["-c", script])
    }

    #[test]
    fn builtin_subjects() {
        let root = Path::new(".");
        assert_eq!(ToolCheck::rustfmt(root, false).subject(), "code style");
        assert_eq!(ToolCheck::typos(root, false).subject(), "spelling mistakes");
    }

    #[test]
    fn skip_flag_passes_through() {
        let root = Path::new(".");
        assert!(ToolCheck::rustfmt(root, true).should_skip());
        assert!(!ToolCheck::typos(root, false).should_skip());
    }

    #[test]
    fn absent_tool_is_missing_dependency() {
        let check = ToolCheck::new(
            "ghost",
            "ghost-tool",
            ToolCommand::new("ghost-tool-does-not-exist-12345").args(["--version"]),
            ToolCommand::new("ghost-tool-does-not-exist-12345"),
        )
        .with_install_hint("cargo install ghost-tool");

        assert_eq!(check.version(), None);
        assert_eq!(
            check.run(),
            Err(CheckError::MissingDependency {
                name: "ghost-tool".to_string(),
                install_hint: Some("cargo install ghost-tool".to_string()),
            })
        );
    }

    #[cfg(unix)]
    #[test]
    fn version_is_trimmed_stdout() {
        let check = ToolCheck::new("t", "t", sh("echo 'tool 0.9.1'"), sh("exit 0"));
        assert_eq!(check.version().as_deref(), Some("tool 0.9.1"));
    }

    #[cfg(unix)]
    #[test]
    fn failing_version_command_means_missing() {
        let check = ToolCheck::new("t", "t", sh("exit 101"), sh("exit 0"));
        assert_eq!(check.version(), None);
        assert!(matches!(
            check.run(),
            Err(CheckError::MissingDependency { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn passing_tool_succeeds() {
        let check = ToolCheck::new("t", "t", sh("echo 1.0"), sh("exit 0"));
        assert_eq!(check.run(), Ok(()));
    }

    #[cfg(unix)]
    #[test]
    fn failing_tool_carries_fix_hint() {
        let check = ToolCheck::new("t", "t", sh("echo 1.0"), sh("exit 1"))
            .with_fix_hint("by running `t --fix`");
        assert_eq!(
            check.run(),
            Err(CheckError::Failed {
                detail: None,
                suggestion: Some("by running `t --fix`".to_string()),
            })
        );
    }
}
