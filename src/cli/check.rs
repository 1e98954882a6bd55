//! The check command: load configuration, register checks, run them.

use std::path::{Path, PathBuf};

use crate::checks::{register_default_checks, SkipFlags};
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::runner::{RunOptions, Runner};
use crate::ui::Reporter;

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether every check passed or was skipped.
    pub success: bool,

    /// Process exit code (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Runs the standard check set for a project.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    options: RunOptions,
    skip: SkipFlags,
}

impl CheckCommand {
    /// Build the command from parsed arguments.
    pub fn new(project_root: &Path, cli: &Cli) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: cli.config.clone(),
            options: RunOptions {
                verbose: cli.verbose,
            },
            skip: SkipFlags {
                rustfmt: cli.skip_rustfmt,
                typos: cli.skip_typos,
            },
        }
    }

    /// Load configuration and register every check.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or the translation manifest
    /// exists but cannot be read.
    pub fn build_runner(&self) -> Result<Runner> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        tracing::debug!("Using configuration: {:?}", config);

        let mut runner = Runner::new(self.project_root.display().to_string())
            .with_options(self.options);
        register_default_checks(&mut runner, &self.project_root, &config, self.skip)?;
        Ok(runner)
    }

    /// Run all checks, reporting to `reporter`.
    pub fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let runner = self.build_runner()?;

        if runner.run_all(reporter) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
