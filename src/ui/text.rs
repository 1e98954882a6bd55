//! Line-oriented text report, styled after the Rust test harness.
//!
//! ```text
//! running 3 checks in /path/to/project
//! check code style ... ok
//! check po/POTFILES.in existence ... FAILED
//! check po/POTFILES.in order ... SKIPPED (requires: po/POTFILES.in existence)
//!
//! failures:
//!
//! ---- po/POTFILES.in existence ----
//! error: File `src/gone.rs` does not exist
//!
//! Please fix the above issues
//!
//! failures:
//!     po/POTFILES.in existence
//!
//! test result: FAILED. 1 passed; 1 failed; 1 skipped; finished in 0.42s
//! ```

use std::io::{self, Write};

use crate::runner::{CheckOutcome, CheckStatus, Failure, RunSummary};

use super::theme::CheckTheme;
use super::Reporter;

/// Writes the check report to any [`Write`] sink.
///
/// Write errors are dropped: a closed stdout must not turn a passing run
/// into a crash.
pub struct TextReporter<W: Write> {
    out: W,
    theme: CheckTheme,
}

impl TextReporter<io::Stdout> {
    /// Report to standard output.
    pub fn stdout(colors: bool) -> Self {
        Self::new(io::stdout(), CheckTheme::for_colors(colors))
    }
}

impl<W: Write> TextReporter<W> {
    /// Report to `out` using `theme`.
    pub fn new(out: W, theme: CheckTheme) -> Self {
        Self { out, theme }
    }

    /// Consume the reporter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn blank(&mut self) {
        self.line("");
    }

    fn remark(&self, status: &CheckStatus) -> String {
        match status {
            CheckStatus::Succeeded => self.theme.format_ok(),
            CheckStatus::Failed(_) => self.theme.format_failed(),
            CheckStatus::SkippedByFlag => self.theme.format_skipped("via command flag"),
            CheckStatus::SkippedByPrerequisite(missing) => self
                .theme
                .format_skipped(&format!("requires: {}", missing.join(", "))),
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn run_started(&mut self, context: &str, total: usize) {
        let noun = if total == 1 { "check" } else { "checks" };
        self.line(&format!("running {} {} in {}", total, noun, context));
    }

    fn check_finished(&mut self, outcome: &CheckOutcome) {
        let mut parts = vec!["check".to_string(), outcome.subject.clone()];
        if let Some(version) = &outcome.version {
            parts.push(self.theme.format_version(version));
        }
        parts.push("...".to_string());
        parts.push(self.remark(&outcome.status));

        self.line(&parts.join(" "));
        let _ = self.out.flush();
    }

    fn failures(&mut self, failures: &[Failure<'_>]) {
        self.blank();
        self.line("failures:");
        self.blank();

        for failure in failures {
            self.line(&format!("---- {} ----", failure.subject));
            if let Some(detail) = failure.error.detail() {
                let text = self.theme.format_error(&detail);
                self.line(&text);
                self.blank();
            }
            if let Some(suggestion) = failure.error.suggestion() {
                self.line(&suggestion);
                self.blank();
            }
        }

        self.line("failures:");
        for failure in failures {
            self.line(&format!("    {}", failure.subject));
        }
    }

    fn summary(&mut self, summary: &RunSummary) {
        let result = if summary.success() {
            self.theme.format_ok()
        } else {
            self.theme.format_failed()
        };

        self.blank();
        self.line(&format!(
            "test result: {}. {} passed; {} failed; {} skipped; finished in {:.2}s",
            result,
            summary.passed,
            summary.failed,
            summary.skipped,
            summary.duration.as_secs_f64()
        ));
        let _ = self.out.flush();
    }
}
