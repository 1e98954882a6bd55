//! Sequential check evaluation.

use std::collections::HashSet;
use std::rc::Rc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::ui::Reporter;

use super::check::{Check, CheckId};
use super::status::{CheckOutcome, CheckStatus, RunReport};

/// Options for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Query and display each check's tool version.
    pub verbose: bool,
}

/// Evaluates registered checks one at a time, in registration order.
///
/// A check is run only if it is not disabled and every one of its
/// prerequisites already succeeded in this run. Prerequisites are looked up
/// in the set of checks that succeeded so far, so they must be registered
/// before the checks that depend on them.
pub struct Runner {
    context: String,
    options: RunOptions,
    checks: Vec<Rc<dyn Check>>,
}

impl Runner {
    /// Create a runner. `context` names what is being checked in the
    /// startup line, usually the project directory.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            options: RunOptions::default(),
            checks: Vec::new(),
        }
    }

    /// Set run options.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a check. Registration order is evaluation order.
    pub fn add(&mut self, check: Rc<dyn Check>) {
        if self.checks.iter().any(|c| c.subject() == check.subject()) {
            warn!("Duplicate check subject '{}'", check.subject());
        }
        self.checks.push(check);
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check and report to `reporter`. Returns `true` if none failed.
    pub fn run_all(&self, reporter: &mut dyn Reporter) -> bool {
        self.run(reporter).success()
    }

    /// Run every check and report to `reporter`, returning the full report.
    ///
    /// Never aborts early: a failing check is recorded and evaluation moves
    /// on to the next one.
    pub fn run(&self, reporter: &mut dyn Reporter) -> RunReport {
        reporter.run_started(&self.context, self.checks.len());

        let mut successful: HashSet<CheckId> = HashSet::new();
        let mut outcomes = Vec::with_capacity(self.checks.len());

        let start = Instant::now();
        for check in &self.checks {
            let status = self.evaluate(check.as_ref(), &successful);
            if status.is_success() {
                successful.insert(CheckId::of(check));
            }

            let version = if self.options.verbose {
                check.version()
            } else {
                None
            };

            let outcome = CheckOutcome {
                subject: check.subject().to_string(),
                version,
                status,
            };
            reporter.check_finished(&outcome);
            outcomes.push(outcome);
        }
        let duration = start.elapsed();

        let report = RunReport { outcomes, duration };

        let failures = report.failures();
        if !failures.is_empty() {
            reporter.failures(&failures);
        }
        reporter.summary(&report.summary());

        report
    }

    fn evaluate(&self, check: &dyn Check, successful: &HashSet<CheckId>) -> CheckStatus {
        let subject = check.subject();

        if check.should_skip() {
            debug!("Skipping '{}': disabled by flag", subject);
            return CheckStatus::SkippedByFlag;
        }

        let missing: Vec<String> = check
            .prerequisites()
            .iter()
            .filter(|prerequisite| !successful.contains(&CheckId::of(prerequisite)))
            .map(|prerequisite| prerequisite.subject().to_string())
            .collect();
        if !missing.is_empty() {
            debug!(
                "Skipping '{}': requires {}",
                subject,
                missing.join(", ")
            );
            return CheckStatus::SkippedByPrerequisite(missing);
        }

        debug!("Running '{}'", subject);
        match check.run() {
            Ok(()) => {
                debug!("'{}' passed", subject);
                CheckStatus::Succeeded
            }
            Err(error) => {
                debug!("'{}' failed: {}", subject, error);
                CheckStatus::Failed(error)
            }
        }
    }
}
