//! Per-check outcome and run report types.

use std::time::Duration;

use super::check::CheckError;

/// Final state of a check after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// `run()` returned normally.
    Succeeded,
    /// `run()` reported a violation or a missing tool.
    Failed(CheckError),
    /// Disabled on the command line; never run.
    SkippedByFlag,
    /// Not run because these prerequisites had not succeeded.
    SkippedByPrerequisite(Vec<String>),
}

impl CheckStatus {
    /// Whether the check passed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Whether the check failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether the check was skipped for any reason.
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedByFlag | Self::SkippedByPrerequisite(_))
    }
}

/// What happened to one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The check's subject.
    pub subject: String,
    /// Tool version, only collected in verbose runs.
    pub version: Option<String>,
    /// Final state.
    pub status: CheckStatus,
}

/// A failed check paired with its error, in occurrence order.
#[derive(Debug, Clone, Copy)]
pub struct Failure<'a> {
    /// The failed check's subject.
    pub subject: &'a str,
    /// Why it failed.
    pub error: &'a CheckError,
}

/// Counts shown on the final `test result:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Checks that succeeded.
    pub passed: usize,
    /// Checks that failed.
    pub failed: usize,
    /// Checks skipped by flag or prerequisite.
    pub skipped: usize,
    /// Wall-clock time spent evaluating checks.
    pub duration: Duration,
}

impl RunSummary {
    /// A run passes when nothing failed; skips don't count against it.
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// Everything a run produced, in registration order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One outcome per registered check.
    pub outcomes: Vec<CheckOutcome>,
    /// Wall-clock time spent evaluating checks.
    pub duration: Duration,
}

impl RunReport {
    /// Failed checks in the order they occurred.
    pub fn failures(&self) -> Vec<Failure<'_>> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.status {
                CheckStatus::Failed(error) => Some(Failure {
                    subject: &outcome.subject,
                    error,
                }),
                _ => None,
            })
            .collect()
    }

    /// Tally outcomes.
    pub fn summary(&self) -> RunSummary {
        let count = |pred: fn(&CheckStatus) -> bool| {
            self.outcomes.iter().filter(|o| pred(&o.status)).count()
        };

        RunSummary {
            passed: count(CheckStatus::is_success),
            failed: count(CheckStatus::is_failure),
            skipped: count(CheckStatus::is_skipped),
            duration: self.duration,
        }
    }

    /// Whether no check failed.
    pub fn success(&self) -> bool {
        self.summary().success()
    }

    /// Outcome for the check with the given subject.
    pub fn outcome(&self, subject: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.subject == subject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(subject: &str, status: CheckStatus) -> CheckOutcome {
        CheckOutcome {
            subject: subject.to_string(),
            version: None,
            status,
        }
    }

    #[test]
    fn status_predicates_are_exclusive() {
        let statuses = [
            CheckStatus::Succeeded,
            CheckStatus::Failed(CheckError::failed("x")),
            CheckStatus::SkippedByFlag,
            CheckStatus::SkippedByPrerequisite(vec!["a".into()]),
        ];
        for status in &statuses {
            let hits = [status.is_success(), status.is_failure(), status.is_skipped()]
                .iter()
                .filter(|b| **b)
                .count();
            assert_eq!(hits, 1, "{:?}", status);
        }
    }

    #[test]
    fn summary_counts_each_state() {
        let report = RunReport {
            outcomes: vec![
                outcome("a", CheckStatus::Failed(CheckError::failed("bad"))),
                outcome("b", CheckStatus::SkippedByPrerequisite(vec!["a".into()])),
                outcome("c", CheckStatus::Succeeded),
                outcome("d", CheckStatus::SkippedByFlag),
            ],
            duration: Duration::from_millis(10),
        };

        let summary = report.summary();
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 2);
        assert!(!summary.success());
        assert!(!report.success());
    }

    #[test]
    fn skips_do_not_fail_a_run() {
        let report = RunReport {
            outcomes: vec![outcome("a", CheckStatus::SkippedByFlag)],
            duration: Duration::ZERO,
        };
        assert!(report.success());
    }

    #[test]
    fn failures_keep_occurrence_order() {
        let report = RunReport {
            outcomes: vec![
                outcome("first", CheckStatus::Failed(CheckError::failed("1"))),
                outcome("ok", CheckStatus::Succeeded),
                outcome("second", CheckStatus::Failed(CheckError::missing("t", None))),
            ],
            duration: Duration::ZERO,
        };

        let subjects: Vec<_> = report.failures().iter().map(|f| f.subject).collect();
        assert_eq!(subjects, vec!["first", "second"]);
    }

    #[test]
    fn outcome_lookup_by_subject() {
        let report = RunReport {
            outcomes: vec![outcome("a", CheckStatus::Succeeded)],
            duration: Duration::ZERO,
        };
        assert!(report.outcome("a").is_some());
        assert!(report.outcome("missing").is_none());
    }
}
