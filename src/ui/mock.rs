//! Mock reporter for testing.
//!
//! `MockReporter` implements the [`Reporter`] trait and captures every event
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use conformity::runner::Runner;
//! use conformity::ui::MockReporter;
//!
//! let runner = Runner::new("demo");
//! let mut reporter = MockReporter::new();
//! assert!(runner.run_all(&mut reporter));
//! assert_eq!(reporter.summaries()[0].passed, 0);
//! ```

use crate::runner::{CheckOutcome, Failure, RunSummary};

use super::Reporter;

/// Captures reporter events.
#[derive(Debug, Default)]
pub struct MockReporter {
    started: Vec<(String, usize)>,
    outcomes: Vec<CheckOutcome>,
    failure_blocks: Vec<Vec<String>>,
    summaries: Vec<RunSummary>,
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// `(context, total)` for each run started.
    pub fn started(&self) -> &[(String, usize)] {
        &self.started
    }

    /// Every reported check outcome.
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Subjects listed in each failures block.
    pub fn failure_blocks(&self) -> &[Vec<String>] {
        &self.failure_blocks
    }

    /// Every final summary.
    pub fn summaries(&self) -> &[RunSummary] {
        &self.summaries
    }
}

impl Reporter for MockReporter {
    fn run_started(&mut self, context: &str, total: usize) {
        self.started.push((context.to_string(), total));
    }

    fn check_finished(&mut self, outcome: &CheckOutcome) {
        self.outcomes.push(outcome.clone());
    }

    fn failures(&mut self, failures: &[Failure<'_>]) {
        self.failure_blocks
            .push(failures.iter().map(|f| f.subject.to_string()).collect());
    }

    fn summary(&mut self, summary: &RunSummary) {
        self.summaries.push(*summary);
    }
}
