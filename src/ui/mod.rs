//! Report rendering.
//!
//! This module provides:
//! - [`Reporter`] trait, the presentation side of a run
//! - [`TextReporter`] for the line-oriented terminal report
//! - [`MockReporter`] for capturing events in tests
//! - [`CheckTheme`] for terminal styling

pub mod mock;
pub mod text;
pub mod theme;

pub use mock::MockReporter;
pub use text::TextReporter;
pub use theme::{should_use_colors, CheckTheme};

use crate::runner::{CheckOutcome, Failure, RunSummary};

/// Receives the progress of a run.
///
/// The runner calls `run_started` once, `check_finished` once per
/// registered check in registration order, `failures` only if something
/// failed, and `summary` last.
pub trait Reporter {
    /// A run over `total` checks is starting in `context`.
    fn run_started(&mut self, context: &str, total: usize);

    /// A check reached its final state.
    fn check_finished(&mut self, outcome: &CheckOutcome);

    /// The failed checks, in occurrence order.
    fn failures(&mut self, failures: &[Failure<'_>]);

    /// Final counts and duration.
    fn summary(&mut self, summary: &RunSummary);
}
