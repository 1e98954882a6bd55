//! Conformity - repository hygiene checks for Rust/GTK projects.
//!
//! Runs a fixed set of independent checks (code style, spelling,
//! translation manifest integrity, resource manifest ordering), reports
//! pass/fail/skip per check in the style of the Rust test harness, and
//! exits non-zero if any check failed.
//!
//! # Modules
//!
//! - [`checks`] - Concrete checks and the default registration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.conformity.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`runner`] - The check contract and the sequential runner
//! - [`shell`] - External tool invocation
//! - [`ui`] - Report rendering
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use conformity::runner::{Check, CheckError, CheckResult, CheckStatus, Runner};
//! use conformity::ui::MockReporter;
//!
//! struct AlwaysFails;
//!
//! impl Check for AlwaysFails {
//!     fn subject(&self) -> &str {
//!         "always fails"
//!     }
//!
//!     fn run(&self) -> CheckResult {
//!         Err(CheckError::failed("nope"))
//!     }
//! }
//!
//! let mut runner = Runner::new("example");
//! runner.add(Rc::new(AlwaysFails));
//!
//! let report = runner.run(&mut MockReporter::new());
//! assert!(!report.success());
//! assert!(matches!(report.outcomes[0].status, CheckStatus::Failed(_)));
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{ConformityError, Result};
