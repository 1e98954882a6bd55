//! Check evaluation and result aggregation.

pub mod check;
pub mod engine;
pub mod status;

pub use check::{Check, CheckError, CheckId, CheckResult};
pub use engine::{RunOptions, Runner};
pub use status::{CheckOutcome, CheckStatus, Failure, RunReport, RunSummary};
