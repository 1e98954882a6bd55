//! Command-line interface.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command: configuration, registration, run

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};
