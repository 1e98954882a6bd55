//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Run conformity checks on the current Rust project.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "conformity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use verbose output (show tool versions)
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip running cargo fmt
    #[arg(long, visible_alias = "skip-fmt")]
    pub skip_rustfmt: bool,

    /// Skip running typos
    #[arg(long)]
    pub skip_typos: bool,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Path to config file (overrides <project>/.conformity.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
