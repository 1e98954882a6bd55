//! Error types for conformity operations.
//!
//! This module defines [`ConformityError`], the error type for problems in
//! the environment the checks run in (unreadable configuration, an
//! unreadable manifest, a tool that could not be spawned), and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A check that finds a violation reports it through
//!   [`CheckError`](crate::runner::CheckError), never through this type
//! - `ConformityError` aborts the run before it starts, or is converted into
//!   a `CheckError` at the check boundary
//! - Unexpected failures carry `anyhow` context (via `ConformityError::Other`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for conformity operations.
#[derive(Debug, Error)]
pub enum ConformityError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A manifest exists but could not be read.
    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource manifest does not have the expected structure.
    #[error("Failed to parse resource manifest {path}: {message}")]
    ResourceManifestParse { path: PathBuf, message: String },

    /// External command failed or could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Unexpected failure, with the context it happened in.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for conformity operations.
pub type Result<T> = std::result::Result<T, ConformityError>;
