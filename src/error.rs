//! Crate-level error type and `Result` alias.
//! Covers destination/parameter validation, failures of the external upscaler
//! process, and the I/O and config errors raised by the batch and config layers.
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Destination must be a .png file: {path:?}")]
    InvalidDestinationFormat { path: PathBuf },

    #[error("Invalid parameter: {field}={value} (scale, width and height cannot be negative)")]
    InvalidParameters { field: &'static str, value: i64 },

    #[error("Conflicting parameters: {reason}")]
    ConflictingParameters { reason: String },

    #[error("Upscaler execution failed: {0}")]
    ExecutionFailed(#[from] ExecutionError),

    #[error("Upscaler reported success but output is missing: {path:?}: {source}")]
    OutputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why the external upscaler did not complete successfully
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("could not start {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{status}{}", stderr_suffix(.stderr))]
    Exit { status: ExitStatus, stderr: String },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

impl Error {
    pub fn conflicting<S: Into<String>>(reason: S) -> Self {
        Error::ConflictingParameters {
            reason: reason.into(),
        }
    }
}
