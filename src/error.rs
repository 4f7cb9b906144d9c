//! Error types for trajectory loading, run configuration, and integrator launches.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while loading records, validating a run, or
/// driving the external integrator.
///
/// Non-fatal conditions are deliberately absent: an empty sequence is a
/// `Playback::start()` returning `false`, and integrator stderr is a
/// warning on `RunReport`, not an error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A record field is not a valid decimal number.
    #[error("line {line}: field {field} is not a number: {value:?}")]
    Parse { line: u64, field: usize, value: String },

    /// A record does not hold exactly four fields.
    #[error("line {line}: expected 4 fields per record, found {count}")]
    Schema { line: u64, count: usize },

    /// Initial conditions must decompose into exactly four components.
    #[error("expected 4 initial-condition components, found {count}")]
    InitialConditions { count: usize },

    /// An initial-condition component failed to parse as a real.
    #[error("initial-condition component {index} is not a number: {value:?}")]
    InitialConditionFormat { index: usize, value: String },

    /// A run parameter failed validation.
    #[error("invalid run parameter: {0}")]
    Parameter(String),

    /// The integrator binary could not be launched.
    #[error("failed to launch integrator {}: {source}", .path.display())]
    Spawn { path: PathBuf, source: io::Error },

    /// The integrator terminated with a failure status.
    #[error("integrator {} exited with {status}", .path.display())]
    Integrator { path: PathBuf, status: ExitStatus },

    /// The record stream could not be read as CSV at all.
    #[error("malformed record stream: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}
