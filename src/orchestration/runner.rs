//! Launching the external integrator and collecting its output
//!
//! The integrator is an opaque collaborator: it takes the run parameters
//! on its command line, writes comma-separated records to the output file,
//! and may chat on stderr. Anything on stderr is surfaced as a warning,
//! never as a failure by itself; a non-zero exit status ends the run

use std::process::Command;

use log::{debug, warn};

use crate::configuration::config::SimulateConfig;
use crate::error::SimError;

/// Outcome of one integrator invocation
#[derive(Debug)]
pub struct RunReport {
    /// Everything the integrator printed to stdout
    pub stdout: String,
    /// Non-empty stderr, already logged as a warning
    pub warning: Option<String>,
}

/// Launch the integrator described by `config` and wait for it to finish
///
/// Validates the config first; an invalid config means no process is ever
/// spawned. Blocks until the collaborator exits; there is no timeout, so a
/// hung integrator hangs the run
pub fn run_integrator(config: &SimulateConfig) -> Result<RunReport, SimError> {
    config.validate()?;

    let mut command = Command::new(&config.integrator);
    command
        .arg("--initial-conditions")
        .args(config.initial_conditions.iter().map(f64::to_string))
        .arg("--step-size")
        .arg(config.step_size.to_string())
        .arg("--iterations")
        .arg(config.iterations.to_string())
        .arg("--file-path")
        .arg(&config.file_path);

    debug!("launching integrator: {:?}", command);

    let output = command.output().map_err(|source| SimError::Spawn {
        path: config.integrator.clone(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let warning = match stderr.trim() {
        "" => None,
        chatter => {
            warn!("integrator wrote to stderr: {chatter}");
            Some(chatter.to_string())
        }
    };

    if !output.status.success() {
        return Err(SimError::Integrator {
            path: config.integrator.clone(),
            status: output.status,
        });
    }

    Ok(RunReport { stdout, warning })
}
