//! Run configuration for the simulate command.
//!
//! This module defines a thin, `serde`-deserializable description of one
//! integrator run:
//!
//! - [`SimulateConfig`] – initial conditions, step size, iteration count,
//!   output path, visualise flag, integrator binary
//! - named defaults matching the integrator's own documentation
//! - construction-time validation (no launch happens on a bad config)
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! initial_conditions: [0.0, 0.0, 1.2, 0.6]   # p1, p2, theta1, theta2
//! step_size: 0.01                            # integrator step, seconds
//! iterations: 500                            # integrator steps to run
//! file_path: "swing.csv"                     # where records land
//! visualise: true                            # open the viewer afterwards
//! ```
//!
//! Omitted fields take the defaults below; `integrator` may be set to point
//! at a non-default binary.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::SimError;

/// Default integrator step size, in seconds
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Default number of integrator iterations
pub const DEFAULT_ITERATIONS: u32 = 100;

/// Default output file the integrator writes records to
pub const DEFAULT_FILE_PATH: &str = "results.csv";

/// Default integrator binary, resolved relative to the working directory
pub const DEFAULT_INTEGRATOR: &str = "./main";

/// Parameters for one integrator run
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulateConfig {
    pub initial_conditions: [f64; 4], // p1, p2, theta1, theta2 at t = 0
    pub step_size: f64,               // integrator step size, seconds
    pub iterations: u32,              // number of integrator steps
    pub file_path: PathBuf,           // output file, overwritten if present
    pub visualise: bool,              // feed the output through the viewer afterwards
    pub integrator: PathBuf,          // integrator binary to launch
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            initial_conditions: [0.0; 4],
            step_size: DEFAULT_STEP_SIZE,
            iterations: DEFAULT_ITERATIONS,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            visualise: false,
            integrator: PathBuf::from(DEFAULT_INTEGRATOR),
        }
    }
}

impl SimulateConfig {
    /// Check the run parameters; cheap and side-effect free
    ///
    /// The step size must be a positive real and the iteration count
    /// positive. Initial conditions need no check here: the typed
    /// `[f64; 4]` can only be built from exactly four components
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(SimError::Parameter(format!(
                "step size must be a positive real, got {}",
                self.step_size
            )));
        }
        if self.iterations == 0 {
            return Err(SimError::Parameter(
                "iteration count must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split a space-separated initial-conditions string into its four components
///
/// The integrator takes `p1 p2 theta1 theta2` at `t = 0`. Anything other
/// than exactly four reals is rejected here, before any launch
pub fn parse_initial_conditions(raw: &str) -> Result<[f64; 4], SimError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(SimError::InitialConditions { count: parts.len() });
    }

    let mut values = [0.0_f64; 4];
    for (index, part) in parts.iter().enumerate() {
        values[index] = part.parse().map_err(|_| SimError::InitialConditionFormat {
            index,
            value: (*part).to_string(),
        })?;
    }
    Ok(values)
}
