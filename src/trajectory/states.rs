//! Core state types for a recorded double-pendulum run
//!
//! Defines the generalized-coordinate record the integrator emits once per
//! time step and the trajectory built from one run:
//! - `Record`     – one sampled instant `(p1, p2, theta1, theta2)`
//! - `Trajectory` – the ordered record sequence for a whole run
//!
//! Insertion order is chronological order; frame `i` of playback is record `i`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// One sampled instant of generalized coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub p1: f64,     // generalized momentum, upper bulb
    pub p2: f64,     // generalized momentum, lower bulb
    pub theta1: f64, // upper rod angle, radians from straight down
    pub theta2: f64, // lower rod angle, radians from straight down
}

/// Ordered sequence of records for one simulation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub records: Vec<Record>, // chronological, indexed by frame number from 0
}

impl Trajectory {
    /// Number of sampled instants in the run
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
