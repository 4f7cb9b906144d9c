//! Kinematics transform: generalized coordinates to Cartesian bulb positions
//!
//! Maps each record's angle pair onto the plane assuming unit rod lengths.
//! The upper bulb hangs off the origin, the lower bulb off the upper one:
//!
//! ```text
//! bulb1 = ( sin θ1, -cos θ1 )
//! bulb2 = bulb1 + ( sin θ2, -cos θ2 )
//! ```
//!
//! `θ1 = θ2 = 0` is the pendulum hanging straight down at `(0,-1)`/`(0,-2)`.
//! The transform is a pure projection, not a validator: it is defined for
//! every real input and NaN/infinite angles propagate into the output

use crate::trajectory::states::{NVec2, Record, Trajectory};

/// Cartesian positions of both pendulum bulbs at one sampled instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub bulb1: NVec2, // upper bulb, rod anchored at the origin
    pub bulb2: NVec2, // lower bulb, rod anchored at the upper bulb
}

/// Chronological bulb positions, one per trajectory record
pub type PositionSeries = Vec<Position>;

/// Project one record's angles onto the plane
pub fn project(record: &Record) -> Position {
    let bulb1 = NVec2::new(record.theta1.sin(), -record.theta1.cos());
    let bulb2 = bulb1 + NVec2::new(record.theta2.sin(), -record.theta2.cos());
    Position { bulb1, bulb2 }
}

/// Transform a whole trajectory into a [`PositionSeries`]
///
/// Total, order-preserving, and deterministic: position `i` derives from
/// record `i` alone, and repeated calls over the same trajectory produce
/// bit-identical output
pub fn transform(trajectory: &Trajectory) -> PositionSeries {
    trajectory.records.iter().map(project).collect()
}
