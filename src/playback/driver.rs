//! Frame-by-frame playback of a transformed position series
//!
//! `Playback` is the state machine that walks a [`PositionSeries`] one
//! frame per tick and hands each frame to a [`FrameSink`]. Frames are
//! never skipped, coalesced, or replayed out of order; once the sequence
//! is exhausted the machine parks in `Done` and the last rendered frame
//! stays put
//!
//! The host event loop owns the tick cadence (one call to [`Playback::tick`]
//! per timer tick); the machine itself has no notion of wall-clock time
//! beyond `frame * dt` for the label

use bevy::prelude::Resource;

use crate::trajectory::kinematics::PositionSeries;
use crate::trajectory::states::NVec2;

/// Fixed wall-clock interval between rendered frames, in seconds
///
/// Playback always runs at this rate. It is independent of the step size
/// the trajectory was generated with: a run sampled at 0.01s still
/// animates at 0.04s per frame
pub const PLAYBACK_DT: f64 = 0.04;

/// Where the playback machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No armed sequence
    Idle,
    /// Advancing one frame per tick
    Playing,
    /// Sequence exhausted; terminal and idempotent
    Done,
}

/// Consumer of rendered frames
///
/// One frame is the three-point polyline `origin -> bulb1 -> bulb2` plus
/// an elapsed-time label. Implementations draw it, record it, or drop it;
/// the driver never looks back at what a sink did with a frame
pub trait FrameSink {
    fn render(&mut self, points: [NVec2; 3], label: &str);
}

/// Playback state machine over one position series
///
/// Owns the series for the lifetime of the run; inserted into the viewer
/// as a bevy `Resource` and ticked from there, or ticked directly by tests
#[derive(Resource)]
pub struct Playback {
    series: PositionSeries,
    dt: f64, // seconds of label time per frame
    phase: Phase,
    frame: usize, // index of the next frame to render while Playing
}

impl Playback {
    /// Wrap `series` for playback at `dt` seconds per frame; starts Idle
    pub fn new(series: PositionSeries, dt: f64) -> Self {
        Self {
            series,
            dt,
            phase: Phase::Idle,
            frame: 0,
        }
    }

    /// Arm the sequence from the top
    ///
    /// Returns `false` and stays Idle when fewer than two positions are
    /// available: an empty sequence is "nothing to animate", not an error.
    /// Otherwise enters Playing at frame 1: frame 0 is never rendered.
    /// Calling `start` again after Done replays from frame 1
    pub fn start(&mut self) -> bool {
        if self.series.len() < 2 {
            self.phase = Phase::Idle;
            return false;
        }
        self.frame = 1;
        self.phase = Phase::Playing;
        true
    }

    /// Advance by exactly one frame, rendering it into `sink`
    ///
    /// Ticks while Idle or Done render nothing. Rendering the final frame
    /// transitions to Done; the sink keeps whatever it drew last
    pub fn tick(&mut self, sink: &mut dyn FrameSink) {
        if self.phase != Phase::Playing {
            return;
        }

        let position = self.series[self.frame];
        let label = format!("time = {:.1}s", self.elapsed());
        sink.render([NVec2::zeros(), position.bulb1, position.bulb2], &label);

        if self.frame == self.series.len() - 1 {
            self.phase = Phase::Done;
        } else {
            self.frame += 1;
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Frame index the machine is parked on
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Label time for the current frame, `frame * dt` seconds
    pub fn elapsed(&self) -> f64 {
        self.frame as f64 * self.dt
    }

    /// Seconds of label time per frame
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of positions in the armed series
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
