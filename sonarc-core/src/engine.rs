//! Scan engine
//!
//! Sequences one tick of the scanner: advance the sweep, point the
//! actuator, take a reading, update the tracker, emit the frame. The
//! engine owns the drivers and all mutable scan state; the host owns
//! pacing and supplies the clock reading.

use heapless::Vec;

use crate::config::{SweepConfig, TrackerConfig};
use crate::frame::{Blip, SweepFrame};
use crate::sweep::SweepState;
use crate::track::TargetTracker;
use crate::traits::{RangeSensor, SweepActuator};

/// Orchestrates the sweep/sense/track cycle
pub struct SweepEngine<A: SweepActuator, R: RangeSensor> {
    actuator: A,
    sensor: R,
    sweep: SweepState,
    sweep_config: SweepConfig,
    tracker: TargetTracker,
}

impl<A: SweepActuator, R: RangeSensor> SweepEngine<A, R> {
    /// Build an engine around its two drivers
    pub fn new(
        actuator: A,
        sensor: R,
        sweep_config: SweepConfig,
        tracker_config: TrackerConfig,
    ) -> Self {
        Self {
            actuator,
            sensor,
            sweep: SweepState::new(sweep_config),
            sweep_config,
            tracker: TargetTracker::new(tracker_config),
        }
    }

    /// Run the startup sequence
    ///
    /// Calibrates the actuator across its full travel and resets the scan
    /// state. A restart after [`SweepEngine::shutdown`] goes through here
    /// too, so a resumed run always begins at angle 0 with no stale
    /// targets.
    pub fn start(&mut self) {
        self.actuator.calibrate();
        self.sweep = SweepState::new(self.sweep_config);
        self.tracker.clear();
    }

    /// Run one scan tick at host time `now` (microseconds)
    ///
    /// Blocks for the actuator settle delay plus up to the sensor echo
    /// timeout. The returned frame is the renderer's complete view of the
    /// tick. `now` also timestamps any detection this tick makes.
    pub fn tick(&mut self, now: u64) -> SweepFrame {
        let angle = self.sweep.advance();
        self.actuator.point_to(angle);
        let reading = self.sensor.ping();

        self.tracker.observe(angle, reading, now);
        self.tracker.tick(now);

        let mut blips = Vec::new();
        for target in self.tracker.snapshot() {
            // Same capacity as the tracker, push cannot fail
            let _ = blips.push(Blip::from(target));
        }

        SweepFrame {
            angle,
            distance_x10: reading.distance_x10,
            blips,
        }
    }

    /// Release both drivers' I/O
    ///
    /// The actuator stops being driven and the sensor lines go quiescent.
    /// Must run on every exit path, including abnormal interruption; safe
    /// to call more than once.
    pub fn shutdown(&mut self) {
        self.actuator.release();
        self.sensor.release();
    }

    /// Current sweep position, for logging
    pub fn sweep(&self) -> &SweepState {
        &self.sweep
    }

    /// Live target count, for logging
    pub fn target_count(&self) -> usize {
        self.tracker.len()
    }
}
