//! Range sensor trait and reading type

use crate::config::MAX_RANGE_X10;

/// One range sample in tenths of a centimetre
///
/// Produced fresh by each [`RangeSensor::ping`] and consumed the same
/// tick. A value equal to [`MAX_RANGE_X10`] is the sentinel for "no echo /
/// out of range"; genuine measurements are strictly below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceReading {
    /// Tenths of a centimetre, clamped to the ranging ceiling
    pub distance_x10: u16,
}

impl DistanceReading {
    /// Build a reading, clamping into `0..=MAX_RANGE_X10`
    pub fn from_x10(distance_x10: u16) -> Self {
        Self {
            distance_x10: distance_x10.min(MAX_RANGE_X10),
        }
    }

    /// The "no echo" sentinel
    pub fn out_of_range() -> Self {
        Self {
            distance_x10: MAX_RANGE_X10,
        }
    }

    /// True for a genuine in-range echo, false for the sentinel
    pub fn is_detection(&self) -> bool {
        self.distance_x10 < MAX_RANGE_X10
    }
}

/// Trait for time-of-flight range sensors
pub trait RangeSensor {
    /// Take one measurement
    ///
    /// Blocks for the sensor's trigger settle plus up to its echo timeout
    /// per pulse edge. A timeout is not an error; it comes back as the
    /// sentinel reading, and the next tick's ping is the implicit retry.
    fn ping(&mut self) -> DistanceReading;

    /// Quiesce the sensor I/O (trigger line low)
    ///
    /// Called on shutdown. Must be safe to call more than once.
    fn release(&mut self);
}
