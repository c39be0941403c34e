//! Sweep and tracker tuning
//!
//! Scan behavior constants and the structs that carry overrides. Defaults
//! mirror the classic SG90 + HC-SR04 pairing; a board with different parts
//! adjusts the structs, not the code.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full travel of the sweep in degrees
pub const SWEEP_ARC_DEG: u8 = 180;

/// Degrees the sweep moves per tick
pub const SWEEP_STEP_DEG: u8 = 2;

/// Ranging ceiling in tenths of a centimetre (50.0 cm)
///
/// Doubles as the sentinel: a reading equal to this value means
/// "no echo / out of range", not a measurement at exactly the ceiling.
pub const MAX_RANGE_X10: u16 = 500;

/// How long a detection stays tracked, in microseconds (1.5 s)
pub const TARGET_TTL_US: u64 = 1_500_000;

/// Fade ordinals a target passes through while it ages
///
/// A fresh target renders at level 0 and saturates at `FADE_STEPS - 1`.
pub const FADE_STEPS: u8 = 3;

/// Maximum targets retained at once
///
/// Plenty for real tick rates within the TTL window; when a burst of
/// detections would overflow it, the tracker evicts the oldest record.
pub const MAX_TARGETS: usize = 128;

/// Sweep motion configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepConfig {
    /// Degrees advanced per tick (1..=180)
    pub step_deg: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            step_deg: SWEEP_STEP_DEG,
        }
    }
}

/// Target lifecycle configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerConfig {
    /// Readings at or above this are treated as "no detection"
    pub max_range_x10: u16,
    /// Age past which a target is dropped, in microseconds
    pub ttl_us: u64,
    /// Number of fade ordinals (targets saturate at `fade_steps - 1`)
    pub fade_steps: u8,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_range_x10: MAX_RANGE_X10,
            ttl_us: TARGET_TTL_US,
            fade_steps: FADE_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let sweep = SweepConfig::default();
        assert_eq!(sweep.step_deg, SWEEP_STEP_DEG);

        let tracker = TrackerConfig::default();
        assert_eq!(tracker.max_range_x10, MAX_RANGE_X10);
        assert_eq!(tracker.ttl_us, TARGET_TTL_US);
        assert_eq!(tracker.fade_steps, FADE_STEPS);
    }
}
