//! Sweep angle state machine
//!
//! The actuator walks from 0 to 180 degrees and back, one step per tick.
//! All direction handling lives here; the rest of the system only ever
//! sees the clamped angle.

use crate::config::{SweepConfig, SWEEP_ARC_DEG};

/// Travel direction of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepDirection {
    /// Angle grows toward 180
    Increasing,
    /// Angle shrinks toward 0
    Decreasing,
}

impl SweepDirection {
    /// The opposite travel direction
    pub fn reversed(self) -> Self {
        match self {
            SweepDirection::Increasing => SweepDirection::Decreasing,
            SweepDirection::Decreasing => SweepDirection::Increasing,
        }
    }
}

/// Current sweep position and direction
///
/// Invariant: `angle` is always within `0..=180`. A step that would cross a
/// bound lands exactly on the bound and reverses the direction there, so
/// the commanded angle never overshoots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepState {
    angle: u8,
    direction: SweepDirection,
    step: u8,
}

impl SweepState {
    /// Fresh run: angle 0, moving up
    pub fn new(config: SweepConfig) -> Self {
        Self {
            angle: 0,
            direction: SweepDirection::Increasing,
            // A zero step would pin the sweep at 0 forever
            step: config.step_deg.max(1),
        }
    }

    /// Current angle in degrees
    pub fn angle(&self) -> u8 {
        self.angle
    }

    /// Current travel direction
    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Advance one tick and return the new angle
    ///
    /// Reaching either bound (including landing exactly on it) clamps the
    /// angle to the bound and reverses direction for the next tick.
    pub fn advance(&mut self) -> u8 {
        let step = i16::from(self.step);
        let next = match self.direction {
            SweepDirection::Increasing => i16::from(self.angle) + step,
            SweepDirection::Decreasing => i16::from(self.angle) - step,
        };

        if next >= i16::from(SWEEP_ARC_DEG) {
            self.angle = SWEEP_ARC_DEG;
            self.direction = SweepDirection::Decreasing;
        } else if next <= 0 {
            self.angle = 0;
            self.direction = SweepDirection::Increasing;
        } else {
            self.angle = next as u8;
        }

        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state_at(angle: u8, direction: SweepDirection, step: u8) -> SweepState {
        SweepState {
            angle,
            direction,
            step,
        }
    }

    #[test]
    fn test_fresh_state_starts_at_origin() {
        let state = SweepState::new(SweepConfig::default());
        assert_eq!(state.angle(), 0);
        assert_eq!(state.direction(), SweepDirection::Increasing);
    }

    #[test]
    fn test_advance_steps_upward() {
        let mut state = SweepState::new(SweepConfig::default());
        assert_eq!(state.advance(), 2);
        assert_eq!(state.advance(), 4);
        assert_eq!(state.advance(), 6);
        assert_eq!(state.direction(), SweepDirection::Increasing);
    }

    #[test]
    fn test_overshoot_clamps_to_top_and_reverses() {
        // 179 + 2 would be 181; must land on 180 and turn around
        let mut state = state_at(179, SweepDirection::Increasing, 2);
        assert_eq!(state.advance(), 180);
        assert_eq!(state.direction(), SweepDirection::Decreasing);
        assert_eq!(state.advance(), 178);
    }

    #[test]
    fn test_exact_landing_on_top_reverses() {
        let mut state = state_at(178, SweepDirection::Increasing, 2);
        assert_eq!(state.advance(), 180);
        assert_eq!(state.direction(), SweepDirection::Decreasing);
    }

    #[test]
    fn test_bottom_bound_clamps_and_reverses() {
        let mut state = state_at(1, SweepDirection::Decreasing, 2);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.direction(), SweepDirection::Increasing);
        assert_eq!(state.advance(), 2);
    }

    #[test]
    fn test_exact_landing_on_bottom_reverses() {
        let mut state = state_at(2, SweepDirection::Decreasing, 2);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.direction(), SweepDirection::Increasing);
    }

    #[test]
    fn test_full_pass_takes_ninety_ticks_at_default_step() {
        let mut state = SweepState::new(SweepConfig::default());
        for _ in 0..89 {
            state.advance();
        }
        assert_eq!(state.angle(), 178);
        assert_eq!(state.direction(), SweepDirection::Increasing);

        // Tick 90 lands on the bound and turns around
        assert_eq!(state.advance(), 180);
        assert_eq!(state.direction(), SweepDirection::Decreasing);
    }

    #[test]
    fn test_large_step_bounces_between_bounds() {
        let mut state = state_at(0, SweepDirection::Increasing, 180);
        assert_eq!(state.advance(), 180);
        assert_eq!(state.advance(), 0);
        assert_eq!(state.advance(), 180);
    }

    #[test]
    fn test_zero_step_config_is_bumped_to_one() {
        let mut state = SweepState::new(SweepConfig { step_deg: 0 });
        assert_eq!(state.advance(), 1);
    }

    proptest! {
        /// The angle must stay within the arc no matter how far we run.
        #[test]
        fn angle_never_leaves_arc(step in 1u8..=180, ticks in 0usize..1000) {
            let mut state = SweepState::new(SweepConfig { step_deg: step });
            for _ in 0..ticks {
                let angle = state.advance();
                prop_assert!(angle <= SWEEP_ARC_DEG);
                prop_assert_eq!(angle, state.angle());
            }
        }

        /// Direction only changes on a tick that lands on a bound.
        #[test]
        fn direction_flips_only_at_bounds(step in 1u8..=180, ticks in 1usize..500) {
            let mut state = SweepState::new(SweepConfig { step_deg: step });
            let mut previous = state.direction();
            for _ in 0..ticks {
                let angle = state.advance();
                if state.direction() != previous {
                    prop_assert!(angle == 0 || angle == SWEEP_ARC_DEG);
                }
                previous = state.direction();
            }
        }
    }
}
