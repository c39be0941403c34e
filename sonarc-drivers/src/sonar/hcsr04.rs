//! HC-SR04 ultrasonic ranger driver
//!
//! Measurement cycle: hold the trigger low to settle, fire a 10 µs
//! trigger pulse, then time the echo line's high interval. The sensor
//! encodes round-trip time of flight as that pulse width; at roughly
//! 343 m/s in air, 58 µs of echo is one centimetre of range.
//!
//! Both edge waits are bounded polls against the monotonic clock. A
//! missing edge (sensor unplugged, target beyond range) is not an error;
//! it becomes the out-of-range sentinel and the next ping starts clean.

use embedded_hal::delay::DelayNs;

use sonarc_core::config::MAX_RANGE_X10;
use sonarc_core::traits::ranging::{DistanceReading, RangeSensor};
use sonarc_hal::{Clock, InputPin, OutputPin};

/// Ranger timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SonarConfig {
    /// Trigger-low settle before each pulse, milliseconds
    pub trigger_settle_ms: u32,
    /// Trigger pulse width, microseconds
    pub trigger_pulse_us: u32,
    /// Bound on each echo edge wait, microseconds
    pub echo_timeout_us: u64,
}

impl Default for SonarConfig {
    fn default() -> Self {
        Self {
            trigger_settle_ms: 10,
            trigger_pulse_us: 10,
            echo_timeout_us: 100_000,
        }
    }
}

/// Convert an echo pulse width to tenths of a centimetre
///
/// `distance_cm = echo_s * 34300 / 2`, carried in integer tenths with
/// round-to-nearest and clamped to the ranging ceiling.
pub fn echo_to_distance_x10(echo_us: u32) -> u16 {
    let x10 = (u64::from(echo_us) * 343 + 1_000) / 2_000;
    x10.min(u64::from(MAX_RANGE_X10)) as u16
}

/// HC-SR04 on a trigger/echo pin pair
pub struct Hcsr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    trigger: T,
    echo: E,
    clock: C,
    delay: D,
    config: SonarConfig,
}

impl<T, E, C, D> Hcsr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    pub fn new(trigger: T, echo: E, clock: C, delay: D, config: SonarConfig) -> Self {
        Self {
            trigger,
            echo,
            clock,
            delay,
            config,
        }
    }

    /// Poll until the echo line reads `level`
    ///
    /// Returns the timestamp the level was first seen, or `None` once the
    /// edge timeout elapses. Each edge gets a fresh timeout window.
    fn wait_for_level(&mut self, level: bool) -> Option<u64> {
        let start = self.clock.now_micros();
        loop {
            if self.echo.is_high() == level {
                return Some(self.clock.now_micros());
            }
            if self.clock.micros_since(start) > self.config.echo_timeout_us {
                return None;
            }
        }
    }
}

impl<T, E, C, D> RangeSensor for Hcsr04<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: Clock,
    D: DelayNs,
{
    fn ping(&mut self) -> DistanceReading {
        // Settle with the trigger low, then fire the pulse that starts a
        // measurement cycle
        self.trigger.set_low();
        self.delay.delay_ms(self.config.trigger_settle_ms);
        self.trigger.set_high();
        self.delay.delay_us(self.config.trigger_pulse_us);
        self.trigger.set_low();

        let rise = match self.wait_for_level(true) {
            Some(t) => t,
            None => return DistanceReading::out_of_range(),
        };
        let fall = match self.wait_for_level(false) {
            Some(t) => t,
            None => return DistanceReading::out_of_range(),
        };

        let echo_us = fall.saturating_sub(rise).min(u64::from(u32::MAX)) as u32;
        DistanceReading::from_x10(echo_to_distance_x10(echo_us))
    }

    fn release(&mut self) {
        self.trigger.set_low();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Simulated timeline shared by the clock, pins and delay doubles
    ///
    /// Reading the clock through the trait advances time by one poll step,
    /// which is what makes the driver's busy-wait loops terminate.
    struct SimTime {
        now_us: Cell<u64>,
        poll_step_us: u64,
    }

    impl SimTime {
        fn new(poll_step_us: u64) -> Self {
            Self {
                now_us: Cell::new(0),
                poll_step_us,
            }
        }

        fn peek(&self) -> u64 {
            self.now_us.get()
        }

        fn advance(&self, us: u64) {
            self.now_us.set(self.now_us.get() + us);
        }
    }

    impl Clock for SimTime {
        fn now_micros(&self) -> u64 {
            let t = self.now_us.get();
            self.now_us.set(t + self.poll_step_us);
            t
        }
    }

    /// Output pin double recording trigger activity
    #[derive(Debug, Default)]
    struct SimTrigger {
        high: bool,
        pulses: usize,
    }

    impl OutputPin for SimTrigger {
        fn set_high(&mut self) {
            self.high = true;
            self.pulses += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Echo line that goes high for a scripted window of the timeline
    struct SimEcho<'a> {
        time: &'a SimTime,
        rise_at: u64,
        fall_at: u64,
    }

    impl InputPin for SimEcho<'_> {
        fn is_high(&self) -> bool {
            let now = self.time.peek();
            now >= self.rise_at && now < self.fall_at
        }
    }

    /// Delay double that moves the shared timeline forward
    struct SimDelay<'a>(&'a SimTime);

    impl DelayNs for SimDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.0.advance(u64::from(ns) / 1_000);
        }
    }

    fn ranger<'a>(
        time: &'a SimTime,
        rise_at: u64,
        fall_at: u64,
    ) -> Hcsr04<SimTrigger, SimEcho<'a>, &'a SimTime, SimDelay<'a>> {
        Hcsr04::new(
            SimTrigger::default(),
            SimEcho {
                time,
                rise_at,
                fall_at,
            },
            time,
            SimDelay(time),
            SonarConfig::default(),
        )
    }

    #[test]
    fn test_conversion_examples() {
        // 1749 us round trip is 30.0 cm
        assert_eq!(echo_to_distance_x10(1_749), 300);
        // 583 us is 10.0 cm
        assert_eq!(echo_to_distance_x10(583), 100);
        // Nothing comes back instantly
        assert_eq!(echo_to_distance_x10(0), 0);
    }

    #[test]
    fn test_conversion_rounds_to_nearest_tenth() {
        // 32 us * 343 / 2000 = 5.488 -> 5
        assert_eq!(echo_to_distance_x10(32), 5);
        // 33 us -> 5.6595 -> 6
        assert_eq!(echo_to_distance_x10(33), 6);
    }

    #[test]
    fn test_conversion_clamps_to_ceiling() {
        // 2915 us is right at 50.0 cm; everything longer clamps
        assert_eq!(echo_to_distance_x10(2_915), MAX_RANGE_X10);
        assert_eq!(echo_to_distance_x10(10_000), MAX_RANGE_X10);
        assert_eq!(echo_to_distance_x10(u32::MAX), MAX_RANGE_X10);
    }

    #[test]
    fn test_ping_times_an_echo_window() {
        let time = SimTime::new(5);
        // Trigger sequence consumes 10 ms settle + 10 us pulse, so the
        // echo window sits shortly after 10_010 us
        let mut ranger = ranger(&time, 10_100, 10_100 + 1_749);
        assert!(ranger.echo.is_low());

        let reading = ranger.ping();
        // Within one poll step of the scripted 30.0 cm
        assert!(
            (299..=301).contains(&reading.distance_x10),
            "got {}",
            reading.distance_x10
        );
        assert!(reading.is_detection());
    }

    #[test]
    fn test_ping_leaves_trigger_low() {
        let time = SimTime::new(5);
        let mut ranger = ranger(&time, 10_100, 10_700);

        ranger.ping();
        assert!(!ranger.trigger.high);
        assert_eq!(ranger.trigger.pulses, 1);
    }

    #[test]
    fn test_missing_rise_yields_exact_sentinel() {
        let time = SimTime::new(5);
        // Echo never goes high
        let mut ranger = ranger(&time, u64::MAX, u64::MAX);

        let reading = ranger.ping();
        assert_eq!(reading, DistanceReading::out_of_range());
        assert_eq!(reading.distance_x10, MAX_RANGE_X10);
    }

    #[test]
    fn test_missing_fall_yields_exact_sentinel() {
        let time = SimTime::new(5);
        // Echo rises but never falls (stuck line)
        let mut ranger = ranger(&time, 10_100, u64::MAX);

        let reading = ranger.ping();
        assert_eq!(reading, DistanceReading::out_of_range());
    }

    #[test]
    fn test_release_drives_trigger_low() {
        let time = SimTime::new(5);
        let mut ranger = ranger(&time, u64::MAX, u64::MAX);

        ranger.trigger.set_high();
        ranger.release();
        assert!(ranger.trigger.is_set_low());

        // Safe to release twice
        ranger.release();
        assert!(ranger.trigger.is_set_low());
    }
}
