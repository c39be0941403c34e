//! Uptime clock backed by the embassy time driver

use embassy_time::Instant;

use sonarc_hal::Clock;

/// Monotonic microsecond clock
///
/// Reads the embassy time driver, which on RP2040 sits on the 1 MHz TIMER
/// peripheral, so `now_micros` has real microsecond resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct UptimeClock;

impl Clock for UptimeClock {
    fn now_micros(&self) -> u64 {
        Instant::now().as_micros()
    }
}
