//! Trigger and echo pin contracts
//!
//! Traits for the digital lines the ranger needs: an output to fire the
//! trigger pulse and an input to watch the echo pulse. Implementations
//! handle the register-level work for the specific chip.

/// Push-pull output line
///
/// Drives the sensor trigger. Implementations must complete the write
/// before returning so pulse timing done against [`crate::time::Clock`]
/// stays meaningful.
pub trait OutputPin {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Last level the driver commanded
    fn is_set_high(&self) -> bool;

    /// Inverse of [`OutputPin::is_set_high`]
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Polled digital input line
///
/// Reads the echo line. Reads must be cheap enough to poll in a tight loop;
/// edge timing resolution comes from the caller's clock, not the pin.
pub trait InputPin {
    /// Level on the line right now
    fn is_high(&self) -> bool;

    /// Inverse of [`InputPin::is_high`]
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
