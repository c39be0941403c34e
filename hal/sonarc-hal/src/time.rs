//! Monotonic time abstraction
//!
//! The ranger measures echo pulse width by timestamping line transitions,
//! so it needs a clock with microsecond resolution that never goes
//! backwards. Ports back this with a hardware timer.

/// Monotonic microsecond clock
pub trait Clock {
    /// Current time in microseconds since an arbitrary epoch
    ///
    /// Must be monotonic; the epoch only has to stay fixed for the lifetime
    /// of the run.
    fn now_micros(&self) -> u64;

    /// Microseconds elapsed since an earlier reading of this clock
    fn micros_since(&self, earlier: u64) -> u64 {
        self.now_micros().saturating_sub(earlier)
    }
}

// Shared references work as clocks too, so a single time source can back
// several components in tests.
impl<T: Clock + ?Sized> Clock for &T {
    fn now_micros(&self) -> u64 {
        (**self).now_micros()
    }
}
