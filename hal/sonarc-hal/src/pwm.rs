//! PWM output abstraction
//!
//! One duty-cycle output channel, enough to drive a hobby servo's control
//! line. The carrier frequency is fixed by the port at construction time
//! (50 Hz for the servo); only the duty moves at runtime.

/// Duty-cycle output channel
///
/// Duty is expressed in hundredths of a percent so a one-decimal duty like
/// 2.5% is exact: `250` = 2.5%, `10_000` = 100%.
pub trait PwmOut {
    /// Set the output duty in hundredths of a percent (0..=10_000)
    ///
    /// Re-enables the output if it was previously disabled.
    fn set_duty_x100(&mut self, duty_x100: u16);

    /// Stop driving the output; the line idles low
    ///
    /// Used to release the servo so it stops holding position (and stops
    /// drawing holding current). A later [`Self::set_duty_x100`] resumes.
    fn disable(&mut self);

    /// Check whether the output is currently being driven
    fn is_enabled(&self) -> bool;
}
