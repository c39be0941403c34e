//! Sweep actuator trait

/// Trait for the actuator that carries the sensor across the arc
///
/// Implementations own the control signal output (for a hobby servo, the
/// PWM channel). Methods block until their motion delay has elapsed; the
/// engine's tick sequencing relies on that.
pub trait SweepActuator {
    /// Command the actuator to an angle in degrees
    ///
    /// Out-of-range angles are clamped into `0..=180`, never rejected.
    /// Blocks for the actuator's settle delay before returning; this is
    /// the one intentional blocking point of the actuator side.
    fn point_to(&mut self, angle: u8);

    /// Drive the startup check pattern: mid, 0, mid, 180, mid
    ///
    /// Exercises the full travel once so a miswired or stuck actuator
    /// shows up before the sweep starts. Blocks for the pattern's pauses.
    fn calibrate(&mut self);

    /// Stop driving the control signal
    ///
    /// The actuator stops holding position and the line idles. Must be
    /// safe to call more than once; a later [`Self::point_to`] resumes
    /// control.
    fn release(&mut self);
}
