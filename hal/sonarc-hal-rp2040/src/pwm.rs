//! Servo PWM output on an RP2040 hardware PWM slice
//!
//! The servo wants a 50 Hz control signal whose pulse width encodes the
//! angle. With the 125 MHz system clock divided down to 1 MHz and a top
//! value of 20 000 the counter wraps every 20 ms and one count equals one
//! microsecond of pulse width.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use fixed::types::U12F4;

use sonarc_hal::PwmOut;

/// RP2040 boot-default system clock
pub const SYS_CLK_HZ: u32 = 125_000_000;

/// PWM clock divider: 125 MHz / 125 = 1 MHz counter tick
pub const SERVO_PWM_DIVIDER: u16 = 125;

/// PWM wrap value: 1 MHz / 20 000 = 50 Hz carrier
pub const SERVO_PWM_TOP: u16 = 20_000;

/// Compare value for a duty in hundredths of a percent
///
/// `10_000` (100%) maps to the full wrap value, so with the servo top of
/// 20 000 each duty step is exactly 2 counts (2 µs of pulse width).
pub fn compare_for_duty(duty_x100: u16, top: u16) -> u16 {
    let duty = u32::from(duty_x100.min(10_000));
    (duty * u32::from(top) / 10_000) as u16
}

/// Servo control output on PWM channel A
///
/// Owns the slice and its configuration; duty updates rewrite the compare
/// value and push the whole config, the same way the counter was set up.
pub struct ServoPwm<'d> {
    pwm: Pwm<'d>,
    config: PwmConfig,
}

impl<'d> ServoPwm<'d> {
    /// Configure a PWM slice for 50 Hz servo output
    ///
    /// The slice starts disabled with zero duty, which keeps the control
    /// line low until the first angle command.
    pub fn new(mut pwm: Pwm<'d>) -> Self {
        let mut config = PwmConfig::default();
        config.divider = U12F4::from_num(SERVO_PWM_DIVIDER);
        config.top = SERVO_PWM_TOP;
        config.compare_a = 0;
        config.enable = false;
        pwm.set_config(&config);

        Self { pwm, config }
    }
}

impl PwmOut for ServoPwm<'_> {
    fn set_duty_x100(&mut self, duty_x100: u16) {
        self.config.compare_a = compare_for_duty(duty_x100, SERVO_PWM_TOP);
        self.config.enable = true;
        self.pwm.set_config(&self.config);
    }

    fn disable(&mut self) {
        // Compare of zero keeps the line low even with the counter frozen
        self.config.compare_a = 0;
        self.config.enable = false;
        self.pwm.set_config(&self.config);
    }

    fn is_enabled(&self) -> bool {
        self.config.enable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_for_duty() {
        // At the servo top, one duty step is two counts
        assert_eq!(compare_for_duty(0, SERVO_PWM_TOP), 0);
        assert_eq!(compare_for_duty(250, SERVO_PWM_TOP), 500); // 2.5% = 0.5 ms
        assert_eq!(compare_for_duty(750, SERVO_PWM_TOP), 1500); // 7.5% = 1.5 ms
        assert_eq!(compare_for_duty(1250, SERVO_PWM_TOP), 2500); // 12.5% = 2.5 ms
        assert_eq!(compare_for_duty(10_000, SERVO_PWM_TOP), 20_000);
    }

    #[test]
    fn test_compare_clamps_past_full_scale() {
        assert_eq!(compare_for_duty(20_000, SERVO_PWM_TOP), 20_000);
    }
}
