//! GPIO wrappers for the ultrasonic ranger pins
//!
//! Thin adapters from embassy-rp pins to the `sonarc-hal` pin traits. The
//! ranger driver polls these in a tight loop, so every call is a plain
//! register access.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;

use sonarc_hal::{InputPin, OutputPin};

/// Push-pull output for the ranger trigger line
pub struct TriggerPin<'d> {
    pin: Output<'d>,
}

impl<'d> TriggerPin<'d> {
    /// Take ownership of a pin and drive it low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for TriggerPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Input for the ranger echo line
///
/// Pulled down so the line reads low while the sensor is idle or unplugged.
pub struct EchoPin<'d> {
    pin: Input<'d>,
}

impl<'d> EchoPin<'d> {
    /// Take ownership of a pin and configure it as a pulled-down input
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Down),
        }
    }
}

impl InputPin for EchoPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
