//! RP2040-specific HAL for the sweep scanner firmware
//!
//! This crate provides RP2040 implementations of the shared `sonarc-hal`
//! traits on top of embassy-rp:
//!
//! - 50 Hz servo PWM output on a hardware PWM slice
//! - Trigger/echo GPIO wrappers for the ultrasonic ranger
//! - Microsecond uptime clock backed by the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pwm;

pub use clock::UptimeClock;
pub use gpio::{EchoPin, TriggerPin};
pub use pwm::ServoPwm;
