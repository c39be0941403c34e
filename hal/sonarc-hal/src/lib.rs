//! Sonarc Hardware Abstraction Layer
//!
//! This crate defines the hardware capability traits the scanner core and
//! drivers are written against. A chip-specific port implements them, which
//! keeps the sweep/ranging logic testable on the host with plain mocks.
//!
//! # Layering
//!
//! ```text
//! sonarc-firmware         binds pins and spawns tasks
//!        |
//! sonarc-hal              capability traits (this crate)
//!        |
//! sonarc-hal-rp2040       embassy-rp implementations
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - digital I/O (trigger/echo lines)
//! - [`pwm::PwmOut`] - duty-cycle output (servo control signal)
//! - [`time::Clock`] - monotonic microsecond time (echo pulse timing)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pwm;
pub mod time;

// Flat re-exports so ports and drivers import one path
pub use gpio::{InputPin, OutputPin};
pub use pwm::PwmOut;
pub use time::Clock;
