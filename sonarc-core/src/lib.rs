//! Board-agnostic core logic for the sweep scanner firmware
//!
//! Everything here runs identically on the target and in host tests; the
//! hardware enters only through the traits:
//!
//! - Traits for the sweep actuator and range sensor
//! - Sweep angle state machine (bounce between 0 and 180 degrees)
//! - Target tracking (creation, fade, expiry)
//! - Per-tick frame records for the external renderer
//! - The engine that sequences one scan tick
//! - Tunable sweep and tracker parameters

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod frame;
pub mod sweep;
pub mod track;
pub mod traits;
