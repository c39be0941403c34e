//! Seams between the scan logic and the hardware drivers
//!
//! The engine is generic over these two traits; drivers implement them
//! against real pins, tests against scripted doubles.

pub mod actuator;
pub mod ranging;

pub use actuator::SweepActuator;
pub use ranging::{DistanceReading, RangeSensor};
