//! Ultrasonic ranging drivers

pub mod hcsr04;

pub use hcsr04::{echo_to_distance_x10, Hcsr04, SonarConfig};
