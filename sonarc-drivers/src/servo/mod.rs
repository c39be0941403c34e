//! Sweep servo drivers

pub mod sg90;

pub use sg90::{duty_for_angle, ServoConfig, Sg90};
