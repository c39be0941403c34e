//! Hardware driver implementations for the Sonarc scanner
//!
//! Drivers are generic over the `sonarc-hal` capability traits plus the
//! ecosystem blocking delay (`embedded_hal::delay::DelayNs`), so the same
//! code runs against embassy-rp wrappers on the board and against plain
//! mocks in host tests. Each driver implements the matching `sonarc-core`
//! trait; the engine never sees a concrete part.

#![no_std]
#![deny(unsafe_code)]

pub mod servo;
pub mod sonar;
