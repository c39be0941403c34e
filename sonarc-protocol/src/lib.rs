//! Sonarc host link protocol
//!
//! This crate defines the UART-based protocol between the scanner firmware
//! and a host renderer. The scanner streams one frame per sweep step and
//! accepts a small set of control commands in return.
//!
//! # Wire format
//!
//! Every message rides the same frame layout:
//!
//! ```text
//! START (1)  LENGTH (2, LE)  TYPE (1)  PAYLOAD (LENGTH bytes)  CHECKSUM (1)
//! ```
//!
//! The length field is two bytes because a sweep frame payload carries the
//! full target picture and can run past 255 bytes when the tracker is near
//! capacity. Sweep frame payloads are postcard-encoded `SweepFrame` values
//! from `sonarc-core`; control commands carry no payload at all.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{decode_sweep_frame, HostCommand, ScannerMessage};
