//! The firmware's task set
//!
//! Each task owns one concern and communicates through the statics in
//! [`crate::channels`]:
//! - `tick`: paces the scan loop
//! - `scan`: drives the sweep engine and produces frames
//! - `link_rx`: parses host commands from the UART
//! - `link_tx`: streams frames and pong replies to the host

pub mod link_rx;
pub mod link_tx;
pub mod scan;
pub mod tick;

pub use link_rx::link_rx_task;
pub use link_tx::link_tx_task;
pub use scan::scan_task;
pub use tick::tick_task;
