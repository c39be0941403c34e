//! Static channels and signals wiring the tasks together
//!
//! Frames flow scan -> TX through a small channel; run control and
//! heartbeats ride latest-value signals, where a stale value is worthless.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use sonarc_core::frame::SweepFrame;
use sonarc_protocol::HostCommand;

/// Channel capacity for outgoing sweep frames
///
/// Two frames cover the TX task mid-write. The scan task drops frames
/// rather than stalling the sweep when the link cannot keep up.
const FRAME_CHANNEL_SIZE: usize = 2;

/// Completed sweep frames on their way to the host
pub static FRAME_CHANNEL: Channel<CriticalSectionRawMutex, SweepFrame, FRAME_CHANNEL_SIZE> =
    Channel::new();

/// Latest run control command from the host (START/STOP)
pub static SCAN_COMMAND: Signal<CriticalSectionRawMutex, HostCommand> = Signal::new();

/// Signal that a heartbeat (PING) was received from the host
pub static PING_RECEIVED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
