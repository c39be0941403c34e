//! Message types for the host link
//!
//! Two directions, two vocabularies. The host sends run control and
//! heartbeat requests; the scanner answers with sweep frames and
//! heartbeat replies.

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use sonarc_core::frame::SweepFrame;

// Message type IDs: Host → Scanner
pub const MSG_START: u8 = 0x01;
pub const MSG_STOP: u8 = 0x02;
pub const MSG_PING: u8 = 0x03;

// Message type IDs: Scanner → Host
pub const MSG_PONG: u8 = 0x04;
pub const MSG_FRAME: u8 = 0x10;

/// Messages from the scanner to the host
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScannerMessage<'a> {
    /// One completed sweep step with the current target picture
    Frame(&'a SweepFrame),
    /// Heartbeat reply
    Pong,
}

impl<'a> ScannerMessage<'a> {
    /// Frame this message for the wire
    ///
    /// Sweep frames are postcard-encoded into the payload.
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            ScannerMessage::Frame(sweep) => {
                let mut buffer = [0u8; MAX_PAYLOAD_SIZE];
                let used = postcard::to_slice(sweep, &mut buffer)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                Frame::new(MSG_FRAME, used)
            }
            ScannerMessage::Pong => Ok(Frame::empty(MSG_PONG)),
        }
    }
}

/// Commands parsed from host-originated frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Begin (or resume) sweeping
    Start,
    /// Park the hardware and stop sweeping
    Stop,
    /// Heartbeat probe
    Ping,
}

impl HostCommand {
    /// Decode a command out of a parsed frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.msg_type {
            MSG_START => Ok(HostCommand::Start),
            MSG_STOP => Ok(HostCommand::Stop),
            MSG_PING => Ok(HostCommand::Ping),
            _ => Err(FrameError::InvalidFrame),
        }
    }

    /// Frame this command, as the host side would
    ///
    /// The firmware only decodes commands; this direction exists for
    /// tests and host tooling.
    pub fn to_frame(&self) -> Frame {
        match self {
            HostCommand::Start => Frame::empty(MSG_START),
            HostCommand::Stop => Frame::empty(MSG_STOP),
            HostCommand::Ping => Frame::empty(MSG_PING),
        }
    }
}

/// Decode a sweep frame payload from a received [`MSG_FRAME`] frame
///
/// Host-side counterpart of [`ScannerMessage::to_frame`].
pub fn decode_sweep_frame(frame: &Frame) -> Result<SweepFrame, FrameError> {
    if frame.msg_type != MSG_FRAME {
        return Err(FrameError::InvalidFrame);
    }
    postcard::from_bytes(&frame.payload).map_err(|_| FrameError::InvalidFrame)
}
