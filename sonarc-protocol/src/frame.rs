//! Byte framing for the host link.
//!
//! Wire layout, in order:
//! - START (1 byte): 0xC4 marks a frame boundary
//! - LENGTH (2 bytes): payload byte count, little endian
//! - TYPE (1 byte): message type ID
//! - PAYLOAD (0 to [`MAX_PAYLOAD_SIZE`] bytes)
//! - CHECKSUM (1 byte): XOR of both LENGTH bytes, TYPE and every PAYLOAD byte

use heapless::Vec;

use sonarc_core::config::MAX_TARGETS;

/// Start-of-frame marker
pub const FRAME_START: u8 = 0xC4;

/// Upper bound on a frame payload
///
/// Sized for the largest message on the link: a postcard-encoded sweep
/// frame at full tracker capacity, which is at most 4 bytes per blip plus
/// a handful of header bytes.
pub const MAX_PAYLOAD_SIZE: usize = 8 + MAX_TARGETS * 4;

/// Upper bound on a complete encoded frame
pub const MAX_FRAME_SIZE: usize = 1 + 2 + 1 + MAX_PAYLOAD_SIZE + 1;

/// Codec failures, on either the parse or the encode side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload larger than [`MAX_PAYLOAD_SIZE`]
    PayloadTooLarge,
    /// Checksum did not match the frame contents
    InvalidChecksum,
    /// Malformed frame (impossible length or unusable type)
    InvalidFrame,
    /// Destination buffer cannot hold the encoded frame
    BufferTooSmall,
}

/// One link frame, parsed off the wire or about to go onto it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type ID
    pub msg_type: u8,
    /// Type-specific payload bytes
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Build a frame around a payload slice
    pub fn new(msg_type: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            msg_type,
            payload: payload_vec,
        })
    }

    /// A payload-less frame (all the control messages)
    pub fn empty(msg_type: u8) -> Self {
        Self {
            msg_type,
            payload: Vec::new(),
        }
    }

    /// XOR fold over the length bytes, the type and the payload
    fn calculate_checksum(length: u16, msg_type: u8, payload: &[u8]) -> u8 {
        let [len_lo, len_hi] = length.to_le_bytes();
        payload
            .iter()
            .fold(len_lo ^ len_hi ^ msg_type, |acc, &byte| acc ^ byte)
    }

    /// Serialize into `buffer`, returning the encoded length
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let payload_len = self.payload.len();
        let frame_len = 5 + payload_len; // START + LENGTH + TYPE + payload + CHECKSUM
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let length = payload_len as u16;
        let checksum = Self::calculate_checksum(length, self.msg_type, &self.payload);

        buffer[0] = FRAME_START;
        buffer[1..3].copy_from_slice(&length.to_le_bytes());
        buffer[3] = self.msg_type;
        buffer[4..4 + payload_len].copy_from_slice(&self.payload);
        buffer[4 + payload_len] = checksum;

        Ok(frame_len)
    }

    /// Serialize into an owned buffer
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// Byte-at-a-time frame reassembly
///
/// Tolerates line noise: bytes outside a frame are discarded until the
/// next start marker, and a corrupt frame costs exactly one error before
/// the parser hunts for the next start marker again.
#[derive(Debug, Clone)]
pub struct FrameParser {
    state: ParseState,
    buffer: Vec<u8, MAX_PAYLOAD_SIZE>,
    expected_length: u16,
    length_low: u8,
    msg_type: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Hunting for the start marker
    WaitingForStart,
    /// Next byte is the low half of LENGTH
    WaitingForLengthLow,
    /// Next byte is the high half of LENGTH
    WaitingForLengthHigh,
    /// Next byte is TYPE
    WaitingForType,
    /// Accumulating LENGTH payload bytes
    ReadingPayload,
    /// Next byte is CHECKSUM
    WaitingForChecksum,
}

impl Default for FrameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameParser {
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForStart,
            buffer: Vec::new(),
            expected_length: 0,
            length_low: 0,
            msg_type: 0,
        }
    }

    /// Drop any partial frame and hunt for the next start marker
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForStart;
        self.buffer.clear();
        self.expected_length = 0;
        self.length_low = 0;
        self.msg_type = 0;
    }

    /// Advance the parser by one received byte
    ///
    /// Yields `Ok(Some(frame))` on the byte that completes a valid frame,
    /// `Ok(None)` while one is still in flight, and `Err` when the frame
    /// in flight turns out to be bad (the parser has already reset).
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.state {
            ParseState::WaitingForStart => {
                if byte == FRAME_START {
                    self.state = ParseState::WaitingForLengthLow;
                }
                // Anything else is noise between frames
                Ok(None)
            }
            ParseState::WaitingForLengthLow => {
                self.length_low = byte;
                self.state = ParseState::WaitingForLengthHigh;
                Ok(None)
            }
            ParseState::WaitingForLengthHigh => {
                let length = u16::from_le_bytes([self.length_low, byte]);
                if usize::from(length) > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidFrame);
                }
                self.expected_length = length;
                self.state = ParseState::WaitingForType;
                Ok(None)
            }
            ParseState::WaitingForType => {
                self.msg_type = byte;
                if self.expected_length == 0 {
                    self.state = ParseState::WaitingForChecksum;
                } else {
                    self.buffer.clear();
                    self.state = ParseState::ReadingPayload;
                }
                Ok(None)
            }
            ParseState::ReadingPayload => {
                // Cannot fail: expected_length was checked against capacity
                let _ = self.buffer.push(byte);
                if self.buffer.len() == usize::from(self.expected_length) {
                    self.state = ParseState::WaitingForChecksum;
                }
                Ok(None)
            }
            ParseState::WaitingForChecksum => {
                let expected_checksum =
                    Frame::calculate_checksum(self.expected_length, self.msg_type, &self.buffer);

                if byte != expected_checksum {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    msg_type: self.msg_type,
                    payload: self.buffer.clone(),
                };

                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Run a whole received chunk through [`FrameParser::feed`]
    ///
    /// Stops at the first complete frame; bytes after it stay unread, so
    /// callers that batch must call again with the remainder.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        for &byte in bytes {
            if let Some(frame) = self.feed(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}
