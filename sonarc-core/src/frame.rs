//! Per-tick frame records
//!
//! A [`SweepFrame`] is everything the external renderer needs to draw one
//! tick: where the beam points, what it measured, and every live target
//! copy. Frames are plain data so the link layer can serialize them as-is.

use heapless::Vec;

use crate::config::MAX_TARGETS;
use crate::track::Target;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Renderer-facing copy of one live target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Blip {
    /// Sweep angle at detection time, degrees
    pub angle: u8,
    /// Detection distance, tenths of a centimetre
    pub distance_x10: u16,
    /// Age ordinal; the renderer dims higher levels
    pub fade_level: u8,
}

impl From<&Target> for Blip {
    fn from(target: &Target) -> Self {
        Self {
            angle: target.angle,
            distance_x10: target.distance_x10,
            fade_level: target.fade_level,
        }
    }
}

/// One tick's complete output for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepFrame {
    /// Beam angle this tick, degrees
    pub angle: u8,
    /// This tick's reading (the sentinel value means no detection)
    pub distance_x10: u16,
    /// Live targets, oldest first
    pub blips: Vec<Blip, MAX_TARGETS>,
}
