//! Target tracking
//!
//! Every in-range reading becomes an independent target record; records
//! age by one fade ordinal per tick and drop off once they outlive the
//! TTL. There is no merging or deduplication: two echoes at the same
//! angle are two records, each fading on its own schedule.

use heapless::Vec;

use crate::config::{TrackerConfig, MAX_TARGETS};
use crate::traits::ranging::DistanceReading;

/// One detection record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Target {
    /// Sweep angle at detection time, degrees
    pub angle: u8,
    /// Measured distance in tenths of a centimetre
    pub distance_x10: u16,
    /// Detection timestamp, microseconds
    pub detected_at: u64,
    /// Age ordinal for rendering; 0 = fresh
    pub fade_level: u8,
}

/// Owns every live target record
///
/// Records are kept in insertion order (oldest first). Collection
/// invariant after each [`TargetTracker::tick`]: every retained target is
/// at most `ttl_us` old and its fade level never decreases.
#[derive(Debug, Clone)]
pub struct TargetTracker {
    config: TrackerConfig,
    targets: Vec<Target, MAX_TARGETS>,
}

impl TargetTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    /// Record one sample taken at `angle`
    ///
    /// In-range readings append a fresh target at fade level 0; the
    /// sentinel is a no-op. When the collection is full the oldest record
    /// is evicted, so a detection burst costs history, never the newest
    /// contact. Existing records are never modified here.
    pub fn observe(&mut self, angle: u8, reading: DistanceReading, now: u64) {
        if reading.distance_x10 >= self.config.max_range_x10 {
            return;
        }

        if self.targets.is_full() {
            self.targets.remove(0);
        }
        // Cannot fail: the eviction above guarantees a free slot
        let _ = self.targets.push(Target {
            angle,
            distance_x10: reading.distance_x10,
            detected_at: now,
            fade_level: 0,
        });
    }

    /// Age and expire records
    ///
    /// Called exactly once per tick, after [`TargetTracker::observe`].
    /// Targets born this tick (`detected_at == now`) keep fade level 0 so
    /// their first emitted frame shows them fresh; everything older moves
    /// up one ordinal, saturating at `fade_steps - 1`. Expiry is strict:
    /// a record exactly `ttl_us` old survives one more frame.
    pub fn tick(&mut self, now: u64) {
        let cap = self.config.fade_steps.saturating_sub(1);
        for target in self.targets.iter_mut() {
            if target.detected_at < now {
                target.fade_level = target.fade_level.saturating_add(1).min(cap);
            }
        }

        let ttl = self.config.ttl_us;
        self.targets
            .retain(|t| now.saturating_sub(t.detected_at) <= ttl);
    }

    /// Read-only view of the live records, oldest first
    ///
    /// No side effects; two snapshots without an intervening `observe` or
    /// `tick` yield the same sequence.
    pub fn snapshot(&self) -> impl Iterator<Item = &Target> + '_ {
        self.targets.iter()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Drop every record (fresh run)
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}
