// SPDX-License-Identifier: MPL-2.0
//! Buffer progress tracking.
//!
//! Folds streaming-engine fragment notifications into a single "loaded up
//! to" watermark. The last reported fragment wins even when it ends earlier
//! than a previous one, so the displayed bar may move backwards.

use crate::domain::playback::{BufferWatermark, Fragment};

/// Tracks how far the streaming engine has loaded the media.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferTracker {
    watermark: BufferWatermark,
    fragments_seen: u64,
}

impl BufferTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a fragment-loaded notification.
    pub fn on_fragment_loaded(&mut self, fragment: Fragment) {
        let previous = self.watermark.loaded_until_secs();
        self.watermark.record(fragment);
        self.fragments_seen += 1;

        let loaded = self.watermark.loaded_until_secs();
        if loaded < previous {
            tracing::trace!(previous, loaded, "buffer watermark moved backwards");
        }
    }

    /// Seconds loaded from the start of the media.
    #[must_use]
    pub fn loaded_until_secs(&self) -> f64 {
        self.watermark.loaded_until_secs()
    }

    /// Loaded portion of `duration_secs` in `0.0..=1.0`.
    #[must_use]
    pub fn loaded_ratio(&self, duration_secs: f64) -> f64 {
        self.watermark.ratio_of(duration_secs)
    }

    /// Number of notifications received since the last reset.
    #[must_use]
    pub fn fragments_seen(&self) -> u64 {
        self.fragments_seen
    }

    /// Forgets everything, for a new media source.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
