// SPDX-License-Identifier: MPL-2.0
//! Streaming fragments and the buffered watermark.

/// A time-bounded chunk of streamed media reported as loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Start of the fragment on the media timeline, in seconds.
    pub start_secs: f64,
    /// Length of the fragment, in seconds.
    pub duration_secs: f64,
}

impl Fragment {
    #[must_use]
    pub fn new(start_secs: f64, duration_secs: f64) -> Self {
        Self {
            start_secs,
            duration_secs,
        }
    }

    /// End of the fragment on the media timeline.
    #[must_use]
    pub fn end_secs(&self) -> f64 {
        self.start_secs + self.duration_secs
    }
}

/// "Loaded up to" marker of the most recently reported fragment.
///
/// Last write wins: an out-of-order fragment may move the watermark
/// backwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BufferWatermark {
    loaded_until_secs: f64,
}

impl BufferWatermark {
    /// Replaces the watermark with the end of `fragment`.
    ///
    /// Non-finite or negative ends read as 0.
    pub fn record(&mut self, fragment: Fragment) {
        let end = fragment.end_secs();
        self.loaded_until_secs = if end.is_finite() { end.max(0.0) } else { 0.0 };
    }

    #[must_use]
    pub fn loaded_until_secs(&self) -> f64 {
        self.loaded_until_secs
    }

    /// Returns the watermark as a fraction of `duration_secs`, capped at 1.
    #[must_use]
    pub fn ratio_of(&self, duration_secs: f64) -> f64 {
        if duration_secs > 0.0 {
            (self.loaded_until_secs / duration_secs).min(1.0)
        } else {
            0.0
        }
    }
}
