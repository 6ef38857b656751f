// SPDX-License-Identifier: MPL-2.0
//! Playback state snapshot.
//!
//! The controller owns the only mutable copy; everything else reads a
//! snapshot or issues intents.

use super::newtypes::VolumePercent;

/// Paused, muted, volume and position of the bound media.
///
/// Invariant: `current_time_secs` is always within `0.0..=duration_secs`.
/// A live stream has an unbounded (`+∞`) duration, which leaves the upper
/// end of that range open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    paused: bool,
    muted: bool,
    volume: VolumePercent,
    duration_secs: f64,
    current_time_secs: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            paused: true,
            muted: false,
            volume: VolumePercent::default(),
            duration_secs: 0.0,
            current_time_secs: 0.0,
        }
    }
}

impl PlaybackState {
    /// Returns true if playback is paused (or never started).
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns true if audio is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns the last requested volume level.
    #[must_use]
    pub fn volume(&self) -> VolumePercent {
        self.volume
    }

    /// Returns the media duration in seconds (0 when unknown, `+∞` for live
    /// streams).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns the current position in seconds.
    #[must_use]
    pub fn current_time_secs(&self) -> f64 {
        self.current_time_secs
    }

    /// Returns true if the media has no end (a live stream).
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.duration_secs == f64::INFINITY
    }

    /// Returns true if the position sits on the last instant of the media.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.duration_secs > 0.0 && self.current_time_secs >= self.duration_secs
    }

    /// Returns the position as a fraction of the duration (0 when unknown or
    /// unbounded).
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        if self.duration_secs > 0.0 && !self.is_unbounded() {
            self.current_time_secs / self.duration_secs
        } else {
            0.0
        }
    }

    /// Returns the time left until the end of the media (0 when unbounded).
    #[must_use]
    pub fn remaining_secs(&self) -> f64 {
        if self.is_unbounded() {
            return 0.0;
        }
        (self.duration_secs - self.current_time_secs).max(0.0)
    }

    /// Clamps a requested position to `0.0..=duration_secs`.
    ///
    /// NaN requests resolve to the start.
    #[must_use]
    pub fn clamp_time(&self, secs: f64) -> f64 {
        if secs.is_nan() {
            return 0.0;
        }
        secs.clamp(0.0, self.duration_secs)
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub(crate) fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub(crate) fn set_volume(&mut self, volume: VolumePercent) {
        self.volume = volume;
    }

    /// Updates the duration, re-clamping the current position.
    ///
    /// NaN or negative durations read as unknown (0). `+∞` is kept.
    pub(crate) fn set_duration(&mut self, secs: f64) {
        self.duration_secs = if secs > 0.0 { secs } else { 0.0 };
        self.current_time_secs = self.clamp_time(self.current_time_secs);
    }

    /// Sets the position, clamping it into range. Returns the stored value.
    pub(crate) fn set_current_time(&mut self, secs: f64) -> f64 {
        self.current_time_secs = self.clamp_time(secs);
        self.current_time_secs
    }
}
