// SPDX-License-Identifier: MPL-2.0
//! Scrub state management
//!
//! Handles press-and-drag seeking on the timeline track. The drag is tracked
//! from document-level pointer events, so a fast flick that leaves the track
//! keeps seeking until the pointer is released anywhere.

use crate::application::port::TrackBounds;
use iced::Point;

/// Converts a pointer x coordinate into a position along the track.
///
/// The result is clamped to `0.0..=1.0`. Returns `None` for a track with no
/// usable width.
#[must_use]
pub fn track_ratio(x: f32, bounds: TrackBounds) -> Option<f64> {
    if !bounds.width.is_finite() || bounds.width <= 0.0 || !x.is_finite() {
        return None;
    }
    let ratio = f64::from(x - bounds.left) / f64::from(bounds.width);
    Some(ratio.clamp(0.0, 1.0))
}

/// Idle or scrubbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrubState {
    is_scrubbing: bool,
}

impl ScrubState {
    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.is_scrubbing
    }

    /// Starts scrubbing from a press on the track.
    ///
    /// Returns the position to seek to right away. Without usable track
    /// geometry the press is ignored and the state stays idle.
    pub fn press(&mut self, position: Point, bounds: Option<TrackBounds>) -> Option<f64> {
        let ratio = track_ratio(position.x, bounds?)?;
        self.is_scrubbing = true;
        Some(ratio)
    }

    /// Returns the position to seek to for a pointer move, if scrubbing.
    #[must_use]
    pub fn drag(&self, position: Point, bounds: Option<TrackBounds>) -> Option<f64> {
        if !self.is_scrubbing {
            return None;
        }
        track_ratio(position.x, bounds?)
    }

    /// Stops scrubbing. Returns true if a scrub was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.is_scrubbing)
    }
}
