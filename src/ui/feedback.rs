// SPDX-License-Identifier: MPL-2.0
//! Visual feedback dispatcher.
//!
//! Shows at most one feedback glyph at a time. A new event replaces the one
//! on screen instead of queuing behind it, and every glyph fades out after a
//! fixed display duration. Expiry is evaluated lazily against the caller's
//! clock, so no timer needs cancelling.

use crate::domain::playback::FeedbackEvent;
use std::time::{Duration, Instant};

/// A glyph currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveFeedback {
    event: FeedbackEvent,
    shown_at: Instant,
    sequence: u64,
}

impl ActiveFeedback {
    #[must_use]
    pub fn event(&self) -> FeedbackEvent {
        self.event
    }

    #[must_use]
    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    /// Increases with every dispatch, so the view can restart its fade
    /// animation even when the same glyph is shown twice in a row.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Single-slot feedback display.
#[derive(Debug, Clone)]
pub struct FeedbackDispatcher {
    active: Option<ActiveFeedback>,
    display_duration: Duration,
    dispatched: u64,
}

impl Default for FeedbackDispatcher {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::defaults::DEFAULT_FEEDBACK_DURATION_MS,
        ))
    }
}

impl FeedbackDispatcher {
    #[must_use]
    pub fn new(display_duration: Duration) -> Self {
        Self {
            active: None,
            display_duration,
            dispatched: 0,
        }
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// Shows `event`, preempting whatever is on screen.
    pub fn show(&mut self, event: FeedbackEvent, now: Instant) -> ActiveFeedback {
        self.dispatched += 1;
        let active = ActiveFeedback {
            event,
            shown_at: now,
            sequence: self.dispatched,
        };
        if let Some(previous) = self.active.replace(active) {
            tracing::trace!(
                previous = %previous.event.kind(),
                next = %event.kind(),
                "feedback glyph preempted"
            );
        }
        active
    }

    /// The glyph on screen at `now`, if it has not faded out yet.
    #[must_use]
    pub fn current(&self, now: Instant) -> Option<ActiveFeedback> {
        self.active
            .filter(|active| now.saturating_duration_since(active.shown_at) < self.display_duration)
    }

    /// Drops an expired glyph. Returns true if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.active.is_some() && self.current(now).is_none() {
            self.active = None;
            return true;
        }
        false
    }

    /// Removes the glyph immediately.
    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Total number of glyphs dispatched.
    #[must_use]
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched
    }
}
