// SPDX-License-Identifier: MPL-2.0
//! Controls visibility window.
//!
//! Every qualifying input pushes the deadline out to "now plus N seconds";
//! the controls hide once the deadline passes. The window is component-local
//! and never persisted.

use std::time::{Duration, Instant};

/// Deadline until which the on-screen controls stay visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityWindow {
    expires_at: Option<Instant>,
}

impl VisibilityWindow {
    /// Keeps the controls visible for `duration` from `now`.
    ///
    /// Always replaces the deadline, even with an earlier one.
    pub fn show_for(&mut self, duration: Duration, now: Instant) {
        self.expires_at = Some(now + duration);
    }

    /// Hides the controls immediately.
    pub fn hide(&mut self) {
        self.expires_at = None;
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now < deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECS: Duration = Duration::from_secs(2);

    #[test]
    fn default_window_is_hidden() {
        let window = VisibilityWindow::default();
        assert!(!window.is_visible(Instant::now()));
    }

    #[test]
    fn show_for_expires_after_duration() {
        let mut window = VisibilityWindow::default();
        let t0 = Instant::now();
        window.show_for(TWO_SECS, t0);

        assert!(window.is_visible(t0 + Duration::from_millis(1999)));
        assert!(!window.is_visible(t0 + TWO_SECS));
    }

    #[test]
    fn repeated_input_extends_window() {
        let mut window = VisibilityWindow::default();
        let t0 = Instant::now();
        window.show_for(TWO_SECS, t0);
        window.show_for(TWO_SECS, t0 + Duration::from_millis(1500));

        assert!(window.is_visible(t0 + Duration::from_millis(3000)));
        assert!(!window.is_visible(t0 + Duration::from_millis(3500)));
    }

    #[test]
    fn hide_clears_deadline() {
        let mut window = VisibilityWindow::default();
        let t0 = Instant::now();
        window.show_for(TWO_SECS, t0);
        window.hide();

        assert!(!window.is_visible(t0));
        assert_eq!(window, VisibilityWindow::default());
    }
}
