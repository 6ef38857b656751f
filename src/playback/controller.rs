// SPDX-License-Identifier: MPL-2.0
//! Playback state controller.
//!
//! Single source of truth for paused, muted, volume, position and duration.
//! Intents are applied to the bound media element and mirrored into a
//! [`PlaybackState`]. Without a bound element every intent is a silent no-op.

use super::intent::Intent;
use crate::application::port::{Container, MediaElement};
use crate::domain::playback::{FeedbackEvent, FeedbackKind, PlaybackState, VolumePercent};

/// Applies intents to the bound media element and container.
#[derive(Default)]
pub struct PlaybackController {
    state: PlaybackState,
    media: Option<Box<dyn MediaElement>>,
    container: Option<Box<dyn Container>>,
}

impl std::fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("has_media", &self.media.is_some())
            .field("has_container", &self.container.is_some())
            .finish()
    }
}

impl PlaybackController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the playback state.
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn has_media(&self) -> bool {
        self.media.is_some()
    }

    /// Returns true if the bound element is playing right now.
    ///
    /// Reads the element, not the snapshot: the element may start or stop on
    /// its own (autoplay, OS media keys).
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.media.as_deref().is_some_and(|media| !media.is_paused())
    }

    /// Returns true if the container reports fullscreen.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.container
            .as_deref()
            .is_some_and(|container| container.is_fullscreen())
    }

    pub(crate) fn media_mut(&mut self) -> Option<&mut (dyn MediaElement + 'static)> {
        self.media.as_deref_mut()
    }

    pub(crate) fn container(&self) -> Option<&(dyn Container + 'static)> {
        self.container.as_deref()
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut (dyn Container + 'static)> {
        self.container.as_deref_mut()
    }

    /// Binds a media element and copies its duration, flags and volume.
    pub fn attach_media(&mut self, media: Box<dyn MediaElement>) {
        let mut state = PlaybackState::default();
        state.set_duration(media.duration());
        state.set_current_time(media.current_time());
        state.set_paused(media.is_paused());
        state.set_muted(media.is_muted());
        state.set_volume(VolumePercent::from_level(media.volume()));
        self.state = state;
        self.media = Some(media);
    }

    pub fn attach_container(&mut self, container: Box<dyn Container>) {
        self.container = Some(container);
    }

    /// Releases the collaborators. The last known state is kept for display.
    pub fn detach(&mut self) -> (Option<Box<dyn MediaElement>>, Option<Box<dyn Container>>) {
        (self.media.take(), self.container.take())
    }

    /// Applies an intent, returning the feedback glyph to show, if any.
    pub fn apply(&mut self, intent: Intent) -> Option<FeedbackEvent> {
        match intent {
            Intent::Play => self.play(),
            Intent::Pause => self.pause(),
            Intent::TogglePlayback => self.toggle_playback(),
            Intent::SeekTo(secs) => {
                self.seek_to(secs);
                None
            }
            Intent::SeekBy(delta) => {
                self.seek_by(delta);
                None
            }
            Intent::SeekToFraction(fraction) => {
                self.seek_to_fraction(fraction);
                None
            }
            Intent::SetVolume(percent) => self.set_volume(percent),
            Intent::RaiseVolume(step) => {
                let target = self.state.volume().step_up(step);
                self.set_volume(i32::from(target.value()))
            }
            Intent::LowerVolume(step) => {
                let target = self.state.volume().step_down(step);
                self.set_volume(i32::from(target.value()))
            }
            Intent::ToggleMute => self.toggle_mute(),
            Intent::ToggleFullscreen => {
                self.toggle_fullscreen();
                None
            }
        }
    }

    /// Resumes playback. No-op if the element is already playing.
    pub fn play(&mut self) -> Option<FeedbackEvent> {
        let media = self.media.as_deref_mut()?;
        if !media.is_paused() {
            self.state.set_paused(false);
            return None;
        }
        media.play();
        self.state.set_paused(false);
        Some(FeedbackEvent::play())
    }

    /// Pauses playback. No-op if the element is already paused.
    pub fn pause(&mut self) -> Option<FeedbackEvent> {
        let media = self.media.as_deref_mut()?;
        if media.is_paused() {
            self.state.set_paused(true);
            return None;
        }
        media.pause();
        self.state.set_paused(true);
        Some(FeedbackEvent::pause())
    }

    /// Plays or pauses depending on the element's live paused flag.
    pub fn toggle_playback(&mut self) -> Option<FeedbackEvent> {
        if self.media.as_deref()?.is_paused() {
            self.play()
        } else {
            self.pause()
        }
    }

    /// Moves the playhead to `secs`, clamped to the media duration.
    ///
    /// Returns the position actually applied. Does not touch the paused flag.
    pub fn seek_to(&mut self, secs: f64) -> Option<f64> {
        let media = self.media.as_deref_mut()?;
        self.state.set_duration(media.duration());
        let target = self.state.set_current_time(secs);
        media.set_current_time(target);
        Some(target)
    }

    /// Seeks relative to the element's live position.
    ///
    /// Live streams have no upper bound, so only the start clamps.
    pub fn seek_by(&mut self, delta_secs: f64) -> Option<f64> {
        let base = self.media.as_deref()?.current_time();
        self.seek_to(base + delta_secs)
    }

    /// Seeks to `fraction` of the duration. The fraction is clamped to `0..=1`.
    ///
    /// A live stream (unbounded duration) has no position to scale, so the
    /// request is dropped. An unknown (NaN) duration seeks to the start.
    pub fn seek_to_fraction(&mut self, fraction: f64) -> Option<f64> {
        let duration = self.media.as_deref()?.duration();
        if duration == f64::INFINITY {
            return None;
        }
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let duration = if duration.is_finite() { duration } else { 0.0 };
        self.seek_to(fraction * duration)
    }

    /// Sets the volume in percent, clamped to `0..=100`.
    ///
    /// The glyph compares the request with the element's level *before* the
    /// change: louder than before shows `volume-high`, zero shows `mute`,
    /// anything else `volume-low`. A non-zero volume also un-mutes.
    pub fn set_volume(&mut self, percent: i32) -> Option<FeedbackEvent> {
        let media = self.media.as_deref_mut()?;
        let target = VolumePercent::new(percent);
        let previous = media.volume() * 100.0;

        let feedback = if f64::from(target.value()) > previous {
            FeedbackEvent::volume(FeedbackKind::VolumeHigh, target)
        } else if target.is_silent() {
            FeedbackEvent::mute()
        } else {
            FeedbackEvent::volume(FeedbackKind::VolumeLow, target)
        };

        media.set_volume(target.as_level());
        if !target.is_silent() && (media.is_muted() || self.state.is_muted()) {
            media.set_muted(false);
            self.state.set_muted(false);
        }
        self.state.set_volume(target);
        Some(feedback)
    }

    /// Flips the muted flag. Un-muting restores the last requested level.
    pub fn toggle_mute(&mut self) -> Option<FeedbackEvent> {
        let media = self.media.as_deref_mut()?;
        if media.is_muted() {
            media.set_muted(false);
            media.set_volume(self.state.volume().as_level());
            self.state.set_muted(false);
            Some(FeedbackEvent::volume(FeedbackKind::Volume, self.state.volume()))
        } else {
            media.set_muted(true);
            self.state.set_muted(true);
            Some(FeedbackEvent::mute())
        }
    }

    /// Enters fullscreen, or leaves it when already active.
    ///
    /// Fire-and-forget: a refused request is logged and the container keeps
    /// whatever fullscreen flag it reports.
    pub fn toggle_fullscreen(&mut self) {
        let Some(container) = self.container.as_deref_mut() else {
            return;
        };
        let result = if container.is_fullscreen() {
            container.exit_fullscreen()
        } else {
            container.request_fullscreen()
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, "fullscreen toggle failed");
        }
    }

    /// Copies duration, position and the paused and muted flags from the
    /// element. Returns true if the snapshot changed.
    pub fn refresh_position(&mut self) -> bool {
        let Some(media) = self.media.as_deref() else {
            return false;
        };
        let before = self.state;
        self.state.set_duration(media.duration());
        self.state.set_current_time(media.current_time());
        self.state.set_paused(media.is_paused());
        self.state.set_muted(media.is_muted());
        self.state != before
    }

    /// Refreshes the observable position from the element.
    ///
    /// Reaching the end of the media pauses playback once, without a glyph.
    /// Returns true if the snapshot changed.
    pub fn poll(&mut self) -> bool {
        let before = self.state;
        self.refresh_position();
        let Some(media) = self.media.as_deref_mut() else {
            return false;
        };

        if !self.state.is_paused() && self.state.is_at_end() {
            tracing::debug!(
                duration = self.state.duration_secs(),
                "end of media reached, pausing"
            );
            if !media.is_paused() {
                media.pause();
            }
            self.state.set_paused(true);
        }
        self.state != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::TrackBounds;
    use crate::test_utils::{assert_abs_diff_eq, MockContainer, MockMedia, F64_EPSILON};

    fn controller_with(media: &MockMedia) -> PlaybackController {
        let mut controller = PlaybackController::new();
        controller.attach_media(Box::new(media.clone()));
        controller
    }

    #[test]
    fn intents_without_media_are_silent() {
        let mut controller = PlaybackController::new();
        assert_eq!(controller.apply(Intent::TogglePlayback), None);
        assert_eq!(controller.apply(Intent::SetVolume(40)), None);
        assert_eq!(controller.seek_to(10.0), None);
        assert!(!controller.poll());
        controller.toggle_fullscreen();
    }

    #[test]
    fn attach_syncs_element_state() {
        let media = MockMedia::new(90.0);
        media.set_muted_flag(true);
        media.set_level(0.3);
        let controller = controller_with(&media);

        let state = controller.state();
        assert!(state.is_muted());
        assert!(state.is_paused());
        assert_eq!(state.volume().value(), 30);
        assert_abs_diff_eq!(state.duration_secs(), 90.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn play_is_noop_when_already_playing() {
        let media = MockMedia::new(60.0);
        let mut controller = controller_with(&media);

        assert_eq!(controller.play(), Some(FeedbackEvent::play()));
        assert_eq!(controller.play(), None);
        assert_eq!(media.log().play_calls, 1);
    }

    #[test]
    fn pause_is_noop_when_already_paused() {
        let media = MockMedia::new(60.0);
        let mut controller = controller_with(&media);

        assert_eq!(controller.pause(), None);
        controller.play();
        assert_eq!(controller.pause(), Some(FeedbackEvent::pause()));
        assert_eq!(media.log().pause_calls, 1);
    }

    #[test]
    fn seek_to_clamps_into_duration() {
        let media = MockMedia::new(100.0);
        let mut controller = controller_with(&media);

        for (requested, expected) in [(-4.0, 0.0), (42.5, 42.5), (250.0, 100.0)] {
            assert_eq!(controller.seek_to(requested), Some(expected));
            assert_abs_diff_eq!(
                controller.state().current_time_secs(),
                expected,
                epsilon = F64_EPSILON
            );
        }
    }

    #[test]
    fn seek_to_is_idempotent_and_keeps_paused_flag() {
        let media = MockMedia::new(100.0);
        let mut controller = controller_with(&media);

        controller.seek_to(30.0);
        controller.seek_to(30.0);
        assert_eq!(media.log().seeks, vec![30.0, 30.0]);
        assert!(controller.state().is_paused());
    }

    #[test]
    fn seek_by_uses_live_position() {
        let media = MockMedia::new(100.0);
        let mut controller = controller_with(&media);
        media.advance_to(50.0);

        assert_eq!(controller.seek_by(-11.0), Some(39.0));
        assert_eq!(controller.seek_by(10.0), Some(49.0));
    }

    #[test]
    fn seek_to_fraction_scales_duration() {
        let media = MockMedia::new(100.0);
        let mut controller = controller_with(&media);

        assert_eq!(controller.seek_to_fraction(0.5), Some(50.0));
        assert_eq!(controller.seek_to_fraction(1.7), Some(100.0));
    }

    #[test]
    fn set_volume_stores_percent_and_unmutes() {
        let media = MockMedia::new(10.0);
        media.set_muted_flag(true);
        let mut controller = controller_with(&media);

        for percent in [1, 37, 100] {
            controller.set_volume(percent);
            assert_eq!(i32::from(controller.state().volume().value()), percent);
            assert!(!controller.state().is_muted());
        }
        assert!(!media.is_muted());
    }

    #[test]
    fn set_volume_zero_keeps_muted_flag() {
        let media = MockMedia::new(10.0);
        media.set_muted_flag(true);
        let mut controller = controller_with(&media);

        assert_eq!(controller.set_volume(0), Some(FeedbackEvent::mute()));
        assert!(controller.state().is_muted());
    }

    #[test]
    fn set_volume_clamps_out_of_range() {
        let media = MockMedia::new(10.0);
        let mut controller = controller_with(&media);

        controller.set_volume(140);
        assert_eq!(controller.state().volume().value(), 100);
        controller.set_volume(-20);
        assert_eq!(controller.state().volume().value(), 0);
    }

    #[test]
    fn set_volume_feedback_compares_with_previous_element_level() {
        let media = MockMedia::new(10.0);
        media.set_level(0.5);
        let mut controller = controller_with(&media);

        let louder = controller.set_volume(70);
        assert_eq!(louder.map(|f| f.kind()), Some(FeedbackKind::VolumeHigh));

        let quieter = controller.set_volume(60);
        assert_eq!(quieter.map(|f| f.kind()), Some(FeedbackKind::VolumeLow));

        // Same level as before is not "louder".
        let same = controller.set_volume(60);
        assert_eq!(same.map(|f| f.kind()), Some(FeedbackKind::VolumeLow));

        // Raising from 0 to anything reports high, even under 50.
        controller.set_volume(0);
        let from_zero = controller.set_volume(10);
        assert_eq!(from_zero.map(|f| f.kind()), Some(FeedbackKind::VolumeHigh));
        assert_eq!(
            from_zero.and_then(|f| f.volume_label()),
            Some(VolumePercent::new(10))
        );
    }

    #[test]
    fn step_intents_snap_to_bounds() {
        let media = MockMedia::new(10.0);
        media.set_level(0.97);
        let mut controller = controller_with(&media);

        controller.apply(Intent::RaiseVolume(5));
        assert_eq!(controller.state().volume().value(), 100);

        controller.set_volume(4);
        controller.apply(Intent::LowerVolume(5));
        assert_eq!(controller.state().volume().value(), 0);
    }

    #[test]
    fn toggle_mute_restores_level_on_unmute() {
        let media = MockMedia::new(10.0);
        let mut controller = controller_with(&media);
        controller.set_volume(40);

        assert_eq!(controller.toggle_mute(), Some(FeedbackEvent::mute()));
        assert!(media.is_muted());

        let unmuted = controller.toggle_mute();
        assert_eq!(unmuted.map(|f| f.kind()), Some(FeedbackKind::Volume));
        assert!(!media.is_muted());
        assert_abs_diff_eq!(media.volume(), 0.4, epsilon = F64_EPSILON);
    }

    #[test]
    fn toggle_fullscreen_requests_then_exits() {
        let container = MockContainer::new(TrackBounds::new(0.0, 100.0));
        let mut controller = PlaybackController::new();
        controller.attach_container(Box::new(container.clone()));

        controller.toggle_fullscreen();
        assert!(controller.is_fullscreen());
        controller.toggle_fullscreen();
        assert!(!controller.is_fullscreen());

        let log = container.log();
        assert_eq!(log.fullscreen_requests, 1);
        assert_eq!(log.fullscreen_exits, 1);
    }

    #[test]
    fn denied_fullscreen_is_absorbed() {
        let container = MockContainer::new(TrackBounds::new(0.0, 100.0));
        container.deny_fullscreen();
        let mut controller = PlaybackController::new();
        controller.attach_container(Box::new(container.clone()));

        controller.toggle_fullscreen();
        assert!(!container.is_fullscreen_now());
        assert_eq!(container.log().fullscreen_requests, 1);
    }

    #[test]
    fn poll_pauses_exactly_once_at_end() {
        let media = MockMedia::new(20.0);
        let mut controller = controller_with(&media);
        controller.play();

        media.advance_to(20.0);
        assert!(controller.poll());
        assert!(controller.state().is_paused());
        assert!(!controller.poll());
        assert!(!controller.poll());

        assert_eq!(media.log().pause_calls, 1);
    }

    #[test]
    fn poll_picks_up_late_duration() {
        let media = MockMedia::new(f64::NAN);
        let mut controller = controller_with(&media);
        assert_abs_diff_eq!(controller.state().duration_secs(), 0.0, epsilon = F64_EPSILON);

        media.set_reported_duration(300.0);
        media.advance_to(12.0);
        controller.poll();
        assert_abs_diff_eq!(controller.state().duration_secs(), 300.0, epsilon = F64_EPSILON);
        assert_abs_diff_eq!(controller.state().current_time_secs(), 12.0, epsilon = F64_EPSILON);
    }

    #[test]
    fn toggle_follows_element_that_paused_itself() {
        let media = MockMedia::new(60.0);
        let mut controller = controller_with(&media);
        controller.toggle_playback();

        media.set_paused_flag(true);
        assert_eq!(controller.toggle_playback(), Some(FeedbackEvent::play()));
        assert!(!media.is_paused());
        assert!(!controller.state().is_paused());
        assert_eq!(media.log().play_calls, 2);
    }

    #[test]
    fn toggle_follows_element_that_started_itself() {
        let media = MockMedia::new(60.0);
        let mut controller = controller_with(&media);

        media.set_paused_flag(false);
        assert!(controller.is_playing());
        assert_eq!(controller.toggle_playback(), Some(FeedbackEvent::pause()));
        assert!(media.is_paused());
        assert_eq!(media.log().play_calls, 0);
    }

    #[test]
    fn set_volume_unmutes_element_muted_after_attach() {
        let media = MockMedia::new(10.0);
        let mut controller = controller_with(&media);
        media.set_muted_flag(true);

        controller.set_volume(50);
        assert!(!media.is_muted());
        assert!(!controller.state().is_muted());
        assert_eq!(controller.toggle_mute(), Some(FeedbackEvent::mute()));
    }

    #[test]
    fn refresh_copies_element_flags() {
        let media = MockMedia::new(10.0);
        let mut controller = controller_with(&media);

        media.set_paused_flag(false);
        media.set_muted_flag(true);
        assert!(controller.refresh_position());
        assert!(!controller.state().is_paused());
        assert!(controller.state().is_muted());
        assert!(!controller.refresh_position());
    }

    #[test]
    fn live_stream_seeks_are_open_ended() {
        let media = MockMedia::new(f64::INFINITY);
        let mut controller = controller_with(&media);
        media.advance_to(100.0);

        assert_eq!(controller.seek_by(10.0), Some(110.0));
        assert_eq!(controller.seek_to(5_000.0), Some(5_000.0));
        assert_eq!(controller.seek_by(-6_000.0), Some(0.0));
        assert_eq!(controller.seek_to_fraction(0.5), None);
        assert!(controller.state().is_unbounded());
    }
}
