// SPDX-License-Identifier: MPL-2.0
//! Read-only display model for the embedding UI.
//!
//! [`ControlsView`] is a snapshot: everything the time labels, slider fills,
//! volume icon and feedback overlay need, computed once per render.

use super::feedback::ActiveFeedback;
use super::time_format::format_time;
use crate::domain::playback::{PlaybackState, VolumePercent};

/// Icon shown on the mute button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    High,
}

impl VolumeIcon {
    /// Volume below this percent shows the low icon.
    pub const LOW_THRESHOLD: u8 = 50;

    #[must_use]
    pub fn for_state(muted: bool, volume: VolumePercent) -> Self {
        if muted || volume.is_silent() {
            Self::Muted
        } else if volume.value() < Self::LOW_THRESHOLD {
            Self::Low
        } else {
            Self::High
        }
    }
}

/// Everything the controls render.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub paused: bool,
    pub muted: bool,
    pub volume: VolumePercent,
    pub volume_icon: VolumeIcon,
    /// Elapsed time label.
    pub elapsed_label: String,
    /// Time left until the end (`duration - current`).
    pub remaining_label: String,
    /// Playhead position in percent of the duration.
    pub progress_percent: f64,
    /// Buffered position in percent of the duration.
    pub loaded_percent: f64,
    pub is_scrubbing: bool,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
    pub feedback: Option<ActiveFeedback>,
}

/// Inputs that do not live in [`PlaybackState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewFlags {
    pub loaded_ratio: f64,
    pub is_scrubbing: bool,
    pub is_fullscreen: bool,
    pub controls_visible: bool,
    pub feedback: Option<ActiveFeedback>,
}

impl ControlsView {
    #[must_use]
    pub fn new(state: &PlaybackState, flags: ViewFlags) -> Self {
        let loaded_percent = if state.duration_secs() > 0.0 && !state.is_unbounded() {
            flags.loaded_ratio.clamp(0.0, 1.0) * 100.0
        } else {
            0.0
        };

        Self {
            paused: state.is_paused(),
            muted: state.is_muted(),
            volume: state.volume(),
            volume_icon: VolumeIcon::for_state(state.is_muted(), state.volume()),
            elapsed_label: format_time(state.current_time_secs()),
            remaining_label: format_time(state.remaining_secs()),
            progress_percent: state.progress_ratio() * 100.0,
            loaded_percent,
            is_scrubbing: flags.is_scrubbing,
            is_fullscreen: flags.is_fullscreen,
            controls_visible: flags.controls_visible,
            feedback: flags.feedback,
        }
    }
}
