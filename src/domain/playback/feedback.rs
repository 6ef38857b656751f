// SPDX-License-Identifier: MPL-2.0
//! Feedback glyph events.
//!
//! A feedback event is created by a user action, shown once and then
//! forgotten. It is never queued.

use super::newtypes::VolumePercent;

/// Which glyph to flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Play,
    Pause,
    Mute,
    /// Audio restored after un-muting.
    Volume,
    VolumeHigh,
    VolumeLow,
}

impl FeedbackKind {
    /// Stable identifier used by renderers and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Mute => "mute",
            Self::Volume => "volume",
            Self::VolumeHigh => "volume-high",
            Self::VolumeLow => "volume-low",
        }
    }

    /// Returns true for the glyphs that display a volume label.
    #[must_use]
    pub fn is_volume(self) -> bool {
        matches!(self, Self::Volume | Self::VolumeHigh | Self::VolumeLow)
    }
}

impl std::fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glyph to show, with the volume label when the glyph is volume related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackEvent {
    kind: FeedbackKind,
    volume_label: Option<VolumePercent>,
}

impl FeedbackEvent {
    /// Playback resumed.
    #[must_use]
    pub fn play() -> Self {
        Self::bare(FeedbackKind::Play)
    }

    /// Playback paused.
    #[must_use]
    pub fn pause() -> Self {
        Self::bare(FeedbackKind::Pause)
    }

    /// Audio muted or volume dropped to zero.
    #[must_use]
    pub fn mute() -> Self {
        Self::bare(FeedbackKind::Mute)
    }

    /// Volume related glyph carrying the level to print next to it.
    ///
    /// Non-volume kinds drop the label.
    #[must_use]
    pub fn volume(kind: FeedbackKind, level: VolumePercent) -> Self {
        Self {
            kind,
            volume_label: kind.is_volume().then_some(level),
        }
    }

    fn bare(kind: FeedbackKind) -> Self {
        Self {
            kind,
            volume_label: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    #[must_use]
    pub fn volume_label(&self) -> Option<VolumePercent> {
        self.volume_label
    }
}
