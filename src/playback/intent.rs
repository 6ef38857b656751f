// SPDX-License-Identifier: MPL-2.0
//! Playback intents.
//!
//! Intents describe what the user asked for. Relative intents are resolved
//! against the controller's state when applied, never when produced.

/// A request to change playback state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Play,
    Pause,
    TogglePlayback,
    /// Absolute seek in seconds.
    SeekTo(f64),
    /// Relative seek from the element's live position.
    SeekBy(f64),
    /// Seek to a fraction (`0.0..=1.0`) of the duration.
    SeekToFraction(f64),
    /// Absolute volume in percent. Out-of-range values are clamped.
    SetVolume(i32),
    /// Raise the volume by the given step, snapping to 100.
    RaiseVolume(u8),
    /// Lower the volume by the given step, snapping to 0.
    LowerVolume(u8),
    ToggleMute,
    ToggleFullscreen,
}
