// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait: the playing element the
//! control surface drives. Adapters wrap whatever actually decodes and renders
//! the media.
//!
//! # Design Notes
//!
//! - Every command is fire-and-forget; completion is never awaited
//! - Levels are `0.0..=1.0`, times are seconds
//! - A non-finite `duration()` means "not known yet"

use super::events::EventTarget;

/// Port for the playing media element.
///
/// Emits [`Channel::Click`](super::Channel::Click),
/// [`Channel::PointerMove`](super::Channel::PointerMove) and
/// [`Channel::PointerLeave`](super::Channel::PointerLeave) for pointer
/// activity on the video surface itself.
pub trait MediaElement: EventTarget {
    /// Resumes playback.
    fn play(&mut self);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns true if the element is paused.
    fn is_paused(&self) -> bool;

    /// Returns the playhead position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playhead.
    fn set_current_time(&mut self, secs: f64);

    /// Returns the media duration in seconds.
    fn duration(&self) -> f64;

    /// Returns the audible level (`0.0..=1.0`).
    fn volume(&self) -> f64;

    /// Sets the audible level (`0.0..=1.0`).
    fn set_volume(&mut self, level: f64);

    /// Returns true if the element is muted.
    fn is_muted(&self) -> bool;

    /// Mutes or un-mutes the element without touching its level.
    fn set_muted(&mut self, muted: bool);
}
