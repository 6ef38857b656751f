// SPDX-License-Identifier: MPL-2.0
//! Container port definition.
//!
//! The container wraps the media and the controls. It answers the scrub
//! track geometry query, owns the fullscreen state and emits
//! [`Channel::PointerDown`](super::Channel::PointerDown) for presses on the
//! scrub track.

use super::events::EventTarget;
use std::fmt;

// =============================================================================
// PlatformError
// =============================================================================

/// Failures reported by platform calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// The platform refused the fullscreen transition.
    FullscreenDenied(String),

    /// The capability is not available on this platform.
    Unavailable,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::FullscreenDenied(reason) => {
                write!(f, "Fullscreen request denied: {reason}")
            }
            PlatformError::Unavailable => write!(f, "Capability unavailable"),
        }
    }
}

impl std::error::Error for PlatformError {}

// =============================================================================
// TrackBounds
// =============================================================================

/// Horizontal extent of the scrub track in pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackBounds {
    pub left: f32,
    pub width: f32,
}

impl TrackBounds {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

impl From<iced_core::Rectangle> for TrackBounds {
    fn from(rect: iced_core::Rectangle) -> Self {
        Self::new(rect.x, rect.width)
    }
}

// =============================================================================
// Container Trait
// =============================================================================

/// Port for the element hosting the media and its controls.
pub trait Container: EventTarget {
    /// Returns the current scrub track geometry, if laid out.
    fn track_bounds(&self) -> Option<TrackBounds>;

    /// Returns true if the container is currently fullscreen.
    ///
    /// The embedding application owns this flag.
    fn is_fullscreen(&self) -> bool;

    /// Asks the platform to make the container fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the platform refuses.
    fn request_fullscreen(&mut self) -> Result<(), PlatformError>;

    /// Asks the platform to leave fullscreen.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the platform refuses.
    fn exit_fullscreen(&mut self) -> Result<(), PlatformError>;
}
