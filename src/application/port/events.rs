// SPDX-License-Identifier: MPL-2.0
//! Event listener port definition.
//!
//! Every platform object that emits input (the document, the media element,
//! the scrub track) implements [`EventTarget`]. Registration is explicit and
//! symmetric: whatever is added with [`EventTarget::add_listener`] is removed
//! with [`EventTarget::remove_listener`] using the same channel and id.

use std::fmt;

// =============================================================================
// ListenerId
// =============================================================================

/// Identity of one registered listener.
///
/// Ids are unique for the lifetime of the process, so a delivery carrying an
/// id from a torn-down binding can never be mistaken for a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Creates a new unique listener ID.
    #[must_use]
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id, for platforms that key handlers by integer.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

// =============================================================================
// Channel
// =============================================================================

/// Kind of notification a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Discrete character-producing key press (auto-repeat allowed).
    KeyPress,
    /// Any physical key going down, including navigation keys.
    KeyDown,
    PointerDown,
    PointerMove,
    PointerUp,
    Click,
    PointerLeave,
    /// Streaming engine finished loading a fragment.
    FragmentLoaded,
}

impl Channel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KeyPress => "keypress",
            Self::KeyDown => "keydown",
            Self::PointerDown => "pointerdown",
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::Click => "click",
            Self::PointerLeave => "pointerleave",
            Self::FragmentLoaded => "fragment-loaded",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// EventTarget Trait
// =============================================================================

/// Port for anything that can deliver input notifications.
///
/// The platform remembers `(channel, listener)` pairs and tags every
/// notification it delivers with the listener id.
pub trait EventTarget {
    /// Starts delivering `channel` notifications tagged with `listener`.
    fn add_listener(&mut self, channel: Channel, listener: ListenerId);

    /// Stops delivering notifications for this exact pair.
    fn remove_listener(&mut self, channel: Channel, listener: ListenerId);
}
