// SPDX-License-Identifier: MPL-2.0
//! Streaming engine port definition.
//!
//! Only the "fragment loaded" notification is consumed; segment fetching and
//! bitrate adaptation stay inside the engine.

use super::events::ListenerId;

/// Port for an adaptive streaming engine.
///
/// The engine tags every fragment notification with the listener id it was
/// subscribed with, carrying a [`Fragment`](crate::domain::playback::Fragment).
pub trait StreamingEngine {
    /// Subscribes `listener` to fragment-loaded notifications.
    fn on_fragment_loaded(&mut self, listener: ListenerId);

    /// Unsubscribes `listener`.
    fn off_fragment_loaded(&mut self, listener: ListenerId);
}
