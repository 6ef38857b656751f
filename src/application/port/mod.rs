// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the narrow interfaces the control surface uses to talk
//! to its collaborators. Adapters for a concrete platform implement them.
//!
//! # Available Ports
//!
//! - [`events`]: Listener registration shared by every input source
//! - [`media`]: The playing media element
//! - [`stream`]: The adaptive streaming engine's fragment notifications
//! - [`container`]: Scrub track geometry and fullscreen
//!
//! # Design Notes
//!
//! - Traits use domain types and plain numbers only
//! - Commands are fire-and-forget; only fullscreen reports failure
//! - A missing collaborator is represented by `None` at the call site, never
//!   by an error

pub mod container;
pub mod events;
pub mod media;
pub mod stream;

// Re-export main types for convenience
pub use container::{Container, PlatformError, TrackBounds};
pub use events::{Channel, EventTarget, ListenerId};
pub use media::MediaElement;
pub use stream::StreamingEngine;
