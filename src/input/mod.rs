// SPDX-License-Identifier: MPL-2.0
//! Input handling.
//!
//! - [`event`]: platform notifications tagged with their listener
//! - [`keys`]: press-type and navigation key classification
//! - [`router`]: translation into playback intents
//! - [`bindings`]: the listener registration table

pub mod bindings;
pub mod event;
pub mod keys;
pub mod router;

pub use bindings::{Bindings, Registration, Source};
pub use event::{Delivery, InputEvent};
pub use router::{InputRouter, KeyMap, Route};
