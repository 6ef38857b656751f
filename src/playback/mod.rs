// SPDX-License-Identifier: MPL-2.0
//! Playback control.
//!
//! [`PlaybackController`] owns the playback state and drives the media
//! element; [`BufferTracker`] follows the streaming engine's buffer progress.

pub mod buffer;
pub mod controller;
pub mod intent;

pub use buffer::BufferTracker;
pub use controller::PlaybackController;
pub use intent::Intent;
