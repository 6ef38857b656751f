// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core control-surface rules with ZERO external dependencies.
//!
//! This module contains pure value types and invariants. It has no
//! dependencies on external crates (except `std`) so every rule can be
//! tested without a media element or a GUI.
//!
//! # Modules
//!
//! - [`playback`]: Playback types ([`PlaybackState`](playback::PlaybackState),
//!   [`VolumePercent`](playback::VolumePercent),
//!   [`FeedbackEvent`](playback::FeedbackEvent),
//!   [`BufferWatermark`](playback::BufferWatermark))

pub mod playback;
