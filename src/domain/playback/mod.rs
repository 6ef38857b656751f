// SPDX-License-Identifier: MPL-2.0
//! Playback control domain types.
//!
//! - [`newtypes`]: clamped value objects ([`VolumePercent`], [`ControlsTimeout`],
//!   [`KeyboardSeekStep`], [`PollInterval`])
//! - [`state`]: the [`PlaybackState`] snapshot owned by the controller
//! - [`feedback`]: transient glyph events ([`FeedbackEvent`])
//! - [`fragment`]: streaming fragments and the [`BufferWatermark`]

pub mod feedback;
pub mod fragment;
pub mod newtypes;
pub mod state;

pub use feedback::{FeedbackEvent, FeedbackKind};
pub use fragment::{BufferWatermark, Fragment};
pub use newtypes::{ControlsTimeout, KeyboardSeekStep, PollInterval, VolumePercent};
pub use state::PlaybackState;
