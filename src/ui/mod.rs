// SPDX-License-Identifier: MPL-2.0
//! Display-side state for the control surface.
//!
//! Nothing here draws; these types give the embedding UI what it renders.
//!
//! - [`time_format`] - Elapsed/remaining time labels
//! - [`feedback`] - Single-slot transient feedback glyph
//! - [`state`] - Scrub drag and controls visibility window
//! - [`display`] - Read-only [`ControlsView`](display::ControlsView) snapshot

pub mod display;
pub mod feedback;
pub mod state;
pub mod time_format;

pub use display::{ControlsView, ViewFlags, VolumeIcon};
pub use feedback::{ActiveFeedback, FeedbackDispatcher};
pub use time_format::format_time;
