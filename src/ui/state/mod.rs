// SPDX-License-Identifier: MPL-2.0
//! Interaction state shared by the control surface.

pub mod scrub;
pub mod visibility;

pub use scrub::{track_ratio, ScrubState};
pub use visibility::VisibilityWindow;
