// SPDX-License-Identifier: MPL-2.0
//! Raw input notifications as delivered by the platform.

use crate::application::port::{Channel, ListenerId};
use crate::domain::playback::Fragment;
use iced_core::keyboard::{Key, Modifiers};
use iced_core::Point;

/// One platform notification, before routing.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Discrete key press (character, space or escape keys).
    KeyPress { key: Key, modifiers: Modifiers },
    /// Any key going down, including navigation keys.
    KeyDown { key: Key, modifiers: Modifiers },
    PointerDown { position: Point },
    PointerMove { position: Point },
    PointerUp,
    Click,
    PointerLeave,
    FragmentLoaded(Fragment),
}

impl InputEvent {
    /// The channel this event travels on.
    #[must_use]
    pub fn channel(&self) -> Channel {
        match self {
            Self::KeyPress { .. } => Channel::KeyPress,
            Self::KeyDown { .. } => Channel::KeyDown,
            Self::PointerDown { .. } => Channel::PointerDown,
            Self::PointerMove { .. } => Channel::PointerMove,
            Self::PointerUp => Channel::PointerUp,
            Self::Click => Channel::Click,
            Self::PointerLeave => Channel::PointerLeave,
            Self::FragmentLoaded(_) => Channel::FragmentLoaded,
        }
    }
}

/// A notification tagged with the listener it was registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub listener: ListenerId,
    pub event: InputEvent,
}

impl Delivery {
    #[must_use]
    pub fn new(listener: ListenerId, event: InputEvent) -> Self {
        Self { listener, event }
    }
}
