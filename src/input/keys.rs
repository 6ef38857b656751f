// SPDX-License-Identifier: MPL-2.0
//! Keyboard classification.
//!
//! Keys travel on two channels. Press-type keys fire one discrete action per
//! press; navigation keys are held and repeat. An iced `KeyPressed` event is
//! split into the browser-style pair: `KeyDown` always, plus `KeyPress` when
//! the key produces a character, a space or an escape.

use super::event::InputEvent;
use iced_core::keyboard::{self, key::Named, Key, Modifiers};

/// Press-type shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressKey {
    /// `f`
    Fullscreen,
    /// space or `k`
    TogglePlayback,
    /// `l`
    JumpForward,
    /// `j`
    JumpBackward,
    /// `m`
    Mute,
    Escape,
    /// `0` to `9`
    Digit(u8),
}

/// Held navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKey {
    Up,
    Down,
    Left,
    Right,
}

/// Classifies a key on the press channel.
#[must_use]
pub fn press_key(key: &Key) -> Option<PressKey> {
    match key {
        Key::Named(Named::Space) => Some(PressKey::TogglePlayback),
        Key::Named(Named::Escape) => Some(PressKey::Escape),
        Key::Character(c) => match c.as_str() {
            "f" => Some(PressKey::Fullscreen),
            " " | "k" => Some(PressKey::TogglePlayback),
            "l" => Some(PressKey::JumpForward),
            "j" => Some(PressKey::JumpBackward),
            "m" => Some(PressKey::Mute),
            s => digit(s).map(PressKey::Digit),
        },
        _ => None,
    }
}

/// Classifies a key on the navigation channel.
#[must_use]
pub fn navigation_key(key: &Key) -> Option<NavigationKey> {
    match key {
        Key::Named(Named::ArrowUp) => Some(NavigationKey::Up),
        Key::Named(Named::ArrowDown) => Some(NavigationKey::Down),
        Key::Named(Named::ArrowLeft) => Some(NavigationKey::Left),
        Key::Named(Named::ArrowRight) => Some(NavigationKey::Right),
        _ => None,
    }
}

/// Returns true if a modifier that claims digit shortcuts is held.
///
/// Shift is not one of them.
#[must_use]
pub fn has_shortcut_modifier(modifiers: Modifiers) -> bool {
    modifiers.alt() || modifiers.control() || modifiers.logo()
}

/// Splits an iced keyboard event into `KeyDown` and, when applicable,
/// `KeyPress` notifications.
#[must_use]
pub fn split_key_event(event: &keyboard::Event) -> Vec<InputEvent> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return Vec::new();
    };

    let mut events = vec![InputEvent::KeyDown {
        key: key.clone(),
        modifiers: *modifiers,
    }];
    if produces_press(key) {
        events.push(InputEvent::KeyPress {
            key: key.clone(),
            modifiers: *modifiers,
        });
    }
    events
}

fn produces_press(key: &Key) -> bool {
    matches!(
        key,
        Key::Character(_) | Key::Named(Named::Space | Named::Escape)
    )
}

fn digit(s: &str) -> Option<u8> {
    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    c.to_digit(10).and_then(|d| u8::try_from(d).ok())
}
