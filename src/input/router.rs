// SPDX-License-Identifier: MPL-2.0
//! Input routing.
//!
//! Translates keyboard and media-surface notifications into playback
//! [`Intent`]s plus the side signals the embedding UI needs (reveal the
//! controls, suppress the platform's default action). Routing is pure: it
//! never reads playback state, so relative intents are resolved by the
//! controller at the moment they are applied.

use super::event::InputEvent;
use super::keys::{self, NavigationKey, PressKey};
use crate::domain::playback::KeyboardSeekStep;
use crate::playback::Intent;
use iced_core::keyboard::{Key, Modifiers};

/// Amounts and switches used when translating keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMap {
    /// Seconds skipped by `l`.
    pub forward_jump_secs: f64,
    /// Seconds rewound by `j`.
    pub backward_jump_secs: f64,
    /// Seconds moved by the left/right arrows.
    pub arrow_seek_step: KeyboardSeekStep,
    /// Percent moved by the up/down arrows.
    pub volume_step: u8,
    /// Whether navigation keys also reveal the controls.
    pub navigation_reveals_controls: bool,
}

impl Default for KeyMap {
    fn default() -> Self {
        use crate::config::defaults;
        Self {
            forward_jump_secs: defaults::DEFAULT_FORWARD_JUMP_SECS,
            backward_jump_secs: defaults::DEFAULT_BACKWARD_JUMP_SECS,
            arrow_seek_step: KeyboardSeekStep::default(),
            volume_step: defaults::DEFAULT_VOLUME_STEP_PERCENT,
            navigation_reveals_controls: defaults::DEFAULT_NAVIGATION_KEYS_REVEAL_CONTROLS,
        }
    }
}

/// Result of routing one notification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Route {
    pub intent: Option<Intent>,
    /// Reset the controls visibility window.
    pub reveal_controls: bool,
    /// Suppress the platform's default handling of the key.
    pub prevent_default: bool,
}

impl Route {
    fn ignored() -> Self {
        Self::default()
    }

    fn reveal(intent: Option<Intent>) -> Self {
        Self {
            intent,
            reveal_controls: true,
            prevent_default: false,
        }
    }
}

/// Stateless input router.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputRouter {
    keymap: KeyMap,
}

impl InputRouter {
    #[must_use]
    pub fn new(keymap: KeyMap) -> Self {
        Self { keymap }
    }

    #[must_use]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Routes a press-channel key.
    ///
    /// Every press reveals the controls, except digits held with a shortcut
    /// modifier, which are left to the platform entirely.
    #[must_use]
    pub fn route_key_press(&self, key: &Key, modifiers: Modifiers, is_fullscreen: bool) -> Route {
        let Some(press) = keys::press_key(key) else {
            return Route::reveal(None);
        };

        match press {
            PressKey::Fullscreen => Route::reveal(Some(Intent::ToggleFullscreen)),
            PressKey::TogglePlayback => Route::reveal(Some(Intent::TogglePlayback)),
            PressKey::JumpForward => {
                Route::reveal(Some(Intent::SeekBy(self.keymap.forward_jump_secs)))
            }
            PressKey::JumpBackward => {
                Route::reveal(Some(Intent::SeekBy(-self.keymap.backward_jump_secs)))
            }
            PressKey::Mute => Route::reveal(Some(Intent::ToggleMute)),
            PressKey::Escape => Route {
                intent: is_fullscreen.then_some(Intent::ToggleFullscreen),
                reveal_controls: true,
                prevent_default: true,
            },
            PressKey::Digit(_) if keys::has_shortcut_modifier(modifiers) => Route::ignored(),
            PressKey::Digit(d) => Route::reveal(Some(Intent::SeekToFraction(f64::from(d) / 10.0))),
        }
    }

    /// Routes a navigation-channel key.
    #[must_use]
    pub fn route_key_down(&self, key: &Key) -> Route {
        let Some(nav) = keys::navigation_key(key) else {
            return Route::ignored();
        };

        let step = self.keymap.arrow_seek_step.value();
        let intent = match nav {
            NavigationKey::Up => Intent::RaiseVolume(self.keymap.volume_step),
            NavigationKey::Down => Intent::LowerVolume(self.keymap.volume_step),
            NavigationKey::Right => Intent::SeekBy(step),
            NavigationKey::Left => Intent::SeekBy(-step),
        };
        Route {
            intent: Some(intent),
            reveal_controls: self.keymap.navigation_reveals_controls,
            prevent_default: false,
        }
    }

    /// Routes pointer activity on the media surface.
    #[must_use]
    pub fn route_media(&self, event: &InputEvent) -> Route {
        match event {
            InputEvent::Click => Route::reveal(Some(Intent::TogglePlayback)),
            InputEvent::PointerMove { .. } | InputEvent::PointerLeave => Route::reveal(None),
            _ => Route::ignored(),
        }
    }
}
