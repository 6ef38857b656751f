// SPDX-License-Identifier: MPL-2.0
//! `scrubline` is a media playback control surface for Iced applications.
//!
//! It sits between a continuously advancing media element and discrete user
//! input: keyboard shortcuts, drag-to-seek on a timeline, mute and volume
//! controls. Every action yields transient visual feedback, and the
//! on-screen controls hide after a short idle window.
//!
//! The media element, the container, the document-level event source and
//! the streaming engine are collaborators reached through the traits in
//! [`application::port`]. [`surface::ControlSurface`] binds them, turns
//! tagged deliveries into playback intents and hands
//! [`surface::Effect`]s back to the embedding UI.

#![doc(html_root_url = "https://docs.rs/scrubline/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod playback;
pub mod surface;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
