// SPDX-License-Identifier: MPL-2.0
//! Listener registration table.
//!
//! Every listener the surface registers is recorded here, keyed by the
//! source it was added to and a fresh [`ListenerId`]. Teardown walks the
//! table and issues the matching removal for each entry, so adds and removes
//! always balance.

use crate::application::port::{Channel, EventTarget, ListenerId, StreamingEngine};
use std::fmt;

/// Where a listener is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Document level: keyboard and scrub drag tracking.
    Document,
    /// The media element surface.
    Media,
    /// The scrub track inside the container.
    Track,
    /// The streaming engine.
    Stream,
}

impl Source {
    /// Channels the surface subscribes to on this source.
    #[must_use]
    pub fn channels(self) -> &'static [Channel] {
        match self {
            Self::Document => &[
                Channel::KeyPress,
                Channel::KeyDown,
                Channel::PointerMove,
                Channel::PointerUp,
            ],
            Self::Media => &[Channel::Click, Channel::PointerMove, Channel::PointerLeave],
            Self::Track => &[Channel::PointerDown],
            Self::Stream => &[Channel::FragmentLoaded],
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Document => "document",
            Self::Media => "media",
            Self::Track => "track",
            Self::Stream => "stream",
        };
        f.write_str(name)
    }
}

/// One live registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub source: Source,
    pub channel: Channel,
    pub listener: ListenerId,
}

/// Table of live registrations.
#[derive(Debug, Default)]
pub struct Bindings {
    entries: Vec<Registration>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every channel of `source` on `target`.
    pub fn attach(&mut self, source: Source, target: &mut dyn EventTarget) {
        for &channel in source.channels() {
            let listener = ListenerId::new();
            target.add_listener(channel, listener);
            self.entries.push(Registration {
                source,
                channel,
                listener,
            });
        }
    }

    /// Subscribes to fragment notifications on the streaming engine.
    pub fn attach_stream(&mut self, stream: &mut dyn StreamingEngine) {
        let listener = ListenerId::new();
        stream.on_fragment_loaded(listener);
        self.entries.push(Registration {
            source: Source::Stream,
            channel: Channel::FragmentLoaded,
            listener,
        });
    }

    /// Removes every registration made on `source` from `target`.
    pub fn detach(&mut self, source: Source, target: &mut dyn EventTarget) {
        self.entries.retain(|entry| {
            if entry.source != source {
                return true;
            }
            target.remove_listener(entry.channel, entry.listener);
            false
        });
    }

    /// Unsubscribes from the streaming engine.
    pub fn detach_stream(&mut self, stream: &mut dyn StreamingEngine) {
        self.entries.retain(|entry| {
            if entry.source != Source::Stream {
                return true;
            }
            stream.off_fragment_loaded(entry.listener);
            false
        });
    }

    /// Forgets registrations on `source` whose target is already gone.
    pub fn forget(&mut self, source: Source) {
        self.entries.retain(|entry| entry.source != source);
    }

    /// Looks up a delivery's listener.
    #[must_use]
    pub fn lookup(&self, listener: ListenerId) -> Option<Registration> {
        self.entries
            .iter()
            .find(|entry| entry.listener == listener)
            .copied()
    }

    /// Listener registered for `channel` on `source`, if any.
    #[must_use]
    pub fn listener_for(&self, source: Source, channel: Channel) -> Option<ListenerId> {
        self.entries
            .iter()
            .find(|entry| entry.source == source && entry.channel == channel)
            .map(|entry| entry.listener)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
