// SPDX-License-Identifier: MPL-2.0
//! Control surface composition root.
//!
//! [`ControlSurface`] wires the collaborators to the controller, router,
//! scrub state machine and buffer tracker. The platform hands it tagged
//! [`Delivery`] values and periodic ticks; it answers with [`Effect`]s for
//! the embedding UI and keeps a [`ControlsView`] ready for rendering.
//!
//! # Lifecycle
//!
//! - [`ControlSurface::bind`] registers one listener per channel and source
//! - [`ControlSurface::unbind`] removes exactly those listeners and hands the
//!   collaborators back
//! - Rebinding tears down the previous binding first; dropping a bound
//!   surface unbinds it
//!
//! Handlers read the controller's state at dispatch time, so state changes
//! never require re-registration.

use crate::application::port::{
    Container, EventTarget, MediaElement, StreamingEngine, TrackBounds,
};
use crate::config::ControlSettings;
use crate::domain::playback::{FeedbackEvent, PlaybackState};
use crate::input::keys::split_key_event;
use crate::input::{Bindings, Delivery, InputEvent, InputRouter, Route, Source};
use crate::playback::{BufferTracker, PlaybackController};
use crate::ui::feedback::{ActiveFeedback, FeedbackDispatcher};
use crate::ui::state::{ScrubState, VisibilityWindow};
use crate::ui::{ControlsView, ViewFlags};
use iced::keyboard;
use iced::{time, Subscription};
use std::time::{Duration, Instant};


/// Collaborators the surface binds to. Any of them may be absent.
#[derive(Default)]
pub struct Collaborators {
    /// Document-level target for keyboard and drag tracking.
    pub document: Option<Box<dyn EventTarget>>,
    pub media: Option<Box<dyn MediaElement>>,
    pub container: Option<Box<dyn Container>>,
    pub stream: Option<Box<dyn StreamingEngine>>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("has_document", &self.document.is_some())
            .field("has_media", &self.media.is_some())
            .field("has_container", &self.container.is_some())
            .field("has_stream", &self.stream.is_some())
            .finish()
    }
}

/// Effects produced for the embedding application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Keep the controls visible for this long.
    ShowControls(Duration),
    /// Show this feedback glyph.
    ShowFeedback(FeedbackEvent),
    /// Suppress the platform's default handling of the key.
    PreventDefault,
    /// Playback, scrub or buffer state changed; re-render.
    StateChanged,
}

/// Messages for iced applications embedding the surface.
#[derive(Debug, Clone)]
pub enum Message {
    /// Poll tick from [`ControlSurface::subscription`].
    Tick(Instant),
    /// Tagged platform notification.
    Input(Delivery),
    /// Raw iced keyboard event, routed to the document listeners.
    Keyboard(keyboard::Event),
}

/// The media control surface.
pub struct ControlSurface {
    settings: ControlSettings,
    router: InputRouter,
    controller: PlaybackController,
    buffer: BufferTracker,
    scrub: ScrubState,
    visibility: VisibilityWindow,
    feedback: FeedbackDispatcher,
    bindings: Bindings,
    document: Option<Box<dyn EventTarget>>,
    stream: Option<Box<dyn StreamingEngine>>,
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("controller", &self.controller)
            .field("scrub", &self.scrub)
            .field("listeners", &self.bindings.len())
            .finish_non_exhaustive()
    }
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self::new(ControlSettings::default())
    }
}

impl ControlSurface {
    #[must_use]
    pub fn new(settings: ControlSettings) -> Self {
        Self {
            settings,
            router: InputRouter::new(settings.keymap()),
            controller: PlaybackController::new(),
            buffer: BufferTracker::new(),
            scrub: ScrubState::default(),
            visibility: VisibilityWindow::default(),
            feedback: FeedbackDispatcher::new(settings.feedback_duration()),
            bindings: Bindings::new(),
            document: None,
            stream: None,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ControlSettings {
        &self.settings
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        self.controller.state()
    }

    /// Direct access to the controller, for UI buttons and sliders.
    pub fn controller_mut(&mut self) -> &mut PlaybackController {
        &mut self.controller
    }

    #[must_use]
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    #[must_use]
    pub fn loaded_until_secs(&self) -> f64 {
        self.buffer.loaded_until_secs()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        !self.bindings.is_empty() || self.controller.has_media()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Binds the collaborators, tearing down any previous binding first.
    ///
    /// Returns the collaborators of the previous binding, if any.
    pub fn bind(&mut self, collaborators: Collaborators) -> Option<Collaborators> {
        let previous = self.is_bound().then(|| self.unbind());

        let Collaborators {
            document,
            media,
            container,
            stream,
        } = collaborators;

        if let Some(mut document) = document {
            self.bindings.attach(Source::Document, document.as_mut());
            self.document = Some(document);
        }
        if let Some(mut media) = media {
            self.bindings.attach(Source::Media, media.as_mut());
            self.controller.attach_media(media);
        }
        if let Some(mut container) = container {
            self.bindings.attach(Source::Track, container.as_mut());
            self.controller.attach_container(container);
        }
        if let Some(mut stream) = stream {
            self.bindings.attach_stream(stream.as_mut());
            self.stream = Some(stream);
        }

        self.buffer.reset();
        tracing::debug!(
            listeners = self.bindings.len(),
            media = self.controller.has_media(),
            "control surface bound"
        );
        previous
    }

    /// Removes every registered listener and returns the collaborators.
    ///
    /// Hides the controls and drops any feedback glyph on screen.
    ///
    /// Safe to call when nothing is bound.
    pub fn unbind(&mut self) -> Collaborators {
        let registered = self.bindings.len();

        if let Some(document) = self.document.as_deref_mut() {
            self.bindings.detach(Source::Document, document);
        }
        if let Some(media) = self.controller.media_mut() {
            self.bindings.detach(Source::Media, media);
        }
        if let Some(container) = self.controller.container_mut() {
            self.bindings.detach(Source::Track, container);
        }
        if let Some(stream) = self.stream.as_deref_mut() {
            self.bindings.detach_stream(stream);
        }

        // Anything left belongs to a collaborator that is already gone.
        for source in [Source::Document, Source::Media, Source::Track, Source::Stream] {
            self.bindings.forget(source);
        }

        self.scrub.release();
        self.visibility.hide();
        self.feedback.clear();
        let (media, container) = self.controller.detach();
        tracing::debug!(removed = registered, "control surface unbound");

        Collaborators {
            document: self.document.take(),
            media,
            container,
            stream: self.stream.take(),
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handles one tagged platform notification.
    ///
    /// Deliveries for listeners that are no longer registered, or whose event
    /// does not match the registered channel, are ignored.
    pub fn dispatch(&mut self, delivery: Delivery, now: Instant) -> Vec<Effect> {
        let Some(registration) = self.bindings.lookup(delivery.listener) else {
            tracing::trace!(listener = %delivery.listener, "stale delivery ignored");
            return Vec::new();
        };
        if registration.channel != delivery.event.channel() {
            tracing::debug!(
                listener = %delivery.listener,
                registered = %registration.channel,
                received = %delivery.event.channel(),
                "delivery on mismatched channel ignored"
            );
            return Vec::new();
        }

        let mut effects = Vec::new();
        match (registration.source, delivery.event) {
            (Source::Document, InputEvent::KeyPress { key, modifiers }) => {
                let route =
                    self.router
                        .route_key_press(&key, modifiers, self.controller.is_fullscreen());
                self.apply_route(route, now, &mut effects);
                self.sync_position(&mut effects);
            }
            (Source::Document, InputEvent::KeyDown { key, .. }) => {
                let route = self.router.route_key_down(&key);
                self.apply_route(route, now, &mut effects);
                self.sync_position(&mut effects);
            }
            (Source::Document, InputEvent::PointerMove { position }) => {
                let bounds = self.track_bounds();
                if let Some(ratio) = self.scrub.drag(position, bounds) {
                    self.controller.seek_to_fraction(ratio);
                    effects.push(Effect::StateChanged);
                }
            }
            (Source::Document, InputEvent::PointerUp) => {
                if self.scrub.release() {
                    effects.push(Effect::StateChanged);
                }
            }
            (Source::Track, InputEvent::PointerDown { position }) => {
                let bounds = self.track_bounds();
                if let Some(ratio) = self.scrub.press(position, bounds) {
                    self.controller.seek_to_fraction(ratio);
                    effects.push(Effect::StateChanged);
                }
            }
            (Source::Media, event) => {
                let route = self.router.route_media(&event);
                self.apply_route(route, now, &mut effects);
            }
            (Source::Stream, InputEvent::FragmentLoaded(fragment)) => {
                self.buffer.on_fragment_loaded(fragment);
                effects.push(Effect::StateChanged);
            }
            (source, event) => {
                tracing::trace!(%source, channel = %event.channel(), "unhandled delivery");
            }
        }
        effects
    }

    /// Routes an iced keyboard event through the document listeners.
    pub fn handle_keyboard(&mut self, event: &keyboard::Event, now: Instant) -> Vec<Effect> {
        self.keyboard_deliveries(event)
            .into_iter()
            .flat_map(|delivery| self.dispatch(delivery, now))
            .collect()
    }

    /// Tags an iced keyboard event with the document's registered listeners.
    #[must_use]
    pub fn keyboard_deliveries(&self, event: &keyboard::Event) -> Vec<Delivery> {
        split_key_event(event)
            .into_iter()
            .filter_map(|event| {
                self.bindings
                    .listener_for(Source::Document, event.channel())
                    .map(|listener| Delivery::new(listener, event))
            })
            .collect()
    }

    fn apply_route(&mut self, route: Route, now: Instant, effects: &mut Vec<Effect>) {
        if route.prevent_default {
            effects.push(Effect::PreventDefault);
        }
        if let Some(intent) = route.intent {
            if let Some(feedback) = self.controller.apply(intent) {
                self.feedback.show(feedback, now);
                effects.push(Effect::ShowFeedback(feedback));
            }
            effects.push(Effect::StateChanged);
        }
        if route.reveal_controls {
            let window = self.show_controls(now);
            effects.push(Effect::ShowControls(window));
        }
    }

    fn sync_position(&mut self, effects: &mut Vec<Effect>) {
        if self.controller.refresh_position() && !effects.contains(&Effect::StateChanged) {
            effects.push(Effect::StateChanged);
        }
    }

    fn track_bounds(&self) -> Option<TrackBounds> {
        self.controller
            .container()
            .and_then(|container| container.track_bounds())
    }

    // =========================================================================
    // Polling
    // =========================================================================

    /// Runs one poll tick. Does nothing while both the element and the
    /// snapshot are paused.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.feedback.expire(now);
        if !self.polling() {
            return Vec::new();
        }
        if self.controller.poll() {
            vec![Effect::StateChanged]
        } else {
            Vec::new()
        }
    }

    /// Poll subscription: ticks while media is bound and playing.
    ///
    /// Pausing drops the subscription, which cancels the timer. An element
    /// that starts on its own (autoplay) starts the timer as well.
    pub fn subscription(&self) -> Subscription<Instant> {
        if self.polling() {
            time::every(self.settings.poll_interval().as_duration())
        } else {
            Subscription::none()
        }
    }

    fn polling(&self) -> bool {
        self.controller.is_playing()
            || (self.controller.has_media() && !self.controller.state().is_paused())
    }

    /// Handles a [`Message`].
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Input(delivery) => self.dispatch(delivery, Instant::now()),
            Message::Keyboard(event) => self.handle_keyboard(&event, Instant::now()),
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Keeps the controls visible for the configured window.
    pub fn show_controls(&mut self, now: Instant) -> Duration {
        let window = self.settings.visibility_timeout().as_duration();
        self.visibility.show_for(window, now);
        window
    }

    #[must_use]
    pub fn controls_visible(&self, now: Instant) -> bool {
        self.visibility.is_visible(now)
    }

    #[must_use]
    pub fn active_feedback(&self, now: Instant) -> Option<ActiveFeedback> {
        self.feedback.current(now)
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self, now: Instant) -> ControlsView {
        let state = self.controller.state();
        ControlsView::new(
            state,
            ViewFlags {
                loaded_ratio: self.buffer.loaded_ratio(state.duration_secs()),
                is_scrubbing: self.scrub.is_scrubbing(),
                is_fullscreen: self.controller.is_fullscreen(),
                controls_visible: self.controls_visible(now),
                feedback: self.active_feedback(now),
            },
        )
    }
}

impl Drop for ControlSurface {
    fn drop(&mut self) {
        if self.is_bound() {
            drop(self.unbind());
        }
    }
}
