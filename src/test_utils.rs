// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and recording collaborator mocks.
//!
//! The `approx` macros handle floating-point precision issues that
//! `assert_eq!` cannot. The mocks share their state through `Rc<RefCell<_>>`
//! so a test keeps a handle after boxing a clone into the surface.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::application::port::{
    Channel, Container, EventTarget, ListenerId, MediaElement, PlatformError, StreamingEngine,
    TrackBounds,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

// =============================================================================
// ListenerLog
// =============================================================================

/// Every add/remove call a mock target received, in order.
#[derive(Debug, Clone, Default)]
pub struct ListenerLog {
    pub added: Vec<(Channel, ListenerId)>,
    pub removed: Vec<(Channel, ListenerId)>,
}

impl ListenerLog {
    /// Number of registrations not yet removed.
    pub fn active(&self) -> usize {
        self.active_pairs().len()
    }

    /// Registrations not yet removed.
    pub fn active_pairs(&self) -> Vec<(Channel, ListenerId)> {
        self.added
            .iter()
            .filter(|pair| !self.removed.contains(pair))
            .copied()
            .collect()
    }

    /// The live listener for `channel`, if exactly one exists.
    pub fn listener_for(&self, channel: Channel) -> Option<ListenerId> {
        let live: Vec<ListenerId> = self
            .active_pairs()
            .into_iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, id)| id)
            .collect();
        match live.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    fn add(&mut self, channel: Channel, listener: ListenerId) {
        self.added.push((channel, listener));
    }

    fn remove(&mut self, channel: Channel, listener: ListenerId) {
        self.removed.push((channel, listener));
    }
}

// =============================================================================
// MockMedia
// =============================================================================

/// Calls received by a [`MockMedia`].
#[derive(Debug, Clone, Default)]
pub struct MediaLog {
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seeks: Vec<f64>,
    pub volume_sets: Vec<f64>,
    pub listeners: ListenerLog,
}

#[derive(Debug)]
struct MediaInner {
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    muted: bool,
    log: MediaLog,
}

/// Media element double that behaves like a paused, loaded video.
#[derive(Debug, Clone)]
pub struct MockMedia(Rc<RefCell<MediaInner>>);

impl MockMedia {
    pub fn new(duration: f64) -> Self {
        Self(Rc::new(RefCell::new(MediaInner {
            paused: true,
            current_time: 0.0,
            duration,
            volume: 1.0,
            muted: false,
            log: MediaLog::default(),
        })))
    }

    pub fn log(&self) -> MediaLog {
        self.0.borrow().log.clone()
    }

    /// Simulates the playhead advancing on its own.
    pub fn advance_to(&self, secs: f64) {
        self.0.borrow_mut().current_time = secs;
    }

    pub fn set_reported_duration(&self, secs: f64) {
        self.0.borrow_mut().duration = secs;
    }

    pub fn set_level(&self, level: f64) {
        self.0.borrow_mut().volume = level;
    }

    pub fn set_muted_flag(&self, muted: bool) {
        self.0.borrow_mut().muted = muted;
    }

    /// Simulates the element starting or stopping without a controller call.
    pub fn set_paused_flag(&self, paused: bool) {
        self.0.borrow_mut().paused = paused;
    }
}

impl EventTarget for MockMedia {
    fn add_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().log.listeners.add(channel, listener);
    }

    fn remove_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().log.listeners.remove(channel, listener);
    }
}

impl MediaElement for MockMedia {
    fn play(&mut self) {
        let mut inner = self.0.borrow_mut();
        inner.paused = false;
        inner.log.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut inner = self.0.borrow_mut();
        inner.paused = true;
        inner.log.pause_calls += 1;
    }

    fn is_paused(&self) -> bool {
        self.0.borrow().paused
    }

    fn current_time(&self) -> f64 {
        self.0.borrow().current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        let mut inner = self.0.borrow_mut();
        inner.current_time = secs;
        inner.log.seeks.push(secs);
    }

    fn duration(&self) -> f64 {
        self.0.borrow().duration
    }

    fn volume(&self) -> f64 {
        self.0.borrow().volume
    }

    fn set_volume(&mut self, level: f64) {
        let mut inner = self.0.borrow_mut();
        inner.volume = level;
        inner.log.volume_sets.push(level);
    }

    fn is_muted(&self) -> bool {
        self.0.borrow().muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.0.borrow_mut().muted = muted;
    }
}

// =============================================================================
// MockContainer
// =============================================================================

/// Calls received by a [`MockContainer`].
#[derive(Debug, Clone, Default)]
pub struct ContainerLog {
    pub fullscreen_requests: usize,
    pub fullscreen_exits: usize,
    pub listeners: ListenerLog,
}

#[derive(Debug)]
struct ContainerInner {
    bounds: Option<TrackBounds>,
    fullscreen: bool,
    deny_fullscreen: bool,
    log: ContainerLog,
}

/// Container double with a fixed scrub track.
#[derive(Debug, Clone)]
pub struct MockContainer(Rc<RefCell<ContainerInner>>);

impl MockContainer {
    pub fn new(bounds: TrackBounds) -> Self {
        Self(Rc::new(RefCell::new(ContainerInner {
            bounds: Some(bounds),
            fullscreen: false,
            deny_fullscreen: false,
            log: ContainerLog::default(),
        })))
    }

    pub fn log(&self) -> ContainerLog {
        self.0.borrow().log.clone()
    }

    pub fn is_fullscreen_now(&self) -> bool {
        self.0.borrow().fullscreen
    }

    pub fn set_fullscreen_flag(&self, fullscreen: bool) {
        self.0.borrow_mut().fullscreen = fullscreen;
    }

    pub fn deny_fullscreen(&self) {
        self.0.borrow_mut().deny_fullscreen = true;
    }

    pub fn clear_bounds(&self) {
        self.0.borrow_mut().bounds = None;
    }
}

impl EventTarget for MockContainer {
    fn add_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().log.listeners.add(channel, listener);
    }

    fn remove_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().log.listeners.remove(channel, listener);
    }
}

impl Container for MockContainer {
    fn track_bounds(&self) -> Option<TrackBounds> {
        self.0.borrow().bounds
    }

    fn is_fullscreen(&self) -> bool {
        self.0.borrow().fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<(), PlatformError> {
        let mut inner = self.0.borrow_mut();
        inner.log.fullscreen_requests += 1;
        if inner.deny_fullscreen {
            return Err(PlatformError::FullscreenDenied("user gesture required".into()));
        }
        inner.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlatformError> {
        let mut inner = self.0.borrow_mut();
        inner.log.fullscreen_exits += 1;
        inner.fullscreen = false;
        Ok(())
    }
}

// =============================================================================
// MockDocument / MockStream
// =============================================================================

/// Document-level event target double.
#[derive(Debug, Clone, Default)]
pub struct MockDocument(Rc<RefCell<ListenerLog>>);

impl MockDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> ListenerLog {
        self.0.borrow().clone()
    }
}

impl EventTarget for MockDocument {
    fn add_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().add(channel, listener);
    }

    fn remove_listener(&mut self, channel: Channel, listener: ListenerId) {
        self.0.borrow_mut().remove(channel, listener);
    }
}

/// Streaming engine double.
#[derive(Debug, Clone, Default)]
pub struct MockStream(Rc<RefCell<ListenerLog>>);

impl MockStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> ListenerLog {
        self.0.borrow().clone()
    }
}

impl StreamingEngine for MockStream {
    fn on_fragment_loaded(&mut self, listener: ListenerId) {
        self.0
            .borrow_mut()
            .add(Channel::FragmentLoaded, listener);
    }

    fn off_fragment_loaded(&mut self, listener: ListenerId) {
        self.0
            .borrow_mut()
            .remove(Channel::FragmentLoaded, listener);
    }
}
