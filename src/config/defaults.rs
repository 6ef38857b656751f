// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the control surface. Constants are organized by category.
//!
//! # Categories
//!
//! - **Visibility**: How long controls stay visible after input
//! - **Feedback**: Transient glyph display duration
//! - **Polling**: Position refresh cadence while playing
//! - **Keyboard**: Seek jumps and arrow-key steps
//! - **Volume**: Percent bounds and arrow-key step

// ==========================================================================
// Visibility Defaults
// ==========================================================================

/// Default time controls stay visible after a qualifying input (in seconds).
pub const DEFAULT_VISIBILITY_TIMEOUT_SECS: u32 = 2;

/// Minimum visibility timeout (in seconds).
pub const MIN_VISIBILITY_TIMEOUT_SECS: u32 = 1;

/// Maximum visibility timeout (in seconds).
pub const MAX_VISIBILITY_TIMEOUT_SECS: u32 = 30;

/// Whether arrow keys keep the controls visible.
pub const DEFAULT_NAVIGATION_KEYS_REVEAL_CONTROLS: bool = false;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long a feedback glyph stays on screen before fading out (in milliseconds).
pub const DEFAULT_FEEDBACK_DURATION_MS: u64 = 600;

/// Minimum feedback duration (in milliseconds).
pub const MIN_FEEDBACK_DURATION_MS: u64 = 100;

/// Maximum feedback duration (in milliseconds).
pub const MAX_FEEDBACK_DURATION_MS: u64 = 5_000;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Position poll interval while playing (in milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Minimum poll interval (roughly one frame at 60 Hz).
pub const MIN_POLL_INTERVAL_MS: u64 = 16;

/// Maximum poll interval (in milliseconds).
pub const MAX_POLL_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Arrow-key seek step (in seconds).
pub const DEFAULT_ARROW_SEEK_STEP_SECS: f64 = 5.0;

/// Minimum arrow-key seek step (in seconds).
pub const MIN_ARROW_SEEK_STEP_SECS: f64 = 0.5;

/// Maximum arrow-key seek step (in seconds).
pub const MAX_ARROW_SEEK_STEP_SECS: f64 = 30.0;

/// Forward jump bound to `l` (in seconds).
pub const DEFAULT_FORWARD_JUMP_SECS: f64 = 10.0;

/// Backward jump bound to `j` (in seconds). Deliberately one second longer
/// than the forward jump.
pub const DEFAULT_BACKWARD_JUMP_SECS: f64 = 11.0;

/// Upper bound for either jump (in seconds).
pub const MAX_JUMP_SECS: f64 = 300.0;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume used before a media element reports its own level.
pub const DEFAULT_VOLUME_PERCENT: u8 = 100;

/// Minimum volume percent.
pub const MIN_VOLUME_PERCENT: u8 = 0;

/// Maximum volume percent.
pub const MAX_VOLUME_PERCENT: u8 = 100;

/// Volume adjustment per arrow key press (in percent).
pub const DEFAULT_VOLUME_STEP_PERCENT: u8 = 5;

/// Maximum arrow-key volume step (in percent).
pub const MAX_VOLUME_STEP_PERCENT: u8 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Visibility validation
    assert!(MIN_VISIBILITY_TIMEOUT_SECS > 0);
    assert!(MAX_VISIBILITY_TIMEOUT_SECS >= MIN_VISIBILITY_TIMEOUT_SECS);
    assert!(DEFAULT_VISIBILITY_TIMEOUT_SECS >= MIN_VISIBILITY_TIMEOUT_SECS);
    assert!(DEFAULT_VISIBILITY_TIMEOUT_SECS <= MAX_VISIBILITY_TIMEOUT_SECS);

    // Feedback validation
    assert!(MIN_FEEDBACK_DURATION_MS > 0);
    assert!(DEFAULT_FEEDBACK_DURATION_MS >= MIN_FEEDBACK_DURATION_MS);
    assert!(DEFAULT_FEEDBACK_DURATION_MS <= MAX_FEEDBACK_DURATION_MS);

    // Poll validation
    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);

    // Keyboard validation
    assert!(MIN_ARROW_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_ARROW_SEEK_STEP_SECS >= MIN_ARROW_SEEK_STEP_SECS);
    assert!(DEFAULT_ARROW_SEEK_STEP_SECS <= MAX_ARROW_SEEK_STEP_SECS);
    assert!(DEFAULT_FORWARD_JUMP_SECS > 0.0);
    assert!(DEFAULT_BACKWARD_JUMP_SECS > 0.0);
    assert!(DEFAULT_FORWARD_JUMP_SECS <= MAX_JUMP_SECS);
    assert!(DEFAULT_BACKWARD_JUMP_SECS <= MAX_JUMP_SECS);

    // Volume validation
    assert!(MAX_VOLUME_PERCENT > MIN_VOLUME_PERCENT);
    assert!(DEFAULT_VOLUME_PERCENT <= MAX_VOLUME_PERCENT);
    assert!(DEFAULT_VOLUME_STEP_PERCENT > 0);
    assert!(DEFAULT_VOLUME_STEP_PERCENT <= MAX_VOLUME_STEP_PERCENT);
};
