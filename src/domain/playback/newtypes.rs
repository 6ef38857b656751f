// SPDX-License-Identifier: MPL-2.0
//! Playback control newtypes.
//!
//! This module provides type-safe wrappers for control surface values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// VolumePercent
// =============================================================================

/// Volume bounds (0 to 100 percent).
pub mod volume_bounds {
    /// Minimum volume percent.
    pub const MIN: u8 = 0;
    /// Maximum volume percent.
    pub const MAX: u8 = 100;
    /// Default volume percent.
    pub const DEFAULT: u8 = 100;
    /// Volume adjustment per arrow key press.
    pub const STEP: u8 = 5;
}

/// Volume level in whole percent, guaranteed to be within 0–100.
///
/// Out-of-range requests are clamped, never rejected.
///
/// # Example
///
/// ```
/// use scrubline::domain::playback::VolumePercent;
///
/// assert_eq!(VolumePercent::new(150).value(), 100);
/// assert_eq!(VolumePercent::new(-3).value(), 0);
/// assert_eq!(VolumePercent::new(97).step_up(5).value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VolumePercent(u8);

impl VolumePercent {
    /// Silence.
    pub const ZERO: Self = Self(volume_bounds::MIN);

    /// Creates a new volume percent, clamping to valid range.
    #[must_use]
    pub fn new(percent: i32) -> Self {
        let clamped = percent.clamp(i32::from(volume_bounds::MIN), i32::from(volume_bounds::MAX));
        // In range after the clamp above.
        Self(clamped as u8)
    }

    /// Creates a volume percent from an element level in `0.0..=1.0`.
    ///
    /// Non-finite levels read as silence.
    #[must_use]
    pub fn from_level(level: f64) -> Self {
        if !level.is_finite() {
            return Self::ZERO;
        }
        Self::new((level * 100.0).round() as i32)
    }

    /// Returns the percent value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the level as expected by a media element (`0.0..=1.0`).
    #[must_use]
    pub fn as_level(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Returns true if the level is zero.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == volume_bounds::MIN
    }

    /// Raises the volume by `step`, snapping to the maximum when within one step.
    #[must_use]
    pub fn step_up(self, step: u8) -> Self {
        if self.0 < volume_bounds::MAX.saturating_sub(step) {
            Self(self.0 + step)
        } else {
            Self(volume_bounds::MAX)
        }
    }

    /// Lowers the volume by `step`, snapping to zero when within one step.
    #[must_use]
    pub fn step_down(self, step: u8) -> Self {
        if self.0 > step {
            Self(self.0 - step)
        } else {
            Self(volume_bounds::MIN)
        }
    }
}

impl Default for VolumePercent {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

impl std::fmt::Display for VolumePercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// ControlsTimeout
// =============================================================================

/// Visibility timeout bounds (1 to 30 seconds).
pub mod timeout_bounds {
    /// Minimum timeout in seconds.
    pub const MIN: u32 = 1;
    /// Maximum timeout in seconds.
    pub const MAX: u32 = 30;
    /// Default timeout in seconds.
    pub const DEFAULT: u32 = 2;
}

/// How long controls stay visible after the last qualifying input.
///
/// # Example
///
/// ```
/// use scrubline::domain::playback::ControlsTimeout;
///
/// let timeout = ControlsTimeout::new(100);
/// assert_eq!(timeout.value(), 30); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimeout(u32);

impl ControlsTimeout {
    /// Creates a new timeout, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(timeout_bounds::MIN, timeout_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(timeout_bounds::DEFAULT)
    }
}

// =============================================================================
// KeyboardSeekStep
// =============================================================================

/// Keyboard seek step bounds (0.5 to 30.0 seconds).
pub mod seek_step_bounds {
    /// Minimum keyboard seek step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum keyboard seek step in seconds.
    pub const MAX: f64 = 30.0;
    /// Default keyboard seek step in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Arrow-key seek step in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0.5–30.0 seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardSeekStep(f64);

impl KeyboardSeekStep {
    /// Creates a new keyboard seek step value, clamping to valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(seek_step_bounds::MIN, seek_step_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for KeyboardSeekStep {
    fn default() -> Self {
        Self(seek_step_bounds::DEFAULT)
    }
}

// =============================================================================
// PollInterval
// =============================================================================

/// Poll interval bounds (16 to 1000 milliseconds).
pub mod poll_bounds {
    /// Minimum interval in milliseconds.
    pub const MIN: u64 = 16;
    /// Maximum interval in milliseconds.
    pub const MAX: u64 = 1_000;
    /// Default interval in milliseconds.
    pub const DEFAULT: u64 = 100;
}

/// Cadence of the position poll while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollInterval(u64);

impl PollInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(poll_bounds::MIN, poll_bounds::MAX))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PollInterval {
    fn default() -> Self {
        Self(poll_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_new_clamps_to_valid_range() {
        assert_eq!(VolumePercent::new(-10).value(), 0);
        assert_eq!(VolumePercent::new(250).value(), 100);
        assert_eq!(VolumePercent::new(42).value(), 42);
    }

    #[test]
    fn volume_every_valid_percent_round_trips() {
        for percent in 0..=100 {
            assert_eq!(i32::from(VolumePercent::new(percent).value()), percent);
        }
    }

    #[test]
    fn volume_from_level_rounds_and_clamps() {
        assert_eq!(VolumePercent::from_level(0.7).value(), 70);
        assert_eq!(VolumePercent::from_level(0.004).value(), 0);
        assert_eq!(VolumePercent::from_level(1.5).value(), 100);
        assert_eq!(VolumePercent::from_level(f64::NAN).value(), 0);
    }

    #[test]
    fn volume_step_up_snaps_near_maximum() {
        assert_eq!(VolumePercent::new(50).step_up(5).value(), 55);
        assert_eq!(VolumePercent::new(94).step_up(5).value(), 99);
        assert_eq!(VolumePercent::new(95).step_up(5).value(), 100);
        assert_eq!(VolumePercent::new(98).step_up(5).value(), 100);
        assert_eq!(VolumePercent::new(100).step_up(5).value(), 100);
    }

    #[test]
    fn volume_step_down_snaps_near_zero() {
        assert_eq!(VolumePercent::new(50).step_down(5).value(), 45);
        assert_eq!(VolumePercent::new(6).step_down(5).value(), 1);
        assert_eq!(VolumePercent::new(5).step_down(5).value(), 0);
        assert_eq!(VolumePercent::new(3).step_down(5).value(), 0);
        assert_eq!(VolumePercent::ZERO.step_down(5).value(), 0);
    }

    #[test]
    fn volume_display_includes_percent_sign() {
        assert_eq!(VolumePercent::new(35).to_string(), "35%");
    }

    #[test]
    fn only_zero_volume_is_silent() {
        assert!(VolumePercent::ZERO.is_silent());
        assert!(!VolumePercent::new(1).is_silent());
        assert_eq!(VolumePercent::new(100).value(), volume_bounds::MAX);
    }

    #[test]
    fn timeout_clamps_and_converts() {
        assert_eq!(ControlsTimeout::new(0).value(), timeout_bounds::MIN);
        assert_eq!(ControlsTimeout::new(99).value(), timeout_bounds::MAX);
        assert_eq!(ControlsTimeout::default().as_duration(), Duration::from_secs(2));
    }

    #[test]
    fn seek_step_clamps_and_rejects_nan() {
        assert_eq!(KeyboardSeekStep::new(0.0).value(), seek_step_bounds::MIN);
        assert_eq!(KeyboardSeekStep::new(100.0).value(), seek_step_bounds::MAX);
        assert_eq!(KeyboardSeekStep::new(f64::NAN), KeyboardSeekStep::default());
        assert_eq!(
            KeyboardSeekStep::new(2.5).as_duration(),
            Duration::from_secs_f64(2.5)
        );
    }

    #[test]
    fn poll_interval_clamps() {
        assert_eq!(PollInterval::new(1).value(), poll_bounds::MIN);
        assert_eq!(PollInterval::new(10_000).value(), poll_bounds::MAX);
        assert_eq!(PollInterval::default().as_duration(), Duration::from_millis(100));
    }
}
