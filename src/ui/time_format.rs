// SPDX-License-Identifier: MPL-2.0
//! Playback time labels.

/// Formats a position in `MM:SS`, or `H:MM:SS` from one hour on.
///
/// The value is rounded to the nearest second first. Hours are not padded.
/// Negative and NaN inputs display as `00:00`.
#[must_use]
pub fn format_time(seconds: f64) -> String {
    let rounded = seconds.round();
    let total_secs = if rounded.is_finite() && rounded > 0.0 {
        // Truncation is exact after rounding; out-of-range values saturate.
        rounded as u64
    } else {
        0
    };
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}
