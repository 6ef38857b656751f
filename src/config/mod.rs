// SPDX-License-Identifier: MPL-2.0
//! This module handles the control surface configuration, including loading
//! and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use scrubline::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.controls.visibility_timeout_secs = Some(4);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // Resolve the clamped runtime form
//! let settings = config.settings();
//! assert_eq!(settings.visibility_timeout().value(), 4);
//! ```

pub mod defaults;

use crate::domain::playback::{ControlsTimeout, KeyboardSeekStep, PollInterval};
use crate::error::Result;
use crate::input::KeyMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Scrubline";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "SCRUBLINE_CONFIG_DIR";

/// Visibility, feedback and polling preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default)]
    pub visibility_timeout_secs: Option<u32>,
    #[serde(default)]
    pub feedback_duration_ms: Option<u64>,
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    #[serde(default)]
    pub navigation_keys_reveal_controls: Option<bool>,
}

/// Keyboard shortcut amounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardConfig {
    #[serde(default)]
    pub arrow_seek_step_secs: Option<f64>,
    #[serde(default)]
    pub forward_jump_secs: Option<f64>,
    #[serde(default)]
    pub backward_jump_secs: Option<f64>,
    #[serde(default)]
    pub volume_step_percent: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Resolves every setting, applying defaults and clamping to valid ranges.
    #[must_use]
    pub fn settings(&self) -> ControlSettings {
        let controls = &self.controls;
        let keyboard = &self.keyboard;

        let feedback_ms = controls
            .feedback_duration_ms
            .unwrap_or(defaults::DEFAULT_FEEDBACK_DURATION_MS)
            .clamp(
                defaults::MIN_FEEDBACK_DURATION_MS,
                defaults::MAX_FEEDBACK_DURATION_MS,
            );

        let keymap = KeyMap {
            forward_jump_secs: jump_secs(
                keyboard.forward_jump_secs,
                defaults::DEFAULT_FORWARD_JUMP_SECS,
            ),
            backward_jump_secs: jump_secs(
                keyboard.backward_jump_secs,
                defaults::DEFAULT_BACKWARD_JUMP_SECS,
            ),
            arrow_seek_step: keyboard
                .arrow_seek_step_secs
                .map_or_else(KeyboardSeekStep::default, KeyboardSeekStep::new),
            volume_step: keyboard
                .volume_step_percent
                .unwrap_or(defaults::DEFAULT_VOLUME_STEP_PERCENT)
                .clamp(1, defaults::MAX_VOLUME_STEP_PERCENT),
            navigation_reveals_controls: controls
                .navigation_keys_reveal_controls
                .unwrap_or(defaults::DEFAULT_NAVIGATION_KEYS_REVEAL_CONTROLS),
        };

        ControlSettings {
            visibility_timeout: controls
                .visibility_timeout_secs
                .map_or_else(ControlsTimeout::default, ControlsTimeout::new),
            feedback_duration: Duration::from_millis(feedback_ms),
            poll_interval: controls
                .poll_interval_ms
                .map_or_else(PollInterval::default, PollInterval::new),
            keymap,
        }
    }
}

fn jump_secs(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(secs) if secs.is_finite() && secs > 0.0 => secs.min(defaults::MAX_JUMP_SECS),
        _ => default,
    }
}

/// Resolved runtime settings consumed by the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    visibility_timeout: ControlsTimeout,
    feedback_duration: Duration,
    poll_interval: PollInterval,
    keymap: KeyMap,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

impl ControlSettings {
    /// How long the controls stay visible after qualifying input.
    #[must_use]
    pub fn visibility_timeout(&self) -> ControlsTimeout {
        self.visibility_timeout
    }

    /// How long a feedback glyph stays on screen.
    #[must_use]
    pub fn feedback_duration(&self) -> Duration {
        self.feedback_duration
    }

    #[must_use]
    pub fn poll_interval(&self) -> PollInterval {
        self.poll_interval
    }

    #[must_use]
    pub fn keymap(&self) -> KeyMap {
        self.keymap
    }
}

/// Returns the config directory.
///
/// `SCRUBLINE_CONFIG_DIR` wins when set and non-empty; otherwise the
/// platform config directory (via `dirs`) with the application name appended.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, or defaults when no file exists.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from `path`. Invalid TOML falls back to defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid settings file, using defaults"
            );
            Ok(Config::default())
        }
    }
}

/// Saves the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file cannot be serialized or written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
