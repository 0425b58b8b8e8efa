// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox configuration, including loading and saving
//! options to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[gallery]` - Paging, preloading and layout options
//! - `[video]` - Playback policy (mute, loop, progress cadence, skip)
//! - `[timing]` - Delays of deferred gallery work
//!
//! Every field is optional; missing fields fall back to the constants in
//! [`defaults`]. Out-of-range values are clamped when the runtime settings
//! are derived ([`Config::gallery_settings`], [`Config::video_settings`],
//! [`Config::timing`]).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `LIGHTBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lightbox_core::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.preload_radius = Some(2);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::gallery::{EdgeThreshold, PageSpacing, PreloadRadius};
use crate::domain::video::{ProgressInterval, SkipGuard, SkipStep};
use crate::error::{Error, Result};
use crate::gallery::GallerySettings;
use crate::scheduler::TimingSettings;
use crate::video_player::VideoSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Paging and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Pages kept materialized on each side of the current page (0 = all).
    #[serde(
        default = "default_preload_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub preload_radius: Option<usize>,

    /// Distance from either end that triggers edge notifications.
    #[serde(
        default = "default_items_to_end_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_to_end_threshold: Option<usize>,

    /// Page shown when the gallery opens.
    #[serde(default = "default_start_index", skip_serializing_if = "Option::is_none")]
    pub start_index: Option<usize>,

    /// Horizontal gap between pages.
    #[serde(
        default = "default_page_spacing",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_spacing: Option<f32>,

    /// Hide the status bar while presented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_status_bar: Option<bool>,

    /// Blurred background follows the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_background: Option<bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            preload_radius: default_preload_radius(),
            items_to_end_threshold: default_items_to_end_threshold(),
            start_index: default_start_index(),
            page_spacing: default_page_spacing(),
            hide_status_bar: Some(DEFAULT_HIDE_STATUS_BAR),
            dynamic_background: Some(DEFAULT_DYNAMIC_BACKGROUND),
        }
    }
}

/// Video playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Whether new sessions start muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_muted: Option<bool>,

    /// Whether playback restarts at the end.
    #[serde(
        default = "default_loop_playback",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_playback: Option<bool>,

    /// Progress callback cadence in milliseconds.
    #[serde(
        default = "default_progress_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub progress_interval_ms: Option<u64>,

    /// Skip distance in seconds.
    #[serde(
        default = "default_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_step_secs: Option<f64>,

    /// Forward skips stop this many seconds before the end.
    #[serde(
        default = "default_skip_end_guard_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_end_guard_secs: Option<f64>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            start_muted: Some(DEFAULT_START_MUTED),
            loop_playback: default_loop_playback(),
            progress_interval_ms: default_progress_interval_ms(),
            skip_step_secs: default_skip_step_secs(),
            skip_end_guard_secs: default_skip_end_guard_secs(),
        }
    }
}

/// Delays of deferred gallery work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Delay before the dynamic background follows a page change.
    #[serde(
        default = "default_background_refresh_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_refresh_delay_ms: Option<u64>,

    /// Delay between a delete request and the removal of the entry.
    #[serde(
        default = "default_delete_settle_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_settle_delay_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            background_refresh_delay_ms: default_background_refresh_delay_ms(),
            delete_settle_delay_ms: default_delete_settle_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Lightbox configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Paging and layout settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Video playback settings.
    #[serde(default)]
    pub video: VideoConfig,

    /// Delays of deferred gallery work.
    #[serde(default)]
    pub timing: TimingConfig,
}

impl Config {
    /// Validated gallery settings; missing values use defaults, out-of-range
    /// values are clamped.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        let gallery = &self.gallery;
        GallerySettings {
            preload_radius: PreloadRadius::new(
                gallery.preload_radius.unwrap_or(DEFAULT_PRELOAD_RADIUS),
            ),
            edge_threshold: EdgeThreshold::new(
                gallery
                    .items_to_end_threshold
                    .unwrap_or(DEFAULT_ITEMS_TO_END_THRESHOLD),
            ),
            start_index: gallery.start_index.unwrap_or(DEFAULT_START_INDEX),
            page_spacing: PageSpacing::new(gallery.page_spacing.unwrap_or(DEFAULT_PAGE_SPACING)),
            hide_status_bar: gallery.hide_status_bar.unwrap_or(DEFAULT_HIDE_STATUS_BAR),
            dynamic_background: gallery
                .dynamic_background
                .unwrap_or(DEFAULT_DYNAMIC_BACKGROUND),
        }
    }

    /// Validated video settings.
    #[must_use]
    pub fn video_settings(&self) -> VideoSettings {
        let video = &self.video;
        VideoSettings {
            start_muted: video.start_muted.unwrap_or(DEFAULT_START_MUTED),
            loop_playback: video.loop_playback.unwrap_or(DEFAULT_LOOP_PLAYBACK),
            progress_interval: ProgressInterval::from_millis(
                video
                    .progress_interval_ms
                    .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
            ),
            skip_step: SkipStep::new(video.skip_step_secs.unwrap_or(DEFAULT_SKIP_STEP_SECS)),
            skip_guard: SkipGuard::new(
                video
                    .skip_end_guard_secs
                    .unwrap_or(DEFAULT_SKIP_END_GUARD_SECS),
            ),
        }
    }

    /// Validated delays, capped at [`MAX_DEFERRED_DELAY_MS`].
    #[must_use]
    pub fn timing(&self) -> TimingSettings {
        let delay = |value: Option<u64>, default: u64| {
            Duration::from_millis(value.unwrap_or(default).min(MAX_DEFERRED_DELAY_MS))
        };
        TimingSettings {
            background_refresh_delay: delay(
                self.timing.background_refresh_delay_ms,
                DEFAULT_BACKGROUND_REFRESH_DELAY_MS,
            ),
            delete_settle_delay: delay(
                self.timing.delete_settle_delay_ms,
                DEFAULT_DELETE_SETTLE_DELAY_MS,
            ),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_preload_radius() -> Option<usize> {
    Some(DEFAULT_PRELOAD_RADIUS)
}

fn default_items_to_end_threshold() -> Option<usize> {
    Some(DEFAULT_ITEMS_TO_END_THRESHOLD)
}

fn default_start_index() -> Option<usize> {
    Some(DEFAULT_START_INDEX)
}

fn default_page_spacing() -> Option<f32> {
    Some(DEFAULT_PAGE_SPACING)
}

fn default_loop_playback() -> Option<bool> {
    Some(DEFAULT_LOOP_PLAYBACK)
}

fn default_progress_interval_ms() -> Option<u64> {
    Some(DEFAULT_PROGRESS_INTERVAL_MS)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_skip_end_guard_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_END_GUARD_SECS)
}

fn default_background_refresh_delay_ms() -> Option<u64> {
    Some(DEFAULT_BACKGROUND_REFRESH_DELAY_MS)
}

fn default_delete_settle_delay_ms() -> Option<u64> {
    Some(DEFAULT_DELETE_SETTLE_DELAY_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default configuration");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
