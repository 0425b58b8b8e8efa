// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Gallery**: Preload window, edge threshold, start page and layout
//! - **Video**: Mute/loop policy, progress cadence and skip policy
//! - **Timing**: Delays of deferred gallery work

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default number of pages materialized on each side of the current page.
pub const DEFAULT_PRELOAD_RADIUS: usize = 1;

/// Largest accepted preload radius.
pub const MAX_PRELOAD_RADIUS: usize = 64;

/// Default distance from either end that triggers edge notifications.
pub const DEFAULT_ITEMS_TO_END_THRESHOLD: usize = 3;

/// Largest accepted edge threshold.
pub const MAX_ITEMS_TO_END_THRESHOLD: usize = 100;

/// Default page shown when the gallery opens.
pub const DEFAULT_START_INDEX: usize = 0;

/// Default horizontal gap between pages (points).
pub const DEFAULT_PAGE_SPACING: f32 = 20.0;

/// Largest accepted page gap (points).
pub const MAX_PAGE_SPACING: f32 = 200.0;

/// Whether the status bar is hidden while the gallery is presented.
pub const DEFAULT_HIDE_STATUS_BAR: bool = true;

/// Whether the blurred background follows the current page.
pub const DEFAULT_DYNAMIC_BACKGROUND: bool = false;

// ==========================================================================
// Video Defaults
// ==========================================================================

/// Whether new sessions start muted.
pub const DEFAULT_START_MUTED: bool = false;

/// Whether playback restarts at the end.
pub const DEFAULT_LOOP_PLAYBACK: bool = true;

/// Default progress callback cadence (10 per second).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;

/// Fastest accepted progress cadence (~60 per second).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 16;

/// Slowest accepted progress cadence.
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 1_000;

/// Default skip distance for the skip buttons.
pub const DEFAULT_SKIP_STEP_SECS: f64 = 5.0;

/// Smallest accepted skip distance.
pub const MIN_SKIP_STEP_SECS: f64 = 0.5;

/// Largest accepted skip distance.
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

/// Forward skips stop this far before the end of the video.
pub const DEFAULT_SKIP_END_GUARD_SECS: f64 = 5.0;

/// Largest accepted end guard.
pub const MAX_SKIP_END_GUARD_SECS: f64 = 30.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Delay before the dynamic background follows a page change.
pub const DEFAULT_BACKGROUND_REFRESH_DELAY_MS: u64 = 125;

/// Delay between a delete request and the removal of the entry.
pub const DEFAULT_DELETE_SETTLE_DELAY_MS: u64 = 500;

/// Longest accepted delay for deferred gallery work.
pub const MAX_DEFERRED_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gallery validation
    assert!(DEFAULT_PRELOAD_RADIUS <= MAX_PRELOAD_RADIUS);
    assert!(DEFAULT_ITEMS_TO_END_THRESHOLD <= MAX_ITEMS_TO_END_THRESHOLD);
    assert!(DEFAULT_PAGE_SPACING >= 0.0);
    assert!(DEFAULT_PAGE_SPACING <= MAX_PAGE_SPACING);

    // Video validation
    assert!(MIN_PROGRESS_INTERVAL_MS > 0);
    assert!(MAX_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS >= MIN_PROGRESS_INTERVAL_MS);
    assert!(DEFAULT_PROGRESS_INTERVAL_MS <= MAX_PROGRESS_INTERVAL_MS);
    assert!(MIN_SKIP_STEP_SECS > 0.0);
    assert!(DEFAULT_SKIP_STEP_SECS >= MIN_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_STEP_SECS <= MAX_SKIP_STEP_SECS);
    assert!(DEFAULT_SKIP_END_GUARD_SECS >= 0.0);
    assert!(DEFAULT_SKIP_END_GUARD_SECS <= MAX_SKIP_END_GUARD_SECS);

    // Timing validation
    assert!(DEFAULT_BACKGROUND_REFRESH_DELAY_MS <= MAX_DEFERRED_DELAY_MS);
    assert!(DEFAULT_DELETE_SETTLE_DELAY_MS <= MAX_DEFERRED_DELAY_MS);
};
