// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// SessionId
// =============================================================================

/// Identifier of one playback session (load-to-teardown cycle).
///
/// Reports and scheduled ticks carry the id of the session they belong to, so
/// anything addressed to a torn-down session can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Creates a session id from a raw counter value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds (0.5 to 60.0 seconds).
pub mod skip_step_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip step in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Relative jump applied by the skip-forward/skip-backward transport buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range. NaN falls back to
    /// the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipGuard
// =============================================================================

/// End guard bounds (0.0 to 30.0 seconds).
pub mod skip_guard_bounds {
    /// Minimum guard (no guard).
    pub const MIN: f64 = 0.0;
    /// Maximum guard in seconds.
    pub const MAX: f64 = 30.0;
    /// Default guard in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Portion at the end of a video that a forward skip never jumps into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipGuard(f64);

impl SkipGuard {
    /// Creates a new guard, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_guard_bounds::MIN, skip_guard_bounds::MAX))
    }

    /// Returns the guard in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Latest position a forward skip may reach for a video of `duration_secs`.
    #[must_use]
    pub fn limit_for(self, duration_secs: f64) -> f64 {
        (duration_secs - self.0).max(0.0)
    }
}

impl Default for SkipGuard {
    fn default() -> Self {
        Self(skip_guard_bounds::DEFAULT)
    }
}

// =============================================================================
// ProgressInterval
// =============================================================================

/// Progress callback cadence bounds in milliseconds.
pub mod progress_interval_bounds {
    /// Minimum interval (about 60 ticks per second).
    pub const MIN_MS: u64 = 16;
    /// Maximum interval.
    pub const MAX_MS: u64 = 1_000;
    /// Default interval (10 ticks per second).
    pub const DEFAULT_MS: u64 = 100;
}

/// Cadence of the periodic `(position, remaining)` progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInterval(Duration);

impl ProgressInterval {
    /// Creates a new interval from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms.clamp(
            progress_interval_bounds::MIN_MS,
            progress_interval_bounds::MAX_MS,
        )))
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(Duration::from_millis(progress_interval_bounds::DEFAULT_MS))
    }
}

// =============================================================================
// Tests
// =============================================================================
