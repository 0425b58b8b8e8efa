// SPDX-License-Identifier: MPL-2.0
//! Video playback port definition.
//!
//! This module defines the [`VideoBackend`] trait through which the player
//! lifecycle manager drives the external media layer.
//!
//! # Design Notes
//!
//! - Commands are fire-and-forget, like a decoder command channel: the backend
//!   reports readiness, position, end of stream and failures back through
//!   [`Lightbox`](crate::Lightbox) entry points tagged with the [`SessionId`].
//! - Only the player lifecycle manager holds the backend; no other component
//!   may address the playback resource directly.
//! - Uses domain types only (`MediaUrl`, `SessionId`).

use crate::domain::media::MediaUrl;
use crate::domain::video::SessionId;

// =============================================================================
// VideoBackend Trait
// =============================================================================

/// Port for the video decode/render pipeline.
///
/// # Lifecycle
///
/// 1. `open()` creates the playback resource for a new session
/// 2. `play()` / `pause()` / `seek()` / `set_muted()` drive it
/// 3. `close()` releases it; no command for that session follows
pub trait VideoBackend {
    /// Creates the playback resource for `session` and starts preparing `url`.
    fn open(&mut self, session: SessionId, url: &MediaUrl, muted: bool);

    /// Starts or resumes playback.
    fn play(&mut self, session: SessionId);

    /// Pauses playback at the current position.
    fn pause(&mut self, session: SessionId);

    /// Moves the playhead to `position_secs`.
    fn seek(&mut self, session: SessionId, position_secs: f64);

    /// Applies the mute state immediately.
    fn set_muted(&mut self, session: SessionId, muted: bool);

    /// Releases the playback resource.
    fn close(&mut self, session: SessionId);
}

/// Backend that ignores every command.
///
/// Useful for galleries without video content and for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVideoBackend;

impl VideoBackend for NullVideoBackend {
    fn open(&mut self, _session: SessionId, _url: &MediaUrl, _muted: bool) {}
    fn play(&mut self, _session: SessionId) {}
    fn pause(&mut self, _session: SessionId) {}
    fn seek(&mut self, _session: SessionId, _position_secs: f64) {}
    fn set_muted(&mut self, _session: SessionId, _muted: bool) {}
    fn close(&mut self, _session: SessionId) {}
}
