// SPDX-License-Identifier: MPL-2.0
//! Video playback state machine.
//!
//! This module defines the lifecycle states of a playback session:
//! `Idle → Loading → Ready → Playing ⇄ Paused → Ended`.

/// Represents the current status of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// No session exists.
    #[default]
    Idle,
    /// A session was created and the media layer is preparing the asset.
    Loading,
    /// Duration metadata is known; playback has not started yet.
    Ready,
    /// Video is currently playing.
    Playing,
    /// Video is paused at the current position.
    Paused,
    /// Playback reached the end of the asset.
    Ended,
}

impl PlaybackStatus {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the video is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if no session exists.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true once duration metadata is available (status ≥ `Ready`).
    #[must_use]
    pub fn has_metadata(self) -> bool {
        matches!(self, Self::Ready | Self::Playing | Self::Paused | Self::Ended)
    }

    /// Returns true while the position moves or can be scrubbed.
    #[must_use]
    pub fn reports_progress(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Notification emitted by the player for transport-control UI binding.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// A session was created; the loading indicator should be shown and the
    /// progress UI reset to zero.
    LoadingStarted,
    /// The asset is ready; duration metadata is known.
    Ready { duration_secs: f64 },
    /// Periodic progress update.
    Progress {
        position_secs: f64,
        remaining_secs: f64,
    },
    /// Playback was started or paused.
    PlayStateChanged { playing: bool },
    /// The mute state changed.
    MuteChanged { muted: bool },
    /// Playback reached the end of the asset.
    ReachedEnd,
    /// Playback restarted from the beginning after reaching the end.
    Looped,
    /// The media layer reported that the asset cannot be played.
    Failed { message: String },
    /// The session was released.
    TornDown,
}
