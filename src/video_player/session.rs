// SPDX-License-Identifier: MPL-2.0
//! State of one playback session, from load to teardown.

use crate::domain::media::MediaUrl;
use crate::domain::video::{PlaybackStatus, SessionId};

/// One active video load-to-teardown cycle.
///
/// Only [`PlayerLifecycleManager`](super::PlayerLifecycleManager) creates and
/// mutates sessions; everyone else reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSession {
    id: SessionId,
    url: MediaUrl,
    status: PlaybackStatus,
    muted: bool,
    position_secs: f64,
    duration_secs: Option<f64>,
}

impl PlayerSession {
    pub(super) fn new(id: SessionId, url: MediaUrl, muted: bool) -> Self {
        Self {
            id,
            url,
            status: PlaybackStatus::Loading,
            muted,
            position_secs: 0.0,
            duration_secs: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn url(&self) -> &MediaUrl {
        &self.url
    }

    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Duration once the media layer reported it.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Time left until the end; zero while the duration is unknown.
    #[must_use]
    pub fn remaining_secs(&self) -> f64 {
        self.duration_secs
            .map_or(0.0, |duration| (duration - self.position_secs).max(0.0))
    }

    /// Clamps `position_secs` to `[0, duration]` (or `[0, ∞)` before metadata).
    #[must_use]
    pub fn clamp_position(&self, position_secs: f64) -> f64 {
        let position = if position_secs.is_finite() {
            position_secs.max(0.0)
        } else {
            0.0
        };
        match self.duration_secs {
            Some(duration) => position.min(duration),
            None => position,
        }
    }

    pub(super) fn set_status(&mut self, status: PlaybackStatus) {
        self.status = status;
    }

    pub(super) fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub(super) fn set_position(&mut self, position_secs: f64) {
        self.position_secs = self.clamp_position(position_secs);
    }

    pub(super) fn set_duration(&mut self, duration_secs: f64) {
        self.duration_secs = Some(duration_secs.max(0.0));
        self.position_secs = self.clamp_position(self.position_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn session() -> PlayerSession {
        PlayerSession::new(SessionId::new(1), MediaUrl::new("https://cdn/v.mp4"), false)
    }

    #[test]
    fn new_session_is_loading_at_zero() {
        let session = session();
        assert_eq!(session.status(), PlaybackStatus::Loading);
        assert_abs_diff_eq!(session.position_secs(), 0.0);
        assert!(session.duration_secs().is_none());
        assert_abs_diff_eq!(session.remaining_secs(), 0.0);
    }

    #[test]
    fn position_is_clamped_to_duration() {
        let mut session = session();
        session.set_position(42.0);
        assert_abs_diff_eq!(session.position_secs(), 42.0);

        session.set_duration(20.0);
        assert_abs_diff_eq!(session.position_secs(), 20.0);

        session.set_position(-3.0);
        assert_abs_diff_eq!(session.position_secs(), 0.0);

        session.set_position(f64::NAN);
        assert_abs_diff_eq!(session.position_secs(), 0.0);
    }

    #[test]
    fn remaining_time_follows_position() {
        let mut session = session();
        session.set_duration(20.0);
        session.set_position(12.5);
        assert_abs_diff_eq!(session.remaining_secs(), 7.5);
    }
}
