// SPDX-License-Identifier: MPL-2.0
//! Player lifecycle manager.
//!
//! Owns at most one [`PlayerSession`] and the [`VideoBackend`] it drives.
//! Transport operations return the [`PlaybackEvent`]s the UI should bind to;
//! media-layer reports are tagged with a [`SessionId`] so late reports for a
//! torn-down session are rejected instead of corrupting the current one.
//!
//! State machine: `Idle → Loading → Ready → Playing ⇄ Paused → Ended`.
//! With looping enabled `Ended` immediately restarts at position 0.

use super::session::PlayerSession;
use crate::application::port::VideoBackend;
use crate::domain::media::MediaUrl;
use crate::domain::video::{
    PlaybackEvent, PlaybackStatus, ProgressInterval, SessionId, SkipGuard, SkipStep,
};
use crate::error::PlayerError;

/// Runtime video options, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoSettings {
    pub start_muted: bool,
    pub loop_playback: bool,
    pub progress_interval: ProgressInterval,
    pub skip_step: SkipStep,
    pub skip_guard: SkipGuard,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            start_muted: false,
            loop_playback: true,
            progress_interval: ProgressInterval::default(),
            skip_step: SkipStep::default(),
            skip_guard: SkipGuard::default(),
        }
    }
}

/// Sole owner of the playback resource.
pub struct PlayerLifecycleManager {
    backend: Box<dyn VideoBackend>,
    session: Option<PlayerSession>,
    next_id: SessionId,
    default_muted: bool,
    looping: bool,
    skip_guard: SkipGuard,
    paused_for_background: bool,
}

impl std::fmt::Debug for PlayerLifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerLifecycleManager")
            .field("session", &self.session)
            .field("default_muted", &self.default_muted)
            .field("looping", &self.looping)
            .field("paused_for_background", &self.paused_for_background)
            .finish_non_exhaustive()
    }
}

impl PlayerLifecycleManager {
    #[must_use]
    pub fn new(backend: Box<dyn VideoBackend>, settings: &VideoSettings) -> Self {
        Self {
            backend,
            session: None,
            next_id: SessionId::new(1),
            default_muted: settings.start_muted,
            looping: settings.loop_playback,
            skip_guard: settings.skip_guard,
            paused_for_background: false,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn session(&self) -> Option<&PlayerSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(PlayerSession::id)
    }

    /// URL of the loaded video, if any.
    #[must_use]
    pub fn active_url(&self) -> Option<&MediaUrl> {
        self.session.as_ref().map(PlayerSession::url)
    }

    /// `Idle` when no session exists.
    #[must_use]
    pub fn status(&self) -> PlaybackStatus {
        self.session
            .as_ref()
            .map_or(PlaybackStatus::Idle, PlayerSession::status)
    }

    /// Mute state new sessions start with.
    #[must_use]
    pub fn default_muted(&self) -> bool {
        self.default_muted
    }

    #[must_use]
    pub fn is_paused_for_background(&self) -> bool {
        self.paused_for_background
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Starts a session for `url`.
    ///
    /// A running session for another URL is torn down first.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::SessionAlreadyActive`] if `url` is already loaded.
    pub fn start(&mut self, url: &MediaUrl) -> Result<Vec<PlaybackEvent>, PlayerError> {
        if self.active_url() == Some(url) {
            return Err(PlayerError::SessionAlreadyActive(url.clone()));
        }

        let mut events = self.teardown();

        let id = self.next_id;
        self.next_id = id.next();
        tracing::info!(session = %id, %url, muted = self.default_muted, "starting playback session");

        self.backend.open(id, url, self.default_muted);
        self.session = Some(PlayerSession::new(id, url.clone(), self.default_muted));
        events.push(PlaybackEvent::LoadingStarted);
        Ok(events)
    }

    /// Pauses and releases the session. Safe to call when idle.
    pub fn teardown(&mut self) -> Vec<PlaybackEvent> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };

        tracing::info!(session = %session.id(), url = %session.url(), "tearing down playback session");
        if session.status().is_playing() {
            self.backend.pause(session.id());
        }
        self.backend.close(session.id());
        self.paused_for_background = false;
        vec![PlaybackEvent::TornDown]
    }

    /// Video hand-off on page change.
    ///
    /// Same URL as the active session: nothing happens. Otherwise the current
    /// session is torn down and, if `url` is set, a new one is started.
    pub fn switch_to(&mut self, url: Option<&MediaUrl>) -> Vec<PlaybackEvent> {
        if self.active_url() == url {
            return Vec::new();
        }

        let mut events = self.teardown();
        if let Some(url) = url {
            match self.start(url) {
                Ok(started) => events.extend(started),
                Err(err) => tracing::warn!(%err, "video hand-off failed"),
            }
        }
        events
    }

    // =========================================================================
    // Transport controls
    // =========================================================================

    /// `Playing → Paused`, `Paused/Ready → Playing`, `Ended → Playing` from 0.
    /// No-op while loading.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when idle.
    pub fn toggle_play_pause(&mut self) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = self.session.as_mut().ok_or(PlayerError::NoActiveSession)?;
        self.paused_for_background = false;

        let id = session.id();
        match session.status() {
            PlaybackStatus::Idle | PlaybackStatus::Loading => Ok(Vec::new()),
            PlaybackStatus::Playing => {
                self.backend.pause(id);
                session.set_status(PlaybackStatus::Paused);
                Ok(vec![PlaybackEvent::PlayStateChanged { playing: false }])
            }
            PlaybackStatus::Ended => {
                self.backend.seek(id, 0.0);
                session.set_position(0.0);
                self.backend.play(id);
                session.set_status(PlaybackStatus::Playing);
                Ok(vec![PlaybackEvent::PlayStateChanged { playing: true }])
            }
            PlaybackStatus::Ready | PlaybackStatus::Paused => {
                self.backend.play(id);
                session.set_status(PlaybackStatus::Playing);
                Ok(vec![PlaybackEvent::PlayStateChanged { playing: true }])
            }
        }
    }

    /// Absolute seek, clamped to `[0, duration]`. Seeking an ended video
    /// leaves it paused at the new position.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when idle.
    pub fn seek(&mut self, position_secs: f64) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = self.session.as_mut().ok_or(PlayerError::NoActiveSession)?;

        let target = session.clamp_position(position_secs);
        self.backend.seek(session.id(), target);
        session.set_position(target);
        tracing::debug!(session = %session.id(), position = target, "seek");

        if session.status() == PlaybackStatus::Ended {
            session.set_status(PlaybackStatus::Paused);
        }

        if session.status().has_metadata() {
            Ok(vec![PlaybackEvent::Progress {
                position_secs: session.position_secs(),
                remaining_secs: session.remaining_secs(),
            }])
        } else {
            Ok(Vec::new())
        }
    }

    /// Relative seek.
    ///
    /// Forward skips stop `skip_guard` seconds before the end and never move
    /// the playhead backwards; backward skips stop at 0.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when idle.
    pub fn skip(&mut self, delta_secs: f64) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = self.session.as_ref().ok_or(PlayerError::NoActiveSession)?;

        let position = session.position_secs();
        let mut target = position + delta_secs;
        if delta_secs > 0.0 {
            if let Some(duration) = session.duration_secs() {
                let limit = self.skip_guard.limit_for(duration).max(position);
                target = target.min(limit);
            }
        }
        self.seek(target.max(0.0))
    }

    /// Applies the mute state now and keeps it as the default for later sessions.
    pub fn set_muted(&mut self, muted: bool) -> Vec<PlaybackEvent> {
        self.default_muted = muted;
        if let Some(session) = self.session.as_mut() {
            self.backend.set_muted(session.id(), muted);
            session.set_muted(muted);
        }
        vec![PlaybackEvent::MuteChanged { muted }]
    }

    // =========================================================================
    // Media-layer reports
    // =========================================================================

    fn reported(
        session: &mut Option<PlayerSession>,
        id: SessionId,
    ) -> Result<&mut PlayerSession, PlayerError> {
        match session.as_mut() {
            Some(session) if session.id() == id => Ok(session),
            _ => {
                tracing::warn!(session = %id, "dropping report for stale session");
                Err(PlayerError::StaleSession)
            }
        }
    }

    /// The asset became ready: `Loading → Ready → Playing`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] if `id` is not the active session.
    pub fn on_media_ready(
        &mut self,
        id: SessionId,
        duration_secs: f64,
    ) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = Self::reported(&mut self.session, id)?;
        session.set_duration(duration_secs);
        if session.status() != PlaybackStatus::Loading {
            return Ok(Vec::new());
        }

        session.set_status(PlaybackStatus::Ready);
        let duration_secs = session.duration_secs().unwrap_or_default();
        self.backend.play(id);
        session.set_status(PlaybackStatus::Playing);
        tracing::debug!(session = %id, duration = duration_secs, "media ready");

        Ok(vec![
            PlaybackEvent::Ready { duration_secs },
            PlaybackEvent::PlayStateChanged { playing: true },
        ])
    }

    /// Position update from the media layer.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] if `id` is not the active session.
    pub fn on_position(&mut self, id: SessionId, position_secs: f64) -> Result<(), PlayerError> {
        Self::reported(&mut self.session, id)?.set_position(position_secs);
        Ok(())
    }

    /// The asset played to its end.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] if `id` is not the active session.
    pub fn on_reached_end(&mut self, id: SessionId) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = Self::reported(&mut self.session, id)?;
        if let Some(duration) = session.duration_secs() {
            session.set_position(duration);
        }
        session.set_status(PlaybackStatus::Ended);

        if !self.looping {
            return Ok(vec![
                PlaybackEvent::PlayStateChanged { playing: false },
                PlaybackEvent::ReachedEnd,
            ]);
        }

        session.set_position(0.0);
        session.set_status(PlaybackStatus::Playing);
        self.backend.seek(id, 0.0);
        self.backend.play(id);
        Ok(vec![PlaybackEvent::ReachedEnd, PlaybackEvent::Looped])
    }

    /// The media layer could not play the asset. The session stays as it is.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] if `id` is not the active session.
    pub fn report_failure(
        &mut self,
        id: SessionId,
        message: &str,
    ) -> Result<Vec<PlaybackEvent>, PlayerError> {
        let session = Self::reported(&mut self.session, id)?;
        tracing::warn!(session = %id, url = %session.url(), reason = message, "playback failed");
        Ok(vec![PlaybackEvent::Failed {
            message: message.to_string(),
        }])
    }

    /// Periodic progress tick for `id`.
    ///
    /// Yields a progress event only once duration metadata is known.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] if `id` is not the active session.
    pub fn progress_tick(&mut self, id: SessionId) -> Result<Option<PlaybackEvent>, PlayerError> {
        let session = Self::reported(&mut self.session, id)?;
        if !session.status().reports_progress() {
            return Ok(None);
        }
        tracing::trace!(session = %id, position = session.position_secs(), "progress");
        Ok(Some(PlaybackEvent::Progress {
            position_secs: session.position_secs(),
            remaining_secs: session.remaining_secs(),
        }))
    }

    // =========================================================================
    // App lifecycle
    // =========================================================================

    /// Pauses a playing video and remembers the pause was not the user's.
    pub fn app_backgrounded(&mut self) -> Vec<PlaybackEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if !session.status().is_playing() {
            return Vec::new();
        }

        self.backend.pause(session.id());
        session.set_status(PlaybackStatus::Paused);
        self.paused_for_background = true;
        tracing::debug!(session = %session.id(), "paused for background");
        vec![PlaybackEvent::PlayStateChanged { playing: false }]
    }

    /// Resumes playback paused by [`app_backgrounded`](Self::app_backgrounded).
    pub fn app_foregrounded(&mut self) -> Vec<PlaybackEvent> {
        if !std::mem::take(&mut self.paused_for_background) {
            return Vec::new();
        }
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        if !session.status().is_paused() {
            return Vec::new();
        }

        self.backend.play(session.id());
        session.set_status(PlaybackStatus::Playing);
        vec![PlaybackEvent::PlayStateChanged { playing: true }]
    }
}

impl Drop for PlayerLifecycleManager {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Open(SessionId, String, bool),
        Play(SessionId),
        Pause(SessionId),
        Seek(SessionId, f64),
        Mute(SessionId, bool),
        Close(SessionId),
    }

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Call>>>);

    impl Recorder {
        fn take(&self) -> Vec<Call> {
            std::mem::take(&mut *self.0.borrow_mut())
        }
    }

    impl VideoBackend for Recorder {
        fn open(&mut self, session: SessionId, url: &MediaUrl, muted: bool) {
            self.0
                .borrow_mut()
                .push(Call::Open(session, url.to_string(), muted));
        }
        fn play(&mut self, session: SessionId) {
            self.0.borrow_mut().push(Call::Play(session));
        }
        fn pause(&mut self, session: SessionId) {
            self.0.borrow_mut().push(Call::Pause(session));
        }
        fn seek(&mut self, session: SessionId, position_secs: f64) {
            self.0.borrow_mut().push(Call::Seek(session, position_secs));
        }
        fn set_muted(&mut self, session: SessionId, muted: bool) {
            self.0.borrow_mut().push(Call::Mute(session, muted));
        }
        fn close(&mut self, session: SessionId) {
            self.0.borrow_mut().push(Call::Close(session));
        }
    }

    fn manager() -> (PlayerLifecycleManager, Recorder) {
        let recorder = Recorder::default();
        let manager =
            PlayerLifecycleManager::new(Box::new(recorder.clone()), &VideoSettings::default());
        (manager, recorder)
    }

    fn url(name: &str) -> MediaUrl {
        MediaUrl::new(format!("https://cdn/{name}.mp4"))
    }

    /// Starts `name` and reports it ready with `duration`.
    fn playing(manager: &mut PlayerLifecycleManager, name: &str, duration: f64) -> SessionId {
        manager.start(&url(name)).unwrap();
        let id = manager.session_id().unwrap();
        manager.on_media_ready(id, duration).unwrap();
        id
    }

    #[test]
    fn start_goes_through_loading_to_playing() {
        let (mut manager, recorder) = manager();
        let events = manager.start(&url("a")).unwrap();
        assert_eq!(events, vec![PlaybackEvent::LoadingStarted]);
        assert_eq!(manager.status(), PlaybackStatus::Loading);

        let id = manager.session_id().unwrap();
        let events = manager.on_media_ready(id, 20.0).unwrap();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::Ready {
                    duration_secs: 20.0
                },
                PlaybackEvent::PlayStateChanged { playing: true },
            ]
        );
        assert_eq!(manager.status(), PlaybackStatus::Playing);
        assert_eq!(
            recorder.take(),
            vec![
                Call::Open(id, "https://cdn/a.mp4".into(), false),
                Call::Play(id)
            ]
        );
    }

    #[test]
    fn starting_same_url_fails_fast() {
        let (mut manager, _) = manager();
        manager.start(&url("a")).unwrap();
        assert_eq!(
            manager.start(&url("a")),
            Err(PlayerError::SessionAlreadyActive(url("a")))
        );
    }

    #[test]
    fn starting_other_url_tears_down_first() {
        let (mut manager, recorder) = manager();
        let first = playing(&mut manager, "a", 10.0);
        recorder.take();

        let events = manager.start(&url("b")).unwrap();
        assert_eq!(
            events,
            vec![PlaybackEvent::TornDown, PlaybackEvent::LoadingStarted]
        );
        let second = manager.session_id().unwrap();
        assert_ne!(first, second);
        assert_eq!(
            recorder.take(),
            vec![
                Call::Pause(first),
                Call::Close(first),
                Call::Open(second, "https://cdn/b.mp4".into(), false),
            ]
        );
    }

    #[test]
    fn teardown_is_idempotent() {
        let (mut manager, recorder) = manager();
        assert!(manager.teardown().is_empty());
        manager.start(&url("a")).unwrap();
        assert_eq!(manager.teardown(), vec![PlaybackEvent::TornDown]);
        assert!(manager.teardown().is_empty());
        assert_eq!(manager.status(), PlaybackStatus::Idle);
        assert!(manager.active_url().is_none());
        let closes = recorder
            .take()
            .into_iter()
            .filter(|call| matches!(call, Call::Close(_)))
            .count();
        assert_eq!(closes, 1);
    }

    #[test]
    fn switch_to_same_url_keeps_session() {
        let (mut manager, recorder) = manager();
        let id = playing(&mut manager, "a", 10.0);
        recorder.take();

        assert!(manager.switch_to(Some(&url("a"))).is_empty());
        assert!(recorder.take().is_empty());
        assert_eq!(manager.session_id(), Some(id));
        assert_eq!(manager.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn switch_to_none_tears_down() {
        let (mut manager, _) = manager();
        manager.start(&url("a")).unwrap();
        assert_eq!(manager.switch_to(None), vec![PlaybackEvent::TornDown]);
        assert!(manager.switch_to(None).is_empty());
    }

    #[test]
    fn toggle_follows_state_machine() {
        let (mut manager, _) = manager();
        assert_eq!(
            manager.toggle_play_pause(),
            Err(PlayerError::NoActiveSession)
        );

        manager.start(&url("a")).unwrap();
        assert!(manager.toggle_play_pause().unwrap().is_empty());
        assert_eq!(manager.status(), PlaybackStatus::Loading);

        let id = manager.session_id().unwrap();
        manager.on_media_ready(id, 10.0).unwrap();
        manager.toggle_play_pause().unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Paused);
        manager.toggle_play_pause().unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn seek_is_clamped_to_duration() {
        let (mut manager, _) = manager();
        assert_eq!(manager.seek(3.0), Err(PlayerError::NoActiveSession));

        playing(&mut manager, "a", 20.0);
        manager.seek(25.0).unwrap();
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 20.0);
        let events = manager.seek(-4.0).unwrap();
        assert_eq!(
            events,
            vec![PlaybackEvent::Progress {
                position_secs: 0.0,
                remaining_secs: 20.0
            }]
        );
    }

    #[test]
    fn skip_respects_end_guard() {
        let (mut manager, _) = manager();
        let id = playing(&mut manager, "a", 20.0);

        manager.on_position(id, 12.0).unwrap();
        manager.skip(-5.0).unwrap();
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 7.0);

        manager.on_position(id, 12.0).unwrap();
        manager.skip(5.0).unwrap();
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 15.0);
    }

    #[test]
    fn skip_never_moves_backwards_inside_guard() {
        let (mut manager, _) = manager();
        let id = playing(&mut manager, "a", 20.0);
        manager.on_position(id, 17.0).unwrap();
        manager.skip(5.0).unwrap();
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 17.0);

        manager.on_position(id, 2.0).unwrap();
        manager.skip(-5.0).unwrap();
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 0.0);
    }

    #[test]
    fn mute_persists_for_next_session() {
        let (mut manager, recorder) = manager();
        let first = playing(&mut manager, "a", 10.0);
        recorder.take();

        assert_eq!(
            manager.set_muted(true),
            vec![PlaybackEvent::MuteChanged { muted: true }]
        );
        assert!(manager.session().unwrap().is_muted());

        manager.start(&url("b")).unwrap();
        let second = manager.session_id().unwrap();
        assert_eq!(
            recorder.take(),
            vec![
                Call::Mute(first, true),
                Call::Pause(first),
                Call::Close(first),
                Call::Open(second, "https://cdn/b.mp4".into(), true),
            ]
        );
        assert!(manager.session().unwrap().is_muted());
    }

    #[test]
    fn reaching_end_loops_by_default() {
        let (mut manager, _) = manager();
        let id = playing(&mut manager, "a", 10.0);
        let events = manager.on_reached_end(id).unwrap();
        assert_eq!(events, vec![PlaybackEvent::ReachedEnd, PlaybackEvent::Looped]);
        assert_eq!(manager.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 0.0);
    }

    #[test]
    fn reaching_end_without_loop_stays_ended() {
        let recorder = Recorder::default();
        let settings = VideoSettings {
            loop_playback: false,
            ..VideoSettings::default()
        };
        let mut manager = PlayerLifecycleManager::new(Box::new(recorder), &settings);
        let id = playing(&mut manager, "a", 10.0);

        let events = manager.on_reached_end(id).unwrap();
        assert_eq!(events.last(), Some(&PlaybackEvent::ReachedEnd));
        assert_eq!(manager.status(), PlaybackStatus::Ended);

        // Play again restarts from the beginning
        manager.toggle_play_pause().unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Playing);
        assert_abs_diff_eq!(manager.session().unwrap().position_secs(), 0.0);
    }

    #[test]
    fn seeking_ended_video_pauses_it() {
        let settings = VideoSettings {
            loop_playback: false,
            ..VideoSettings::default()
        };
        let mut manager = PlayerLifecycleManager::new(Box::new(Recorder::default()), &settings);
        let id = playing(&mut manager, "a", 10.0);
        manager.on_reached_end(id).unwrap();
        manager.seek(4.0).unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn failure_is_reported_and_keeps_loading() {
        let (mut manager, _) = manager();
        manager.start(&url("a")).unwrap();
        let id = manager.session_id().unwrap();
        let events = manager.report_failure(id, "asset unavailable").unwrap();
        assert_eq!(
            events,
            vec![PlaybackEvent::Failed {
                message: "asset unavailable".into()
            }]
        );
        assert_eq!(manager.status(), PlaybackStatus::Loading);
    }

    #[test]
    fn stale_reports_are_rejected() {
        let (mut manager, _) = manager();
        let old = playing(&mut manager, "a", 10.0);
        manager.start(&url("b")).unwrap();

        assert_eq!(
            manager.on_media_ready(old, 5.0),
            Err(PlayerError::StaleSession)
        );
        assert_eq!(manager.progress_tick(old), Err(PlayerError::StaleSession));
        assert_eq!(manager.on_reached_end(old), Err(PlayerError::StaleSession));
        assert_eq!(manager.status(), PlaybackStatus::Loading);
    }

    #[test]
    fn ended_video_stops_reporting_progress() {
        let settings = VideoSettings {
            loop_playback: false,
            ..VideoSettings::default()
        };
        let mut manager = PlayerLifecycleManager::new(Box::new(Recorder::default()), &settings);
        let id = playing(&mut manager, "a", 10.0);
        manager.on_position(id, 10.0).unwrap();
        manager.on_reached_end(id).unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Ended);
        assert_eq!(manager.progress_tick(id), Ok(None));

        manager.seek(4.0).unwrap();
        assert_eq!(
            manager.progress_tick(id),
            Ok(Some(PlaybackEvent::Progress {
                position_secs: 4.0,
                remaining_secs: 6.0
            }))
        );
    }

    #[test]
    fn progress_only_after_metadata() {
        let (mut manager, _) = manager();
        manager.start(&url("a")).unwrap();
        let id = manager.session_id().unwrap();
        assert_eq!(manager.progress_tick(id), Ok(None));

        manager.on_media_ready(id, 8.0).unwrap();
        manager.on_position(id, 3.0).unwrap();
        assert_eq!(
            manager.progress_tick(id),
            Ok(Some(PlaybackEvent::Progress {
                position_secs: 3.0,
                remaining_secs: 5.0
            }))
        );
    }

    #[test]
    fn background_pause_resumes_on_foreground() {
        let (mut manager, _) = manager();
        playing(&mut manager, "a", 10.0);

        manager.app_backgrounded();
        assert_eq!(manager.status(), PlaybackStatus::Paused);
        assert!(manager.is_paused_for_background());

        manager.app_foregrounded();
        assert_eq!(manager.status(), PlaybackStatus::Playing);
        assert!(!manager.is_paused_for_background());
    }

    #[test]
    fn user_pause_is_never_auto_resumed() {
        let (mut manager, _) = manager();
        playing(&mut manager, "a", 10.0);

        manager.toggle_play_pause().unwrap();
        assert!(manager.app_backgrounded().is_empty());
        assert!(manager.app_foregrounded().is_empty());
        assert_eq!(manager.status(), PlaybackStatus::Paused);
    }

    #[test]
    fn user_toggle_in_background_clears_system_pause() {
        let (mut manager, _) = manager();
        playing(&mut manager, "a", 10.0);
        manager.app_backgrounded();
        manager.toggle_play_pause().unwrap();
        manager.toggle_play_pause().unwrap();
        assert_eq!(manager.status(), PlaybackStatus::Paused);
        assert!(manager.app_foregrounded().is_empty());
        assert_eq!(manager.status(), PlaybackStatus::Paused);
    }
}
