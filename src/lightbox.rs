// SPDX-License-Identifier: MPL-2.0
//! Lightbox facade.
//!
//! [`Lightbox`] wires the page controller, the mutation log, the player
//! lifecycle manager and the scheduler to the host collaborators. Every entry
//! point mutates the core state, then applies the resulting
//! [`Effect`]s in order: render-surface updates, delegate notifications,
//! scheduled work and video hand-off.
//!
//! The model is single-threaded. Delayed work only runs from
//! [`Lightbox::advance`], which the host calls from its event loop.

use crate::application::port::{
    HeadlessSurface, LightboxDelegate, MediaExporter, NoopDelegate, NullVideoBackend,
    RenderSurface, SaveOutcome, UnsupportedExporter, VideoBackend,
};
use crate::config::Config;
use crate::domain::gallery::PreloadRadius;
use crate::domain::media::MediaItem;
use crate::domain::video::{PlaybackEvent, SessionId};
use crate::error::{ExportError, PlayerError};
use crate::gallery::{
    Effect, GalleryMutationLog, GallerySettings, PageIndexController, PageInfo,
};
use crate::scheduler::{ScheduledTask, Scheduler, TimingSettings};
use crate::video_player::{PlayerLifecycleManager, VideoSettings};
use std::time::Duration;

/// All runtime settings of a lightbox.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightboxSettings {
    pub gallery: GallerySettings,
    pub video: VideoSettings,
    pub timing: TimingSettings,
}

impl LightboxSettings {
    /// Derives validated settings from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            gallery: config.gallery_settings(),
            video: config.video_settings(),
            timing: config.timing(),
        }
    }
}

/// Host collaborators. Defaults ignore everything.
pub struct Collaborators {
    pub delegate: Box<dyn LightboxDelegate>,
    pub surface: Box<dyn RenderSurface>,
    pub video: Box<dyn VideoBackend>,
    pub exporter: Box<dyn MediaExporter>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            delegate: Box::new(NoopDelegate),
            surface: Box::new(HeadlessSurface),
            video: Box::new(NullVideoBackend),
            exporter: Box::new(UnsupportedExporter),
        }
    }
}

/// Full-screen paging gallery core.
pub struct Lightbox {
    controller: PageIndexController,
    mutations: GalleryMutationLog,
    player: PlayerLifecycleManager,
    scheduler: Scheduler,
    delegate: Box<dyn LightboxDelegate>,
    surface: Box<dyn RenderSurface>,
    exporter: Box<dyn MediaExporter>,
    settings: LightboxSettings,
    presented: bool,
}

impl Lightbox {
    /// Creates the lightbox and runs the first transition to the configured
    /// start page.
    #[must_use]
    pub fn new(
        items: Vec<MediaItem>,
        settings: LightboxSettings,
        collaborators: Collaborators,
    ) -> Self {
        let Collaborators {
            delegate,
            surface,
            video,
            exporter,
        } = collaborators;

        let mut lightbox = Self {
            controller: PageIndexController::new(items, &settings.gallery),
            mutations: GalleryMutationLog::new(),
            player: PlayerLifecycleManager::new(video, &settings.video),
            scheduler: Scheduler::new(),
            delegate,
            surface,
            exporter,
            settings,
            presented: true,
        };

        tracing::info!(
            items = lightbox.controller.page_count(),
            start = settings.gallery.start_index,
            "presenting lightbox"
        );
        lightbox.surface.present(
            settings.gallery.page_spacing,
            settings.gallery.hide_status_bar,
        );
        let effects = lightbox.controller.open(settings.gallery.start_index);
        lightbox.apply(effects);
        lightbox
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.controller.current_page()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.controller.page_count()
    }

    #[must_use]
    pub fn seen_last(&self) -> bool {
        self.controller.seen_last()
    }

    /// Read-only view of every item in display order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        self.controller.sequence().items()
    }

    /// What the render surface should show at `index` (placeholder outside
    /// the preload window).
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&MediaItem> {
        self.controller.sequence().page(index)
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.controller.current_item()
    }

    #[must_use]
    pub fn materialized_indices(&self) -> Vec<usize> {
        self.controller.sequence().materialized_indices()
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        self.controller.page_info()
    }

    #[must_use]
    pub fn player(&self) -> &PlayerLifecycleManager {
        &self.player
    }

    #[must_use]
    pub fn settings(&self) -> &LightboxSettings {
        &self.settings
    }

    /// False once the lightbox was closed or dismissed.
    #[must_use]
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mutations.is_dragging()
    }

    /// Whether a deletion is waiting for its settle delay.
    #[must_use]
    pub fn has_pending_delete(&self) -> bool {
        self.mutations.pending_delete().is_some()
    }

    /// Time until the next deferred task, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.scheduler.next_due_in()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if !self.presented {
            return;
        }
        let effects = self.controller.go_to(index);
        self.apply(effects);
    }

    pub fn next(&mut self) {
        if !self.presented {
            return;
        }
        let effects = self.controller.next();
        self.apply(effects);
    }

    pub fn previous(&mut self) {
        if !self.presented {
            return;
        }
        let effects = self.controller.previous();
        self.apply(effects);
    }

    /// The render surface started a paging drag.
    pub fn drag_began(&mut self) {
        if self.presented {
            self.mutations.drag_began();
        }
    }

    /// A drag settled on `target`, possibly past either end.
    pub fn drag_settled(&mut self, target: isize) {
        if !self.presented {
            return;
        }
        let effects = self.controller.drag_settled(target);
        self.apply(effects);
    }

    /// The render surface finished the drag; deferred head inserts apply now.
    pub fn drag_ended(&mut self) {
        if !self.presented {
            return;
        }
        let effects = self.mutations.drag_ended(&mut self.controller);
        self.apply(effects);
    }

    pub fn set_preload_radius(&mut self, radius: PreloadRadius) {
        if !self.presented {
            return;
        }
        self.settings.gallery.preload_radius = radius;
        let effects = self.controller.set_preload_radius(radius);
        self.apply(effects);
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn append(&mut self, items: Vec<MediaItem>) {
        if !self.presented {
            return;
        }
        let effects = self.mutations.append(&mut self.controller, items);
        self.apply(effects);
    }

    /// Inserts at the head; deferred while a drag is in progress.
    pub fn insert_at_head(&mut self, items: Vec<MediaItem>) {
        if !self.presented {
            return;
        }
        let effects = self.mutations.insert_at_head(&mut self.controller, items);
        self.apply(effects);
    }

    /// Deletes the entry at `index`; deleting the only entry dismisses.
    pub fn delete(&mut self, index: usize) {
        if !self.presented {
            return;
        }
        let effects = self.mutations.delete(&mut self.controller, index);
        self.apply(effects);
    }

    pub fn delete_current(&mut self) {
        self.delete(self.controller.current_page());
    }

    pub fn replace(&mut self, index: usize, item: MediaItem) {
        if !self.presented {
            return;
        }
        let effects = self.mutations.replace(&mut self.controller, index, item);
        self.apply(effects);
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Tap on the current page. Zoomed pages swallow the tap.
    pub fn touch(&mut self, zoomed: bool) {
        if zoomed || !self.presented {
            return;
        }
        let index = self.controller.current_page();
        if let Some(item) = self.controller.current_item() {
            self.delegate.on_item_touched(item, index);
        }
    }

    /// Saves the current item to the media library.
    ///
    /// Videos go through `save_video`, everything else through `save_image`.
    /// The outcome is always reported, never returned as an error.
    pub fn save_current(&mut self) {
        if !self.presented {
            return;
        }
        let Some(item) = self.controller.current_item() else {
            return;
        };

        let result = match (item.video_url(), item.primary_image()) {
            (Some(url), _) => self.exporter.save_video(url),
            (None, Some(image)) => self.exporter.save_image(image),
            (None, None) => Err(ExportError::Unsupported),
        };
        let outcome = SaveOutcome::from_result(result);
        match &outcome.error {
            None => tracing::info!(page = self.controller.current_page(), "saved item"),
            Some(err) => tracing::warn!(%err, "saving item failed"),
        }

        self.surface.show_transient_message(outcome.message());
        self.delegate.on_save_result(item, &outcome);
    }

    /// Closes the lightbox: notifies the delegate, tears the player down and
    /// drops pending work. Further calls are no-ops.
    pub fn close(&mut self) {
        if !self.presented {
            return;
        }
        tracing::info!("dismissing lightbox");
        self.presented = false;
        self.delegate.on_will_dismiss();
        let events = self.player.teardown();
        self.forward_playback(events);
        self.scheduler.retain(|_| false);
        self.surface.dismiss();
    }

    // =========================================================================
    // Transport controls
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when no video is loaded.
    pub fn toggle_play_pause(&mut self) -> Result<(), PlayerError> {
        self.ensure_presented()?;
        let events = self.player.toggle_play_pause()?;
        self.forward_playback(events);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when no video is loaded.
    pub fn seek(&mut self, position_secs: f64) -> Result<(), PlayerError> {
        self.ensure_presented()?;
        let events = self.player.seek(position_secs)?;
        self.forward_playback(events);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when no video is loaded.
    pub fn skip(&mut self, delta_secs: f64) -> Result<(), PlayerError> {
        self.ensure_presented()?;
        let events = self.player.skip(delta_secs)?;
        self.forward_playback(events);
        Ok(())
    }

    /// Skips forward by the configured step.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when no video is loaded.
    pub fn skip_forward(&mut self) -> Result<(), PlayerError> {
        self.skip(self.settings.video.skip_step.value())
    }

    /// Skips backward by the configured step.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NoActiveSession`] when no video is loaded.
    pub fn skip_backward(&mut self) -> Result<(), PlayerError> {
        self.skip(-self.settings.video.skip_step.value())
    }

    pub fn set_muted(&mut self, muted: bool) {
        if !self.presented {
            return;
        }
        let events = self.player.set_muted(muted);
        self.forward_playback(events);
    }

    // =========================================================================
    // Media-layer reports
    // =========================================================================

    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] for a session that is gone.
    pub fn media_ready(&mut self, session: SessionId, duration_secs: f64) -> Result<(), PlayerError> {
        let events = self.player.on_media_ready(session, duration_secs)?;
        self.forward_playback(events);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] for a session that is gone.
    pub fn media_position(&mut self, session: SessionId, position_secs: f64) -> Result<(), PlayerError> {
        self.player.on_position(session, position_secs)
    }

    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] for a session that is gone.
    pub fn media_reached_end(&mut self, session: SessionId) -> Result<(), PlayerError> {
        let events = self.player.on_reached_end(session)?;
        self.forward_playback(events);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PlayerError::StaleSession`] for a session that is gone.
    pub fn media_failed(&mut self, session: SessionId, message: &str) -> Result<(), PlayerError> {
        let events = self.player.report_failure(session, message)?;
        self.forward_playback(events);
        Ok(())
    }

    // =========================================================================
    // App lifecycle
    // =========================================================================

    pub fn app_backgrounded(&mut self) {
        if !self.presented {
            return;
        }
        let events = self.player.app_backgrounded();
        self.forward_playback(events);
    }

    pub fn app_foregrounded(&mut self) {
        if !self.presented {
            return;
        }
        let events = self.player.app_foregrounded();
        self.forward_playback(events);
    }

    // =========================================================================
    // Deferred work
    // =========================================================================

    /// Moves the logical clock forward and runs every task that became due,
    /// each at its own due time.
    pub fn advance(&mut self, elapsed: Duration) {
        let deadline = self.scheduler.deadline_after(elapsed);
        while let Some(task) = self.scheduler.pop_due_by(deadline) {
            self.run(task);
        }
        self.scheduler.advance_to(deadline);
    }

    /// Transport controls need a presented lightbox.
    fn ensure_presented(&self) -> Result<(), PlayerError> {
        if self.presented {
            Ok(())
        } else {
            Err(PlayerError::NoActiveSession)
        }
    }

    fn run(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::RefreshBackground { page } => self.refresh_background(page),
            ScheduledTask::SettleDeletion => {
                let effects = self.mutations.settle(&mut self.controller);
                self.apply(effects);
            }
            ScheduledTask::ProgressTick { session } => match self.player.progress_tick(session) {
                Ok(event) => {
                    if let Some(event) = event {
                        self.surface.playback(&event);
                        self.delegate.on_playback(&event);
                    }
                    self.scheduler
                        .schedule(task, self.settings.video.progress_interval.as_duration());
                }
                Err(err) => tracing::trace!(%err, "progress observer removed"),
            },
        }
    }

    fn refresh_background(&mut self, page: usize) {
        if page != self.controller.current_page() {
            tracing::trace!(page, "background refresh superseded");
            return;
        }
        if let Some(image) = self
            .controller
            .current_item()
            .and_then(MediaItem::primary_image)
        {
            self.surface.show_background(image);
        }
    }

    // =========================================================================
    // Effect application
    // =========================================================================

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if !self.presented {
                break;
            }
            match effect {
                Effect::ScrollTo(index) => self.surface.scroll_to(index),
                Effect::Materialized(index) => {
                    if let Some(item) = self.controller.sequence().item(index) {
                        self.surface.materialize(index, item);
                    }
                }
                Effect::Evicted(index) => self.surface.evict(index),
                Effect::PageChanged(index) => self.delegate.on_page_changed(index),
                Effect::RefreshBackground { page } => self.scheduler.schedule(
                    ScheduledTask::RefreshBackground { page },
                    self.settings.timing.background_refresh_delay,
                ),
                Effect::NearRightEnd => self.delegate.on_near_right_end(),
                Effect::NearLeftEnd => self.delegate.on_near_left_end(),
                Effect::SwitchVideo(url) => {
                    let events = self.player.switch_to(url.as_ref());
                    self.forward_playback(events);
                }
                Effect::LayoutChanged => self
                    .surface
                    .relayout(self.controller.page_count(), self.controller.current_page()),
                Effect::SequenceUpdated => self.delegate.on_sequence_updated(),
                Effect::ScheduleDeleteSettle => self.scheduler.schedule(
                    ScheduledTask::SettleDeletion,
                    self.settings.timing.delete_settle_delay,
                ),
                Effect::Dismissed => self.close(),
            }
        }
    }

    /// Forwards player events and keeps exactly one progress observer alive
    /// for the active session.
    fn forward_playback(&mut self, events: Vec<PlaybackEvent>) {
        if events.is_empty() {
            return;
        }

        for event in &events {
            self.surface.playback(event);
            self.delegate.on_playback(event);
        }

        let active = self.player.session_id();
        self.scheduler.retain(|task| match task {
            ScheduledTask::ProgressTick { session } => Some(*session) == active,
            _ => true,
        });

        if events.contains(&PlaybackEvent::LoadingStarted) {
            if let Some(session) = active {
                self.scheduler.schedule(
                    ScheduledTask::ProgressTick { session },
                    self.settings.video.progress_interval.as_duration(),
                );
            }
        }
    }
}

impl std::fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lightbox")
            .field("controller", &self.controller)
            .field("mutations", &self.mutations)
            .field("player", &self.player)
            .field("scheduler", &self.scheduler)
            .field("presented", &self.presented)
            .finish_non_exhaustive()
    }
}
