// SPDX-License-Identifier: MPL-2.0
//! Current-page state machine.
//!
//! [`PageIndexController`] owns the [`GallerySequence`] and the current page.
//! Every page change, whatever its origin, goes through
//! [`PageIndexController::transition`], which runs the fixed sequence of steps:
//!
//! 1. clamp the requested page (no-op on an empty gallery)
//! 2. latch `seen_last` when the last page is reached
//! 3. reconcile the preload window
//! 4. report the page change
//! 5. request a background refresh (when enabled)
//! 6. edge-proximity notifications in the direction of travel
//! 7. video hand-off
//!
//! The returned [`Effect`] list preserves that order.

use super::preload::PreloadWindow;
use super::sequence::GallerySequence;
use super::{Cause, Effect};
use crate::domain::gallery::{EdgeThreshold, PageSpacing, PreloadRadius};
use crate::domain::media::MediaItem;

/// Runtime gallery options, validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    pub preload_radius: PreloadRadius,
    pub edge_threshold: EdgeThreshold,
    pub start_index: usize,
    pub page_spacing: PageSpacing,
    pub hide_status_bar: bool,
    pub dynamic_background: bool,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            preload_radius: PreloadRadius::default(),
            edge_threshold: EdgeThreshold::default(),
            start_index: 0,
            page_spacing: PageSpacing::default(),
            hide_status_bar: true,
            dynamic_background: false,
        }
    }
}

/// Paging state snapshot for footer/header rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (0-indexed); `None` for an empty gallery.
    pub current: Option<usize>,
    /// Number of pages.
    pub total: usize,
    /// Whether the last page was ever shown.
    pub seen_last: bool,
    pub has_next: bool,
    pub has_previous: bool,
    /// Caption of the current item.
    pub caption: String,
    /// "n / N" page label, empty for an empty gallery.
    pub label: String,
}

/// Owns the item sequence and the current page.
#[derive(Debug, Clone)]
pub struct PageIndexController {
    sequence: GallerySequence,
    current: usize,
    seen_last: bool,
    preload: PreloadWindow,
    edge_threshold: EdgeThreshold,
    dynamic_background: bool,
}

impl PageIndexController {
    /// Creates a controller on page 0 with nothing materialized.
    ///
    /// Call [`open`](Self::open) to run the first transition.
    #[must_use]
    pub fn new(items: Vec<MediaItem>, settings: &GallerySettings) -> Self {
        Self {
            sequence: GallerySequence::new(items),
            current: 0,
            seen_last: false,
            preload: PreloadWindow::new(settings.preload_radius),
            edge_threshold: settings.edge_threshold,
            dynamic_background: settings.dynamic_background,
        }
    }

    /// Runs the initial transition to `start_index` (clamped).
    pub fn open(&mut self, start_index: usize) -> Vec<Effect> {
        self.transition(to_signed(start_index), Cause::Jump)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn seen_last(&self) -> bool {
        self.seen_last
    }

    #[must_use]
    pub fn sequence(&self) -> &GallerySequence {
        &self.sequence
    }

    /// Real item on the current page.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.sequence.item(self.current)
    }

    #[must_use]
    pub fn preload(&self) -> PreloadWindow {
        self.preload
    }

    #[must_use]
    pub fn dynamic_background(&self) -> bool {
        self.dynamic_background
    }

    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        let total = self.page_count();
        if total == 0 {
            return PageInfo {
                seen_last: self.seen_last,
                ..PageInfo::default()
            };
        }

        PageInfo {
            current: Some(self.current),
            total,
            seen_last: self.seen_last,
            has_next: self.current + 1 < total,
            has_previous: self.current > 0,
            caption: self
                .current_item()
                .map(|item| item.caption().to_string())
                .unwrap_or_default(),
            label: format!("{} / {}", self.current + 1, total),
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Jumps to `index`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.page_count() {
            tracing::debug!(index, count = self.page_count(), "ignoring out-of-range page");
            return Vec::new();
        }
        self.transition(to_signed(index), Cause::Jump)
    }

    /// Moves one page forward; no-op on the last page.
    pub fn next(&mut self) -> Vec<Effect> {
        self.go_to(self.current.saturating_add(1))
    }

    /// Moves one page back; no-op on the first page.
    pub fn previous(&mut self) -> Vec<Effect> {
        match self.current.checked_sub(1) {
            Some(index) => self.go_to(index),
            None => Vec::new(),
        }
    }

    /// A drag gesture settled on `target`, which may overshoot either end.
    pub fn drag_settled(&mut self, target: isize) -> Vec<Effect> {
        self.transition(target, Cause::Drag)
    }

    /// Changes the preload radius and reconciles immediately.
    pub fn set_preload_radius(&mut self, radius: PreloadRadius) -> Vec<Effect> {
        self.preload.set_radius(radius);
        self.reconcile()
    }

    /// The single page-change transition.
    ///
    /// `requested` is clamped to the page range; a negative value counts as
    /// travel towards the left end even when the clamped page does not move.
    pub fn transition(&mut self, requested: isize, cause: Cause) -> Vec<Effect> {
        let count = self.page_count();
        if count == 0 {
            return Vec::new();
        }

        let last = count - 1;
        let previous = self.current;
        let page = usize::try_from(requested).unwrap_or(0).min(last);
        self.current = page;

        tracing::debug!(from = previous, to = page, ?cause, "page transition");

        let mut effects = Vec::new();
        if cause == Cause::Jump {
            effects.push(Effect::ScrollTo(page));
        }

        if page == last {
            self.seen_last = true;
        }

        effects.extend(self.reconcile());
        effects.push(Effect::PageChanged(page));

        if self.dynamic_background {
            effects.push(Effect::RefreshBackground { page });
        }

        if cause != Cause::Reindex {
            if page > previous && self.edge_threshold.is_near_right_end(page, count) {
                effects.push(Effect::NearRightEnd);
            }
            let moved_left = page < previous || requested < 0;
            if moved_left && self.edge_threshold.is_near_left_end(page) {
                effects.push(Effect::NearLeftEnd);
            }
        }

        let video = self
            .sequence
            .item(page)
            .and_then(MediaItem::video_url)
            .cloned();
        effects.push(Effect::SwitchVideo(video));

        effects
    }

    /// Reconciles materialization with the window around the current page.
    pub fn reconcile(&mut self) -> Vec<Effect> {
        let window = self.preload.around(self.current, self.page_count());
        self.sequence.reconcile(&window)
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut GallerySequence {
        &mut self.sequence
    }

    /// Resets the page for an emptied gallery. `seen_last` is kept.
    pub(crate) fn reset_page(&mut self) {
        self.current = 0;
    }
}

fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
