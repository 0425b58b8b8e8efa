// SPDX-License-Identifier: MPL-2.0
//! Render surface port definition.
//!
//! The render surface observes materialization changes and playback events;
//! it never mutates gallery state. Drag gestures flow the other way, through
//! [`Lightbox::drag_began`](crate::Lightbox::drag_began) and
//! [`Lightbox::drag_ended`](crate::Lightbox::drag_ended).

use crate::domain::gallery::PageSpacing;
use crate::domain::media::{ImageSource, MediaItem};
use crate::domain::video::PlaybackEvent;

/// Consumer of rendering-relevant state changes.
pub trait RenderSurface {
    /// The lightbox is about to show its first page. Pages are laid out
    /// `page_spacing` points apart.
    fn present(&mut self, _page_spacing: PageSpacing, _hide_status_bar: bool) {}

    /// The lightbox closed. Restore the status bar.
    fn dismiss(&mut self) {}

    /// The page at `index` now holds real content and should be rendered/loaded.
    fn materialize(&mut self, _index: usize, _item: &MediaItem) {}

    /// The page at `index` left the preload window; render a stub.
    fn evict(&mut self, _index: usize) {}

    /// Pages were inserted or removed; frames must be recomputed.
    fn relayout(&mut self, _page_count: usize, _current_page: usize) {}

    /// Scroll to `index` (explicit navigation).
    fn scroll_to(&mut self, _index: usize) {}

    /// Show `image` blurred behind the pages.
    fn show_background(&mut self, _image: ImageSource<'_>) {}

    /// Show a short-lived message (e.g. after saving).
    fn show_transient_message(&mut self, _text: &str) {}

    /// Transport-control binding for the active video.
    fn playback(&mut self, _event: &PlaybackEvent) {}
}

/// Surface that ignores every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {}
