// SPDX-License-Identifier: MPL-2.0
//! Delegate (event sink) port definition.
//!
//! The integrator implements [`LightboxDelegate`] to observe gallery events.
//! Every method has an empty default so implementors only override what they need.

use super::export::SaveOutcome;
use crate::domain::media::MediaItem;
use crate::domain::video::PlaybackEvent;

/// Events exposed to the integrating application.
pub trait LightboxDelegate {
    /// The current page changed (also fired on redundant re-entries).
    fn on_page_changed(&mut self, _index: usize) {}

    /// The lightbox is about to be dismissed.
    fn on_will_dismiss(&mut self) {}

    /// The user tapped the (unzoomed) current item.
    fn on_item_touched(&mut self, _item: &MediaItem, _index: usize) {}

    /// A save to the media library completed.
    fn on_save_result(&mut self, _item: &MediaItem, _outcome: &SaveOutcome) {}

    /// Paging forward came within the edge threshold of the last page.
    fn on_near_right_end(&mut self) {}

    /// Paging backward came within the edge threshold of the first page.
    fn on_near_left_end(&mut self) {}

    /// Items were appended, inserted, replaced or removed.
    fn on_sequence_updated(&mut self) {}

    /// The active video changed state (ready, ended, looped, failed, ...).
    fn on_playback(&mut self, _event: &PlaybackEvent) {}
}

/// Delegate that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDelegate;

impl LightboxDelegate for NoopDelegate {}
