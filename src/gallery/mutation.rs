// SPDX-License-Identifier: MPL-2.0
//! Sequence mutations that keep the current page correct.
//!
//! Head insertions shift every index under the current item, so they are held
//! back while a drag gesture is in flight and applied when the render surface
//! reports the drag ended. Deletions navigate first and remove the entry only
//! once the settle delay elapsed, so the page animation finishes before the
//! index space changes.

use super::controller::PageIndexController;
use super::{Cause, Effect};
use crate::domain::media::MediaItem;

/// Pending mutations and the drag state they wait on.
#[derive(Debug, Clone, Default)]
pub struct GalleryMutationLog {
    dragging: bool,
    pending_head: Vec<Vec<MediaItem>>,
    pending_delete: Option<usize>,
}

impl GalleryMutationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Number of items waiting to be inserted at the head.
    #[must_use]
    pub fn pending_head_len(&self) -> usize {
        self.pending_head.iter().map(Vec::len).sum()
    }

    /// Index waiting to be removed, if a deletion is settling.
    #[must_use]
    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    /// The render surface reported the start of a drag gesture.
    pub fn drag_began(&mut self) {
        self.dragging = true;
    }

    /// The render surface reported the end of a drag gesture; queued head
    /// insertions are applied now, in arrival order.
    pub fn drag_ended(&mut self, ctrl: &mut PageIndexController) -> Vec<Effect> {
        self.dragging = false;
        let batches = std::mem::take(&mut self.pending_head);
        let mut effects = Vec::new();
        for items in batches {
            effects.extend(self.prepend(ctrl, items));
        }
        effects
    }

    /// Extends the sequence at the tail. The current page does not move.
    pub fn append(&mut self, ctrl: &mut PageIndexController, items: Vec<MediaItem>) -> Vec<Effect> {
        if items.is_empty() {
            return Vec::new();
        }

        let was_empty = ctrl.is_empty();
        tracing::debug!(count = items.len(), "appending items");
        ctrl.sequence_mut().push_back(items);

        let mut effects = vec![Effect::LayoutChanged];
        if was_empty {
            effects.extend(ctrl.transition(0, Cause::Jump));
        } else {
            effects.extend(ctrl.reconcile());
        }
        effects.push(Effect::SequenceUpdated);
        effects
    }

    /// Inserts items at the head, or queues them while a drag is in progress.
    pub fn insert_at_head(
        &mut self,
        ctrl: &mut PageIndexController,
        items: Vec<MediaItem>,
    ) -> Vec<Effect> {
        if items.is_empty() {
            return Vec::new();
        }
        if self.dragging {
            tracing::debug!(count = items.len(), "deferring head insert until drag ends");
            self.pending_head.push(items);
            return Vec::new();
        }
        self.prepend(ctrl, items)
    }

    fn prepend(&mut self, ctrl: &mut PageIndexController, items: Vec<MediaItem>) -> Vec<Effect> {
        let count = items.len();
        let was_empty = ctrl.is_empty();
        tracing::debug!(count, "inserting items at head");
        ctrl.sequence_mut().prepend(items);

        if let Some(index) = self.pending_delete.as_mut() {
            *index += count;
        }

        let mut effects = vec![Effect::LayoutChanged];
        if was_empty {
            effects.extend(ctrl.transition(0, Cause::Jump));
        } else {
            let shifted = ctrl.current_page().saturating_add(count);
            effects.extend(ctrl.transition(to_signed(shifted), Cause::Reindex));
        }
        effects.push(Effect::SequenceUpdated);
        effects
    }

    /// Deletes the entry at `index`.
    ///
    /// Deleting the sole entry dismisses the gallery. Otherwise the current
    /// page moves away from a deleted current entry right away and the removal
    /// happens in [`settle`](Self::settle). Requests made while a deletion is
    /// settling, or for an index past the end, are ignored.
    pub fn delete(&mut self, ctrl: &mut PageIndexController, index: usize) -> Vec<Effect> {
        let count = ctrl.page_count();
        if index >= count {
            tracing::debug!(index, count, "ignoring delete of missing page");
            return Vec::new();
        }
        if self.pending_delete.is_some() {
            tracing::debug!(index, "ignoring delete while another one settles");
            return Vec::new();
        }

        if count == 1 {
            tracing::info!("deleted the only item, dismissing");
            ctrl.sequence_mut().clear();
            ctrl.reset_page();
            self.pending_head.clear();
            return vec![Effect::SwitchVideo(None), Effect::SequenceUpdated, Effect::Dismissed];
        }

        let mut effects = Vec::new();
        if index == ctrl.current_page() {
            if index == count - 1 {
                effects.extend(ctrl.previous());
            } else {
                effects.extend(ctrl.next());
            }
        }

        self.pending_delete = Some(index);
        effects.push(Effect::ScheduleDeleteSettle);
        effects
    }

    /// Removes the entry of the pending deletion and steps the current page
    /// back if it sat after the removed index.
    pub fn settle(&mut self, ctrl: &mut PageIndexController) -> Vec<Effect> {
        let Some(index) = self.pending_delete.take() else {
            return Vec::new();
        };
        if ctrl.sequence_mut().remove(index).is_none() {
            return Vec::new();
        }

        let current = ctrl.current_page();
        let target = if current > index { current - 1 } else { current };
        tracing::debug!(index, page = target, "deletion settled");

        let mut effects = vec![Effect::LayoutChanged];
        effects.extend(ctrl.transition(to_signed(target), Cause::Reindex));
        effects.push(Effect::SequenceUpdated);
        effects
    }

    /// Replaces the entry at `index` in place.
    ///
    /// A materialized entry is re-materialized with the new content; replacing
    /// the current entry re-runs the video hand-off.
    pub fn replace(
        &mut self,
        ctrl: &mut PageIndexController,
        index: usize,
        item: MediaItem,
    ) -> Vec<Effect> {
        if ctrl.sequence_mut().replace(index, item).is_none() {
            tracing::debug!(index, "ignoring replace of missing page");
            return Vec::new();
        }

        let mut effects = Vec::new();
        if ctrl.sequence().is_materialized(index) {
            effects.push(Effect::Materialized(index));
        }
        if index == ctrl.current_page() {
            if ctrl.dynamic_background() {
                effects.push(Effect::RefreshBackground { page: index });
            }
            let video = ctrl.current_item().and_then(MediaItem::video_url).cloned();
            effects.push(Effect::SwitchVideo(video));
        }
        effects.push(Effect::SequenceUpdated);
        effects
    }
}

fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
