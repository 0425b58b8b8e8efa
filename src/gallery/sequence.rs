// SPDX-License-Identifier: MPL-2.0
//! Ordered item storage with placeholder substitution.
//!
//! The sequence always keeps every real [`MediaItem`]; materialization is a
//! per-index flag. Readers asking for a page outside the preload window get the
//! shared placeholder, so the render surface never sees content it should not load.

use super::Effect;
use crate::domain::media::{MediaItem, PLACEHOLDER};
use std::ops::Range;

/// Items in display order plus their materialization state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GallerySequence {
    items: Vec<MediaItem>,
    materialized: Vec<bool>,
}

impl GallerySequence {
    /// Creates a sequence where no entry is materialized yet.
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        let materialized = vec![false; items.len()];
        Self {
            items,
            materialized,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the real items, regardless of materialization.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Owned copy of the real items.
    #[must_use]
    pub fn snapshot(&self) -> Vec<MediaItem> {
        self.items.clone()
    }

    /// Real item at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// What the render surface should show at `index`: the item when
    /// materialized, the placeholder otherwise.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&MediaItem> {
        let item = self.items.get(index)?;
        if self.is_materialized(index) {
            Some(item)
        } else {
            Some(&PLACEHOLDER)
        }
    }

    #[must_use]
    pub fn is_materialized(&self, index: usize) -> bool {
        self.materialized.get(index).copied().unwrap_or(false)
    }

    /// Indices currently holding real content, ascending.
    #[must_use]
    pub fn materialized_indices(&self) -> Vec<usize> {
        self.materialized
            .iter()
            .enumerate()
            .filter_map(|(index, &loaded)| loaded.then_some(index))
            .collect()
    }

    /// Brings the materialization state in line with `window`.
    ///
    /// Evictions are reported before materializations. Entries already in the
    /// right state produce no effect, so calling this twice is a no-op the
    /// second time.
    pub fn reconcile(&mut self, window: &Range<usize>) -> Vec<Effect> {
        let mut evicted = Vec::new();
        let mut materialized = Vec::new();

        for (index, loaded) in self.materialized.iter_mut().enumerate() {
            let wanted = window.contains(&index);
            if wanted && !*loaded {
                *loaded = true;
                materialized.push(Effect::Materialized(index));
            } else if !wanted && *loaded {
                *loaded = false;
                evicted.push(Effect::Evicted(index));
            }
        }

        evicted.extend(materialized);
        evicted
    }

    /// Appends items at the tail, unmaterialized.
    pub fn push_back(&mut self, items: Vec<MediaItem>) {
        self.materialized.resize(self.materialized.len() + items.len(), false);
        self.items.extend(items);
    }

    /// Inserts items at the head, unmaterialized. Existing entries keep their state.
    pub fn prepend(&mut self, items: Vec<MediaItem>) {
        let count = items.len();
        self.items.splice(0..0, items);
        self.materialized.splice(0..0, std::iter::repeat_n(false, count));
    }

    /// Removes and returns the entry at `index`.
    pub fn remove(&mut self, index: usize) -> Option<MediaItem> {
        if index >= self.items.len() {
            return None;
        }
        self.materialized.remove(index);
        Some(self.items.remove(index))
    }

    /// Swaps the entry at `index`, keeping its materialization state.
    pub fn replace(&mut self, index: usize, item: MediaItem) -> Option<MediaItem> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, item))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.materialized.clear();
    }
}
