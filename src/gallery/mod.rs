// SPDX-License-Identifier: MPL-2.0
//! Gallery paging core.
//!
//! The gallery keeps the ordered item sequence, the current page and the
//! materialization state of every entry. Every change goes through an explicit
//! transition that returns the ordered list of [`Effect`]s the host must apply,
//! so ordering can be tested without any UI toolkit.
//!
//! - [`preload`]: window computation around the current page
//! - [`sequence`]: item storage with placeholder substitution
//! - [`controller`]: current-page state machine
//! - [`mutation`]: append/insert/delete/replace with drag and settle deferral

pub mod controller;
pub mod mutation;
pub mod preload;
pub mod sequence;

pub use controller::{GallerySettings, PageIndexController, PageInfo};
pub use mutation::GalleryMutationLog;
pub use preload::{window, PreloadWindow};
pub use sequence::GallerySequence;

use crate::domain::media::MediaUrl;

/// What triggered a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// Explicit navigation (`go_to`, `next`, `previous`, initial page).
    /// The render surface is asked to scroll.
    Jump,
    /// A drag gesture settled on a page; the surface is already there.
    Drag,
    /// Indices shifted under the current item (head insert, deletion settle).
    /// Edge notifications are not fired.
    Reindex,
}

/// Side effect derived from a gallery state change, in the order it must be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Scroll the render surface to this page.
    ScrollTo(usize),
    /// The entry entered the preload window and now holds real content.
    Materialized(usize),
    /// The entry left the preload window and is now a placeholder.
    Evicted(usize),
    /// The current page is now this index.
    PageChanged(usize),
    /// Refresh the dynamic background from this page once the delay elapses.
    RefreshBackground { page: usize },
    /// Paging forward came near the last page.
    NearRightEnd,
    /// Paging backward came near the first page.
    NearLeftEnd,
    /// Hand the player the current page's video URL (or none).
    SwitchVideo(Option<MediaUrl>),
    /// Page count changed; frames must be recomputed.
    LayoutChanged,
    /// Items were added, removed or replaced.
    SequenceUpdated,
    /// A deletion is pending; call settle after the delete delay.
    ScheduleDeleteSettle,
    /// The gallery must close (last item deleted).
    Dismissed,
}
