// SPDX-License-Identifier: MPL-2.0
//! Video playback lifecycle.
//!
//! The lightbox plays at most one video at a time. [`PlayerLifecycleManager`]
//! owns the single [`PlayerSession`] and drives the external decode/render
//! pipeline through the [`VideoBackend`](crate::application::port::VideoBackend) port.

pub mod manager;
pub mod session;

pub use manager::{PlayerLifecycleManager, VideoSettings};
pub use session::PlayerSession;
